//! Layout model: root row, global configuration and id index

use crate::{
    CloseType, DeclaredLimits, GlobalConfig, ModelError, ModelJson, Node, NodeData, NodeId,
    NodeJson, NodeType, Orientation, Rect, Result, RowData, TabData, TabSetData, DEFAULT_WEIGHT,
};
use std::collections::{HashMap, HashSet};

/// The complete layout: a root row plus every node reachable from it,
/// indexed by id.
#[derive(Debug, Clone)]
pub struct Model {
    config: GlobalConfig,
    root: NodeId,
    nodes: HashMap<NodeId, Node>,
    /// Whether cached size limits reflect the current structure
    limits_valid: bool,
    /// Bumped on every structural mutation
    revision: u64,
}

impl Model {
    /// Create a model holding an empty root row
    pub fn new(config: GlobalConfig) -> Self {
        let root = Node::new(NodeId::new(), NodeData::Row(RowData::default()));
        let root_id = root.id().clone();
        let mut nodes = HashMap::new();
        nodes.insert(root_id.clone(), root);
        Self {
            config,
            root: root_id,
            nodes,
            limits_valid: false,
            revision: 0,
        }
    }

    /// Build a model from a parsed layout description.
    ///
    /// The root of `layout` must be a row. Ids must be unique across the
    /// whole description.
    pub fn from_json(json: ModelJson) -> Result<Self> {
        if !matches!(json.layout, NodeJson::Row(_)) {
            return Err(ModelError::InvalidStructure(format!(
                "layout root must be a row, found {}",
                json.layout.type_name()
            )));
        }

        let mut staged = Vec::new();
        let root = build_nodes(&json.layout, None, &mut staged)?;

        let mut model = Self {
            config: json.global,
            root,
            nodes: HashMap::with_capacity(staged.len()),
            limits_valid: false,
            revision: 0,
        };
        model.commit(staged)?;

        tracing::debug!(
            target: "dock_model::model",
            nodes = model.nodes.len(),
            rtl = model.config.enable_rtl,
            "model built"
        );
        Ok(model)
    }

    /// Build a model from a JSON string
    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::from_json(serde_json::from_str(s)?)
    }

    /// Build a model from an untyped JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Self::from_json(serde_json::from_value(value)?)
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Whether layout is mirrored for right-to-left reading order
    pub fn is_rtl(&self) -> bool {
        self.config.enable_rtl
    }

    /// Switch reading direction.
    ///
    /// Physical placement depends on the direction, so every rectangle is
    /// dropped and geometry queries fail until the next layout pass. Size
    /// limits stay valid.
    pub fn set_rtl(&mut self, rtl: bool) {
        if self.config.enable_rtl == rtl {
            return;
        }
        self.config.enable_rtl = rtl;
        for node in self.nodes.values_mut() {
            node.clear_rect();
        }
    }

    pub fn splitter_size(&self) -> f64 {
        self.config.splitter_size
    }

    pub fn root_id(&self) -> &NodeId {
        &self.root
    }

    pub fn root(&self) -> &Node {
        // The root is inserted at construction and can never be removed
        &self.nodes[&self.root]
    }

    /// Look up a node by id
    pub fn node<Q: AsRef<str> + ?Sized>(&self, id: &Q) -> Option<&Node> {
        self.nodes.get(id.as_ref())
    }

    /// Look up a node by id, failing with [`ModelError::NodeNotFound`]
    pub fn get_node<Q: AsRef<str> + ?Sized>(&self, id: &Q) -> Result<&Node> {
        self.nodes
            .get(id.as_ref())
            .ok_or_else(|| ModelError::NodeNotFound(NodeId::from(id.as_ref())))
    }

    pub fn get_node_mut<Q: AsRef<str> + ?Sized>(&mut self, id: &Q) -> Result<&mut Node> {
        self.nodes
            .get_mut(id.as_ref())
            .ok_or_else(|| ModelError::NodeNotFound(NodeId::from(id.as_ref())))
    }

    pub fn contains<Q: AsRef<str> + ?Sized>(&self, id: &Q) -> bool {
        self.nodes.contains_key(id.as_ref())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Rectangle assigned by the last layout pass
    pub fn rect_of<Q: AsRef<str> + ?Sized>(&self, id: &Q) -> Option<Rect> {
        self.node(id).and_then(Node::rect)
    }

    pub fn parent_of<Q: AsRef<str> + ?Sized>(&self, id: &Q) -> Result<Option<&Node>> {
        match self.get_node(id)?.parent() {
            Some(parent) => self.get_node(parent).map(Some),
            None => Ok(None),
        }
    }

    pub fn children_of<Q: AsRef<str> + ?Sized>(&self, id: &Q) -> Result<&[NodeId]> {
        Ok(self.get_node(id)?.children())
    }

    /// Ids from the parent of `id` up to the root
    pub fn ancestors<Q: AsRef<str> + ?Sized>(&self, id: &Q) -> Result<Vec<NodeId>> {
        let mut out = Vec::new();
        let mut current = self.get_node(id)?.parent().cloned();
        while let Some(parent) = current {
            current = self.get_node(&parent)?.parent().cloned();
            out.push(parent);
        }
        Ok(out)
    }

    /// Orientation of a row at the position of `id`.
    ///
    /// The root row takes the configured root orientation and every row
    /// nested below it flips the orientation of its parent.
    pub fn orientation_of<Q: AsRef<str> + ?Sized>(&self, id: &Q) -> Result<Orientation> {
        let root_orientation = if self.config.root_orientation_vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };

        let mut orientation = root_orientation;
        for ancestor in self.ancestors(id)? {
            if self.get_node(&ancestor)?.is_row() {
                orientation = orientation.flip();
            }
        }
        Ok(orientation)
    }

    /// Visit every node reachable from the root in pre-order, with its depth
    pub fn visit_nodes<F>(&self, mut f: F)
    where
        F: FnMut(&Node, usize),
    {
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            f(node, depth);
            for child in node.children().iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    /// Close policy of a tab, falling back to the global default
    pub fn effective_close_type<Q: AsRef<str> + ?Sized>(&self, id: &Q) -> Option<CloseType> {
        self.node(id)
            .and_then(Node::as_tab)
            .map(|tab| tab.close_type.unwrap_or(self.config.tab_close_type))
    }

    /// Whether an empty tabset should be removed by [`Model::tidy`]
    pub fn is_delete_when_empty<Q: AsRef<str> + ?Sized>(&self, id: &Q) -> bool {
        self.node(id)
            .and_then(Node::as_tabset)
            .map(|ts| {
                ts.enable_delete_when_empty
                    .unwrap_or(self.config.tab_set_enable_delete_when_empty)
            })
            .unwrap_or(false)
    }

    /// Whether cached size limits are current
    pub fn limits_valid(&self) -> bool {
        self.limits_valid
    }

    /// Record that a constraint pass has refreshed every cached limit
    pub fn mark_limits_valid(&mut self) {
        self.limits_valid = true;
    }

    /// Structural revision; changes whenever nodes are attached, detached or moved
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn structure_changed(&mut self) {
        self.limits_valid = false;
        self.revision += 1;
    }

    /// Swap the root between horizontal and vertical layout
    pub(crate) fn flip_root_orientation(&mut self) {
        self.config.root_orientation_vertical = !self.config.root_orientation_vertical;
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut HashMap<NodeId, Node> {
        &mut self.nodes
    }

    /// Insert freshly built nodes, rejecting any id already in use
    pub(crate) fn commit(&mut self, staged: Vec<Node>) -> Result<()> {
        let mut seen = HashSet::with_capacity(staged.len());
        for node in &staged {
            if self.nodes.contains_key(node.id()) || !seen.insert(node.id().clone()) {
                return Err(ModelError::DuplicateId(node.id().clone()));
            }
        }
        for node in staged {
            self.nodes.insert(node.id().clone(), node);
        }
        Ok(())
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(GlobalConfig::default())
    }
}

/// Build the nodes described by `json` in pre-order, checking that every
/// node may be attached under its parent. Returns the id of the subtree root.
pub(crate) fn build_nodes(
    json: &NodeJson,
    parent: Option<(&NodeId, NodeType)>,
    out: &mut Vec<Node>,
) -> Result<NodeId> {
    let node_type = match json {
        NodeJson::Row(_) => NodeType::Row,
        NodeJson::TabSet(_) => NodeType::TabSet,
        NodeJson::Tab(_) => NodeType::Tab,
    };

    if let Some((parent_id, parent_type)) = parent {
        if !node_type.can_attach_to(parent_type) {
            return Err(ModelError::InvalidStructure(format!(
                "{node_type} cannot be a child of {parent_type} '{parent_id}'"
            )));
        }
    }

    let id = json.id().map(NodeId::from).unwrap_or_default();

    let (mut node, children) = match json {
        NodeJson::Row(row) => {
            let declared = DeclaredLimits {
                min_width: row.min_width,
                min_height: row.min_height,
                max_width: row.max_width,
                max_height: row.max_height,
            };
            let node = Node::new(
                id.clone(),
                NodeData::Row(RowData {
                    extra: row.extra.clone(),
                }),
            )
            .with_declared(declared);
            (weighted(node, row.weight), row.children.as_slice())
        }
        NodeJson::TabSet(tabset) => {
            let declared = DeclaredLimits {
                min_width: tabset.min_width,
                min_height: tabset.min_height,
                max_width: tabset.max_width,
                max_height: tabset.max_height,
            };
            let node = Node::new(
                id.clone(),
                NodeData::TabSet(TabSetData {
                    name: tabset.name.clone(),
                    selected: tabset
                        .selected
                        .and_then(|s| tabset.children.len().checked_sub(1).map(|last| s.min(last))),
                    enable_delete_when_empty: tabset.enable_delete_when_empty,
                    extra: tabset.extra.clone(),
                }),
            )
            .with_declared(declared);
            (weighted(node, tabset.weight), tabset.children.as_slice())
        }
        NodeJson::Tab(tab) => {
            let node = Node::new(
                id.clone(),
                NodeData::Tab(TabData {
                    name: tab.name.clone().unwrap_or_default(),
                    component: tab.component.clone(),
                    close_type: tab.close_type,
                    enable_close: tab.enable_close.unwrap_or(true),
                    extra: tab.extra.clone(),
                }),
            );
            (node, &[][..])
        }
    };

    node.set_parent(parent.map(|(parent_id, _)| parent_id.clone()));
    let index = out.len();
    out.push(node);

    for child in children {
        let child_id = build_nodes(child, Some((&id, node_type)), out)?;
        out[index].children_mut().push(child_id);
    }

    Ok(id)
}

fn weighted(mut node: Node, weight: Option<f64>) -> Node {
    node.set_weight(weight.unwrap_or(DEFAULT_WEIGHT));
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn two_tabsets(rtl: bool) -> Model {
        Model::from_value(json!({
            "global": { "enableRtl": rtl, "splitterSize": 10 },
            "layout": {
                "type": "row",
                "id": "root",
                "children": [
                    { "type": "tabset", "id": "ts1", "weight": 50,
                      "children": [ { "type": "tab", "id": "t1", "name": "One" } ] },
                    { "type": "row", "id": "inner", "children": [
                        { "type": "tabset", "id": "ts2", "weight": 25, "children": [] }
                    ] }
                ]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_is_rtl_reflects_config() {
        let model = Model::from_value(json!({
            "global": { "enableRtl": true },
            "layout": { "type": "row", "children": [] }
        }))
        .unwrap();
        assert!(model.is_rtl());

        let model = Model::from_value(json!({
            "layout": { "type": "row", "children": [] }
        }))
        .unwrap();
        assert!(!model.is_rtl());
    }

    #[test]
    fn test_lookup_and_parent_links() {
        let model = two_tabsets(false);
        assert_eq!(model.node_count(), 5);
        assert_eq!(model.root_id().as_str(), "root");

        let ts2 = model.node("ts2").unwrap();
        assert_eq!(ts2.node_type(), NodeType::TabSet);
        assert_eq!(ts2.weight(), 25.0);
        assert_eq!(ts2.parent().map(NodeId::as_str), Some("inner"));
        assert_eq!(
            model.ancestors("t1").unwrap(),
            vec![NodeId::from("ts1"), NodeId::from("root")]
        );
        assert!(model.node("missing").is_none());
        assert!(matches!(
            model.get_node("missing"),
            Err(ModelError::NodeNotFound(_))
        ));
    }

    #[test]
    fn test_orientation_alternates_by_depth() {
        let model = two_tabsets(false);
        assert_eq!(model.orientation_of("root").unwrap(), Orientation::Horizontal);
        assert_eq!(model.orientation_of("inner").unwrap(), Orientation::Vertical);

        let vertical = Model::from_value(json!({
            "global": { "rootOrientationVertical": true },
            "layout": { "type": "row", "id": "r", "children": [
                { "type": "row", "id": "c", "children": [] }
            ] }
        }))
        .unwrap();
        assert_eq!(vertical.orientation_of("r").unwrap(), Orientation::Vertical);
        assert_eq!(vertical.orientation_of("c").unwrap(), Orientation::Horizontal);
    }

    #[test]
    fn test_generated_ids_for_undeclared_nodes() {
        let model = Model::from_value(json!({
            "layout": { "type": "row", "children": [ { "type": "tabset" } ] }
        }))
        .unwrap();
        let child = &model.root().children()[0];
        assert!(child.is_generated());
        assert_eq!(model.node(child).unwrap().weight(), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Model::from_value(json!({
            "layout": { "type": "row", "children": [
                { "type": "tabset", "id": "a" },
                { "type": "tabset", "id": "a" }
            ] }
        }));
        assert!(matches!(result, Err(ModelError::DuplicateId(id)) if id.as_str() == "a"));
    }

    #[test]
    fn test_structure_rules() {
        let tab_in_row = Model::from_value(json!({
            "layout": { "type": "row", "children": [ { "type": "tab" } ] }
        }));
        assert!(matches!(tab_in_row, Err(ModelError::InvalidStructure(_))));

        let tabset_root = Model::from_value(json!({
            "layout": { "type": "tabset", "children": [] }
        }));
        assert!(matches!(tabset_root, Err(ModelError::InvalidStructure(_))));

        let bad_json = Model::from_json_str("{ not json");
        assert!(matches!(bad_json, Err(ModelError::Json(_))));
    }

    #[test]
    fn test_effective_policies() {
        let model = Model::from_value(json!({
            "global": { "tabCloseType": 2, "tabSetEnableDeleteWhenEmpty": false },
            "layout": { "type": "row", "children": [
                { "type": "tabset", "id": "keep", "children": [
                    { "type": "tab", "id": "plain" },
                    { "type": "tab", "id": "sel", "closeType": 3 }
                ] },
                { "type": "tabset", "id": "drop", "enableDeleteWhenEmpty": true }
            ] }
        }))
        .unwrap();
        assert_eq!(model.effective_close_type("plain"), Some(CloseType::Always));
        assert_eq!(model.effective_close_type("sel"), Some(CloseType::Selected));
        assert_eq!(model.effective_close_type("keep"), None);
        assert!(!model.is_delete_when_empty("keep"));
        assert!(model.is_delete_when_empty("drop"));
    }

    #[test]
    fn test_visit_nodes_pre_order() {
        let model = two_tabsets(false);
        let mut seen = Vec::new();
        model.visit_nodes(|node, depth| seen.push((node.id().to_string(), depth)));
        let expected: Vec<(String, usize)> = [
            ("root", 0),
            ("ts1", 1),
            ("t1", 2),
            ("inner", 1),
            ("ts2", 2),
        ]
        .iter()
        .map(|(id, depth)| (id.to_string(), *depth))
        .collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_set_rtl_drops_rectangles() {
        let mut model = two_tabsets(false);
        model.get_node_mut("ts1").unwrap().set_rect(Rect::new(0.0, 0.0, 50.0, 50.0));

        model.set_rtl(false);
        assert!(model.rect_of("ts1").is_some());

        model.set_rtl(true);
        assert!(model.is_rtl());
        assert_eq!(model.rect_of("ts1"), None);
    }
}
