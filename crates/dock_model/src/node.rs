//! Layout tree nodes
//!
//! Every node shares one [`Node`] record (id, parent link, children, weight,
//! size constraints, rectangle) and carries a [`NodeData`] payload for the
//! variant-specific parts. Parent links are plain ids resolved through the
//! owning [`Model`](crate::Model); only the children list expresses ownership.

use crate::{
    CloseType, NodeId, Orientation, Rect, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, DEFAULT_WEIGHT,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Enumeration of all node types in the layout tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Row,
    TabSet,
    Tab,
}

impl NodeType {
    /// Whether a node of this type may be attached under a node of type `parent`
    pub fn can_attach_to(self, parent: NodeType) -> bool {
        matches!(
            (parent, self),
            (NodeType::Row, NodeType::Row)
                | (NodeType::Row, NodeType::TabSet)
                | (NodeType::TabSet, NodeType::Tab)
        )
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Row => "row",
            Self::TabSet => "tabset",
            Self::Tab => "tab",
        })
    }
}

/// Resolved minimum and maximum extents of a node along both axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeLimits {
    pub min_width: f64,
    pub min_height: f64,
    pub max_width: f64,
    pub max_height: f64,
}

impl SizeLimits {
    pub fn new(min_width: f64, min_height: f64, max_width: f64, max_height: f64) -> Self {
        Self {
            min_width,
            min_height,
            max_width,
            max_height,
        }
        .normalized()
    }

    /// No constraint beyond the default bounds
    pub fn unbounded() -> Self {
        Self {
            min_width: DEFAULT_MIN_SIZE,
            min_height: DEFAULT_MIN_SIZE,
            max_width: DEFAULT_MAX_SIZE,
            max_height: DEFAULT_MAX_SIZE,
        }
    }

    pub fn min(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.min_width,
            Orientation::Vertical => self.min_height,
        }
    }

    pub fn max(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.max_width,
            Orientation::Vertical => self.max_height,
        }
    }

    /// Clamp a main-axis size into `[min, max]` for `orientation`
    pub fn clamp(&self, orientation: Orientation, size: f64) -> f64 {
        size.min(self.max(orientation)).max(self.min(orientation))
    }

    /// Raise each maximum to at least its minimum
    pub fn normalized(self) -> Self {
        Self {
            max_width: self.max_width.max(self.min_width),
            max_height: self.max_height.max(self.min_height),
            ..self
        }
    }
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Constraints declared on a node by the layout description
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeclaredLimits {
    pub min_width: Option<f64>,
    pub min_height: Option<f64>,
    pub max_width: Option<f64>,
    pub max_height: Option<f64>,
}

impl DeclaredLimits {
    /// Tighten computed limits by whatever this node declares
    pub fn apply(&self, computed: SizeLimits) -> SizeLimits {
        SizeLimits::new(
            self.min_width.map_or(computed.min_width, |m| computed.min_width.max(m)),
            self.min_height.map_or(computed.min_height, |m| computed.min_height.max(m)),
            self.max_width.map_or(computed.max_width, |m| computed.max_width.min(m)),
            self.max_height.map_or(computed.max_height, |m| computed.max_height.min(m)),
        )
    }

    /// Declared values with `fallback` filling the gaps
    pub fn or(&self, fallback: SizeLimits) -> SizeLimits {
        SizeLimits::new(
            self.min_width.unwrap_or(fallback.min_width),
            self.min_height.unwrap_or(fallback.min_height),
            self.max_width.unwrap_or(fallback.max_width),
            self.max_height.unwrap_or(fallback.max_height),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowData {
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabSetData {
    pub name: Option<String>,
    /// Index of the selected tab, if any
    pub selected: Option<usize>,
    /// Overrides the global `tabSetEnableDeleteWhenEmpty` when set
    pub enable_delete_when_empty: Option<bool>,
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabData {
    pub name: String,
    pub component: Option<String>,
    /// Overrides the global `tabCloseType` when set
    pub close_type: Option<CloseType>,
    pub enable_close: bool,
    pub extra: Map<String, Value>,
}

impl Default for TabData {
    fn default() -> Self {
        Self {
            name: String::new(),
            component: None,
            close_type: None,
            enable_close: true,
            extra: Map::new(),
        }
    }
}

/// Variant-specific payload of a node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Row(RowData),
    TabSet(TabSetData),
    Tab(TabData),
}

/// A node in the layout tree
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    weight: f64,
    declared: DeclaredLimits,
    limits: SizeLimits,
    rect: Option<Rect>,
    data: NodeData,
}

impl Node {
    /// Create a detached node with default weight and no rectangle
    pub fn new(id: NodeId, data: NodeData) -> Self {
        Self {
            id,
            parent: None,
            children: Vec::new(),
            weight: DEFAULT_WEIGHT,
            declared: DeclaredLimits::default(),
            limits: SizeLimits::unbounded(),
            rect: None,
            data,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.set_weight(weight);
        self
    }

    pub fn with_declared(mut self, declared: DeclaredLimits) -> Self {
        self.declared = declared;
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn node_type(&self) -> NodeType {
        match self.data {
            NodeData::Row(_) => NodeType::Row,
            NodeData::TabSet(_) => NodeType::TabSet,
            NodeData::Tab(_) => NodeType::Tab,
        }
    }

    pub fn is_row(&self) -> bool {
        matches!(self.data, NodeData::Row(_))
    }

    pub fn is_tabset(&self) -> bool {
        matches!(self.data, NodeData::TabSet(_))
    }

    pub fn is_tab(&self) -> bool {
        matches!(self.data, NodeData::Tab(_))
    }

    /// Get the ID of the parent node (None for root or detached nodes)
    pub fn parent(&self) -> Option<&NodeId> {
        self.parent.as_ref()
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    /// Get the IDs of child nodes in logical order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.children
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Set the relative weight; negative values are treated as zero
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight.max(0.0);
    }

    pub fn declared(&self) -> &DeclaredLimits {
        &self.declared
    }

    /// Limits computed by the last constraint pass
    pub fn limits(&self) -> &SizeLimits {
        &self.limits
    }

    pub fn set_limits(&mut self, limits: SizeLimits) {
        self.limits = limits.normalized();
    }

    pub fn min_width(&self) -> f64 {
        self.limits.min_width
    }

    pub fn min_height(&self) -> f64 {
        self.limits.min_height
    }

    pub fn max_width(&self) -> f64 {
        self.limits.max_width
    }

    pub fn max_height(&self) -> f64 {
        self.limits.max_height
    }

    /// The rectangle assigned by the last layout pass, if any
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Store a rectangle without laying out children
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = Some(rect);
    }

    pub fn clear_rect(&mut self) {
        self.rect = None;
    }

    pub fn data(&self) -> &NodeData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut NodeData {
        &mut self.data
    }

    pub fn as_tabset(&self) -> Option<&TabSetData> {
        match &self.data {
            NodeData::TabSet(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_tab(&self) -> Option<&TabData> {
        match &self.data {
            NodeData::Tab(data) => Some(data),
            _ => None,
        }
    }

    /// Rendering-only fields carried over from the layout description
    pub fn extra(&self) -> &Map<String, Value> {
        match &self.data {
            NodeData::Row(data) => &data.extra,
            NodeData::TabSet(data) => &data.extra,
            NodeData::Tab(data) => &data.extra,
        }
    }

    /// Check if this node can have children
    pub fn can_have_children(&self) -> bool {
        !self.is_tab()
    }
}
