//! Structural mutations of the layout tree
//!
//! Attaching, detaching and moving subtrees, plus the `tidy` pass that
//! collapses rows and tabsets left redundant by those edits. Every mutation
//! invalidates cached size limits.

use crate::model::build_nodes;
use crate::{Model, ModelError, Node, NodeData, NodeId, NodeJson, NodeType, Result};

impl Model {
    /// Build `json` and attach it under `parent`.
    ///
    /// `position` is the logical child index to insert at; `None` or an index
    /// past the end appends. On error (bad parent type, id collision) the
    /// model is left unchanged.
    pub fn add_node<Q: AsRef<str> + ?Sized>(
        &mut self,
        parent: &Q,
        position: Option<usize>,
        json: &NodeJson,
    ) -> Result<NodeId> {
        let parent_node = self.get_node(parent)?;
        let parent_id = parent_node.id().clone();
        let parent_type = parent_node.node_type();

        let mut staged = Vec::new();
        let id = build_nodes(json, Some((&parent_id, parent_type)), &mut staged)?;
        let added = staged.len();
        self.commit(staged)?;
        self.attach(&id, &parent_id, position)?;
        self.structure_changed();

        tracing::debug!(
            target: "dock_model::model",
            node = %id,
            parent = %parent_id,
            added,
            "subtree attached"
        );
        Ok(id)
    }

    /// Detach `id` and its whole subtree from the model.
    ///
    /// Returns the removed nodes in pre-order. The root cannot be removed.
    pub fn remove_node<Q: AsRef<str> + ?Sized>(&mut self, id: &Q) -> Result<Vec<Node>> {
        let id = self.get_node(id)?.id().clone();
        if id == *self.root_id() {
            return Err(ModelError::InvalidStructure(
                "the root row cannot be removed".to_string(),
            ));
        }

        self.detach(&id)?;

        let mut removed = Vec::new();
        let mut stack = vec![id.clone()];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes_mut().remove(&next) {
                stack.extend(node.children().iter().rev().cloned());
                removed.push(node);
            }
        }
        self.structure_changed();

        tracing::debug!(
            target: "dock_model::model",
            node = %id,
            removed = removed.len(),
            "subtree removed"
        );
        Ok(removed)
    }

    /// Move `id` under `new_parent` at logical `position`.
    ///
    /// The position is interpreted after `id` has been detached from its
    /// current parent. A node cannot be moved into its own subtree.
    pub fn move_node<Q: AsRef<str> + ?Sized, P: AsRef<str> + ?Sized>(
        &mut self,
        id: &Q,
        new_parent: &P,
        position: Option<usize>,
    ) -> Result<()> {
        let node = self.get_node(id)?;
        let id = node.id().clone();
        let node_type = node.node_type();
        let target = self.get_node(new_parent)?;
        let target_id = target.id().clone();

        if id == *self.root_id() {
            return Err(ModelError::InvalidStructure(
                "the root row cannot be moved".to_string(),
            ));
        }
        if !node_type.can_attach_to(target.node_type()) {
            return Err(ModelError::InvalidStructure(format!(
                "{node_type} cannot be a child of {} '{target_id}'",
                target.node_type()
            )));
        }
        if target_id == id || self.ancestors(&target_id)?.contains(&id) {
            return Err(ModelError::InvalidStructure(format!(
                "cannot move '{id}' into its own subtree"
            )));
        }

        self.detach(&id)?;
        self.attach(&id, &target_id, position)?;
        self.structure_changed();

        tracing::debug!(
            target: "dock_model::model",
            node = %id,
            parent = %target_id,
            "node moved"
        );
        Ok(())
    }

    /// Remove structure made redundant by edits.
    ///
    /// - empty tabsets that allow deletion when empty are removed
    /// - empty rows other than the root are removed
    /// - a non-root row with a single tabset child is replaced by that tabset
    /// - a row whose single child is a row is replaced by the grandchildren,
    ///   which keep their axis (under the root, the root orientation flips)
    ///
    /// Returns whether anything changed.
    pub fn tidy(&mut self) -> bool {
        let mut changed = false;
        while self.tidy_once() {
            changed = true;
        }
        if changed {
            tracing::debug!(target: "dock_model::model", nodes = self.node_count(), "tidied");
        }
        changed
    }

    fn tidy_once(&mut self) -> bool {
        // Post-order so that children are settled before their parents
        let mut order = Vec::new();
        self.visit_nodes(|node, _| order.push(node.id().clone()));
        order.reverse();

        let root = self.root_id().clone();
        for id in order {
            let Some(node) = self.node(&id) else {
                continue;
            };
            let node_type = node.node_type();
            let children = node.children().to_vec();
            let is_root = id == root;

            let result = match node_type {
                NodeType::TabSet if children.is_empty() && self.is_delete_when_empty(&id) => {
                    self.remove_node(&id).map(|_| true)
                }
                NodeType::Row if !is_root && children.is_empty() => {
                    self.remove_node(&id).map(|_| true)
                }
                NodeType::Row if children.len() == 1 => {
                    let only = &children[0];
                    match self.node(only).map(Node::is_row) {
                        Some(true) => self.hoist_grandchildren(&id, only).map(|_| true),
                        Some(false) if !is_root => self.replace_with_child(&id, only).map(|_| true),
                        _ => Ok(false),
                    }
                }
                _ => Ok(false),
            };

            match result {
                Ok(true) => return true,
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(target: "dock_model::model", node = %id, error = %e, "tidy step failed");
                }
            }
        }
        false
    }

    /// Replace `row` in its parent with its only child, which inherits the row's weight
    fn replace_with_child(&mut self, row: &NodeId, child: &NodeId) -> Result<()> {
        let weight = self.get_node(row)?.weight();
        let (parent, position) = self.detach(row)?;
        self.detach(child)?;
        self.attach(child, &parent, Some(position))?;
        self.get_node_mut(child)?.set_weight(weight);
        self.nodes_mut().remove(row);
        self.structure_changed();
        Ok(())
    }

    /// Replace `inner` (the only child of `outer`) by its own children.
    ///
    /// When `outer` is not the root, the grandchildren land in the parent of
    /// `outer` at its position, their weights scaled to share the weight
    /// `outer` had. When `outer` is the root they become the root's children
    /// and the root takes the orientation `inner` had.
    fn hoist_grandchildren(&mut self, outer: &NodeId, inner: &NodeId) -> Result<()> {
        let grandchildren = self.get_node(inner)?.children().to_vec();
        let is_root = outer == self.root_id();

        let (target, mut position, scale) = if is_root {
            (outer.clone(), 0, 1.0)
        } else {
            let outer_weight = self.get_node(outer)?.weight();
            let total: f64 = grandchildren
                .iter()
                .filter_map(|id| self.node(id).map(Node::weight))
                .sum();
            let scale = if total > 0.0 { outer_weight / total } else { 0.0 };
            let (parent, position) = self.detach(outer)?;
            (parent, position, scale)
        };

        self.detach(inner)?;
        for child in &grandchildren {
            self.detach(child)?;
            self.attach(child, &target, Some(position))?;
            let node = self.get_node_mut(child)?;
            let weight = node.weight() * scale;
            node.set_weight(weight);
            position += 1;
        }

        self.nodes_mut().remove(inner);
        if is_root {
            self.flip_root_orientation();
        } else {
            self.nodes_mut().remove(outer);
        }
        self.structure_changed();
        Ok(())
    }

    /// Unlink `id` from its parent's children. Returns the former parent and position.
    fn detach(&mut self, id: &NodeId) -> Result<(NodeId, usize)> {
        let parent = self
            .get_node(id)?
            .parent()
            .cloned()
            .ok_or_else(|| ModelError::InvalidStructure(format!("'{id}' has no parent")))?;

        let parent_node = self.get_node_mut(&parent)?;
        let position = parent_node
            .children()
            .iter()
            .position(|child| child == id)
            .ok_or_else(|| {
                ModelError::InvalidStructure(format!("'{id}' missing from parent '{parent}'"))
            })?;
        parent_node.children_mut().remove(position);
        let remaining = parent_node.children().len();

        if let NodeData::TabSet(tabset) = parent_node.data_mut() {
            tabset.selected = match tabset.selected {
                Some(_) if remaining == 0 => None,
                Some(selected) if position < selected => Some(selected - 1),
                Some(selected) if position == selected => Some(selected.min(remaining - 1)),
                other => other,
            };
        }

        self.get_node_mut(id)?.set_parent(None);
        Ok((parent, position))
    }

    /// Link a detached `id` under `parent` at `position` (appending when out of range)
    fn attach(&mut self, id: &NodeId, parent: &NodeId, position: Option<usize>) -> Result<()> {
        let parent_node = self.get_node_mut(parent)?;
        let len = parent_node.children().len();
        let position = position.map_or(len, |p| p.min(len));
        parent_node.children_mut().insert(position, id.clone());

        if let NodeData::TabSet(tabset) = parent_node.data_mut() {
            if let Some(selected) = tabset.selected {
                if position <= selected {
                    tabset.selected = Some(selected + 1);
                }
            }
        }

        self.get_node_mut(id)?.set_parent(Some(parent.clone()));
        Ok(())
    }
}
