//! Layout description input
//!
//! The shapes accepted by [`Model::from_json`](crate::Model::from_json).
//! Only the fields that matter to layout are typed; anything else on a node
//! is collected into its `extra` map and carried on the built node.

use crate::{CloseType, GlobalConfig};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level layout description: global options plus the root row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelJson {
    #[serde(default)]
    pub global: GlobalConfig,
    pub layout: NodeJson,
}

/// A node of the layout description, discriminated by its `type` field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeJson {
    Row(RowJson),
    TabSet(TabSetJson),
    Tab(TabJson),
}

impl NodeJson {
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Row(row) => row.id.as_deref(),
            Self::TabSet(tabset) => tabset.id.as_deref(),
            Self::Tab(tab) => tab.id.as_deref(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Row(_) => "row",
            Self::TabSet(_) => "tabset",
            Self::Tab(_) => "tab",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f64>,
    #[serde(default)]
    pub children: Vec<NodeJson>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabSetJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_delete_when_empty: Option<bool>,
    #[serde(default)]
    pub children: Vec<NodeJson>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_type: Option<CloseType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_close: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
