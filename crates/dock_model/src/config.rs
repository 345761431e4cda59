//! Model-wide layout configuration

use crate::CloseType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lower bound used for nodes without a declared minimum
pub const DEFAULT_MIN_SIZE: f64 = 0.0;

/// Upper bound used for nodes without a declared maximum
pub const DEFAULT_MAX_SIZE: f64 = 99_999.0;

/// Weight given to nodes that do not declare one
pub const DEFAULT_WEIGHT: f64 = 100.0;

/// Global options read from the `global` object of a layout description.
///
/// Keys this crate does not recognise are kept in `extra` untouched so that
/// rendering collaborators can read them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalConfig {
    /// Mirror horizontal rows and dock targets for right-to-left reading order
    pub enable_rtl: bool,
    /// Thickness of the splitter between adjacent row children
    pub splitter_size: f64,
    /// Lay the root row out vertically instead of horizontally
    pub root_orientation_vertical: bool,
    pub tab_set_min_width: f64,
    pub tab_set_min_height: f64,
    pub tab_set_max_width: f64,
    pub tab_set_max_height: f64,
    /// Default for tabsets that do not set `enableDeleteWhenEmpty`
    pub tab_set_enable_delete_when_empty: bool,
    /// Default close policy for tabs that do not set `closeType`
    pub tab_close_type: CloseType,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            enable_rtl: false,
            splitter_size: 8.0,
            root_orientation_vertical: false,
            tab_set_min_width: DEFAULT_MIN_SIZE,
            tab_set_min_height: DEFAULT_MIN_SIZE,
            tab_set_max_width: DEFAULT_MAX_SIZE,
            tab_set_max_height: DEFAULT_MAX_SIZE,
            tab_set_enable_delete_when_empty: true,
            tab_close_type: CloseType::Visible,
            extra: Map::new(),
        }
    }
}
