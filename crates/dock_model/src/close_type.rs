//! Tab close policy

use crate::ModelError;
use serde::{Deserialize, Serialize};

/// When a tab's close affordance is interactive.
///
/// Stored on tabs and handed to the renderer; layout code never inspects it.
/// Serialized as its numeric value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CloseType {
    /// Closable while the close button is visible (selected or hovered)
    #[default]
    Visible = 1,
    /// Closable whether selected or not
    Always = 2,
    /// Closable only while selected
    Selected = 3,
}

impl TryFrom<u8> for CloseType {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Visible),
            2 => Ok(Self::Always),
            3 => Ok(Self::Selected),
            other => Err(ModelError::InvalidCloseType(other)),
        }
    }
}

impl From<CloseType> for u8 {
    fn from(value: CloseType) -> Self {
        value as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_values() {
        assert_eq!(u8::from(CloseType::Visible), 1);
        assert_eq!(u8::from(CloseType::Always), 2);
        assert_eq!(u8::from(CloseType::Selected), 3);
        assert!(matches!(CloseType::try_from(4), Err(ModelError::InvalidCloseType(4))));
    }

    #[test]
    fn test_serde_uses_numbers() {
        assert_eq!(serde_json::to_string(&CloseType::Selected).unwrap(), "3");
        let parsed: CloseType = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, CloseType::Always);
        assert!(serde_json::from_str::<CloseType>("0").is_err());
    }
}
