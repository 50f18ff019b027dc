//! Design token collections produced by style aggregation.

use serde::{Deserialize, Serialize};

/// A canonical, named, deduplicated style value bound to a design-system
/// variable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignToken {
    pub name: String,
    /// CSS-literal value: hex color, px size, shadow expression, font shorthand.
    pub value: String,
    pub eds_variable: String,
}

impl DesignToken {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        eds_variable: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            eds_variable: eds_variable.into(),
        }
    }
}

/// The full token set handed to downstream emission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleTokens {
    pub colors: Vec<DesignToken>,
    pub typography: Vec<DesignToken>,
    pub spacing: Vec<DesignToken>,
    pub shadows: Vec<DesignToken>,
    pub breakpoints: Vec<DesignToken>,
}
