use crate::LayoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects how a [`WrapPanel`](crate::WrapPanel) treats content that fits on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapMode {
    /// Greedy wrapping. A single row is stretched to the panel's render
    /// height when no line break occurred.
    #[default]
    Greedy,
    /// Checks the summed child widths first and stretches the row to the
    /// render height when everything fits; wraps greedily otherwise.
    Stretch,
}

impl WrapMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WrapMode::Greedy => "greedy",
            WrapMode::Stretch => "stretch",
        }
    }
}

impl fmt::Display for WrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WrapMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(WrapMode::Greedy),
            "stretch" => Ok(WrapMode::Stretch),
            _ => Err(LayoutError::UnknownMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub mode: WrapMode,
    /// Whether greedy mode stretches a single unbroken row to the render height.
    ///
    /// Has no effect in [`WrapMode::Stretch`], which always stretches content
    /// that fits. Defaults to `true`.
    pub stretch_single_line: bool,
}

impl LayoutConfig {
    pub fn with_mode(mode: WrapMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: WrapMode::Greedy,
            stretch_single_line: true,
        }
    }
}
