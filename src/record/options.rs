use serde::{Deserialize, Serialize};

/// How `diff()` phrases its line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStyle {
    /// `diff=<delta>`
    #[default]
    Plain,
    /// `diff updated for <name>: <delta>`
    Attributed,
}

/// Presentation choices fixed when a record is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordOptions {
    /// Emit `init <name>`, `alpha ready`, `beta ready` on construction.
    pub announce_on_init: bool,
    pub diff_style: DiffStyle,
}

impl RecordOptions {
    pub fn announcing(diff_style: DiffStyle) -> Self {
        Self {
            announce_on_init: true,
            diff_style,
        }
    }
}
