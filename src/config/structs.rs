//! Configuration struct definitions.

use serde::Deserialize;

/// Level and caller settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Level used by the print family.
    pub default_level: String,
    /// Minimum level written.
    pub output_level: String,
    /// Extra frames to skip when reporting the caller.
    pub caller_offset: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
            output_level: "notset".to_string(),
            caller_offset: 0,
        }
    }
}

/// Sink and line layout settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `stdout`, `stderr`, or a file path.
    pub target: String,
    /// `auto`, `always` or `never`.
    pub color: String,
    /// Header flag names, e.g. `["date", "time", "shortfile"]`.
    pub flags: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            target: "stdout".to_string(),
            color: "auto".to_string(),
            flags: vec![
                "date".to_string(),
                "time".to_string(),
                "shortfile".to_string(),
            ],
        }
    }
}
