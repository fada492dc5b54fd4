use serde::Deserialize;
use thiserror::Error;

/// Toggles for the startup notices; everything else about the reporter is
/// unconditional.
///
/// Hosts hand these over as raw JSON, keyed camelCase. Missing keys fall
/// back to their defaults, so `{}` enables every notice.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ReporterOptions {
    /// Announce the manifest location (or its absence) on attach.
    pub notify_cwd: bool,
    /// Announce the loaded plugins on attach.
    pub notify_plugins: bool,
}

impl Default for ReporterOptions {
    fn default() -> Self {
        Self {
            notify_cwd: true,
            notify_plugins: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid reporter options: {0}")]
    Invalid(#[from] serde_json::Error),
}

impl ReporterOptions {
    /// Parse options out of the host's raw configuration value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, OptionsError> {
        Ok(serde_json::from_value(value)?)
    }
}
