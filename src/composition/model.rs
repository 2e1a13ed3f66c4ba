use std::{fs::File, io::BufReader, path::Path};

use crate::{
    document::style::StyleConfig,
    foundation::error::{OverlayError, OverlayResult},
    timeline::config::TimelineConfig,
};

/// Everything needed to generate one overlay, as read from a JSON file.
///
/// Both sections default field by field, so a file only needs the values it changes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Phase timing and slide distances.
    pub timeline: TimelineConfig,
    /// Text, colors and sizing.
    pub style: StyleConfig,
}

impl OverlayConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> OverlayResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| OverlayError::serde(format!("parse overlay config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> OverlayResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            OverlayError::invalid_config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty JSON, as written by `init-config`.
    pub fn to_json_pretty(&self) -> OverlayResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| OverlayError::serde(format!("serialize overlay config: {e}")))
    }

    /// Validate both sections.
    pub fn validate(&self) -> OverlayResult<()> {
        self.timeline.validate()?;
        self.style.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
