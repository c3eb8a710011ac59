use serde::{Deserialize, Serialize};

/// Default minimum size, in pixels, either side of a drag may shrink to.
pub const DEFAULT_MIN_SPLIT_SIZE: f32 = 10.0;

/// Default thickness of an editable divider along the split axis.
pub const DEFAULT_SPLITBAR_THICKNESS: f32 = 4.0;

/// Default share given to the sized section when none is supplied.
pub const DEFAULT_SPLIT_PERCENT: f32 = 50.0;

/// Configuration for the split-pane layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaConfig {
    /// Minimum pixel size either side of a divider may be dragged down to.
    pub min_split_size: f32,
    /// Thickness of editable dividers along the split axis.
    pub splitbar_thickness: f32,
    /// Percentage used for the sized section of a default split, and when a
    /// shown section has no recoverable proportion.
    pub default_split_percent: f32,
    /// Pointer travel required before a pressed divider starts resizing.
    pub drag_threshold: f32,
}

impl Default for AreaConfig {
    fn default() -> Self {
        AreaConfig {
            min_split_size: DEFAULT_MIN_SPLIT_SIZE,
            splitbar_thickness: DEFAULT_SPLITBAR_THICKNESS,
            default_split_percent: DEFAULT_SPLIT_PERCENT,
            drag_threshold: 0.0,
        }
    }
}

impl AreaConfig {
    pub fn min_split_size(mut self, size: f32) -> Self {
        self.min_split_size = size.max(0.0);
        self
    }

    pub fn splitbar_thickness(mut self, thickness: f32) -> Self {
        self.splitbar_thickness = thickness.max(0.0);
        self
    }

    pub fn default_split_percent(mut self, percent: f32) -> Self {
        self.default_split_percent = percent.clamp(0.0, 100.0);
        self
    }

    pub fn drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AreaConfig::default();
        assert_eq!(config.min_split_size, 10.0);
        assert_eq!(config.splitbar_thickness, 4.0);
        assert_eq!(config.default_split_percent, 50.0);
        assert_eq!(config.drag_threshold, 0.0);
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let config: AreaConfig = serde_json::from_str(r#"{ "min_split_size": 24.0 }"#).unwrap();
        assert_eq!(config.min_split_size, 24.0);
        assert_eq!(config.splitbar_thickness, DEFAULT_SPLITBAR_THICKNESS);
    }

    #[test]
    fn test_builder_clamps() {
        let config = AreaConfig::default()
            .min_split_size(-5.0)
            .default_split_percent(140.0);
        assert_eq!(config.min_split_size, 0.0);
        assert_eq!(config.default_split_percent, 100.0);
    }
}
