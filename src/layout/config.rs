//! Configuration for element sizing and routing

/// Height of a single-line element box; taller boxes grow from this baseline
pub const BASELINE_HEIGHT: i32 = 44;

/// Extra height per wrapped name line beyond the first
pub const LINE_GROWTH: i32 = 8;

/// Vertical separations beyond this prefer a side-edge route over a
/// top/bottom one. Twice the baseline element height.
pub const OPTIMAL_ROUTE_DY: i32 = 2 * BASELINE_HEIGHT;

/// Configuration options for element layout
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Minimum width of a plain model box
    pub model_width: i32,

    /// Minimum width of a text box
    pub text_width: i32,

    /// Width reserved per character of the longest name line
    pub char_width: i32,

    /// Vertical distance between rendered name lines
    pub line_spacing: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            model_width: 140,
            text_width: 200,
            char_width: 8,
            line_spacing: 12,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum model box width
    pub fn with_model_width(mut self, width: i32) -> Self {
        self.model_width = width;
        self
    }

    /// Set the minimum text box width
    pub fn with_text_width(mut self, width: i32) -> Self {
        self.text_width = width;
        self
    }

    /// Set the per-character width used for name measurement
    pub fn with_char_width(mut self, width: i32) -> Self {
        self.char_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.model_width, 140);
        assert_eq!(config.text_width, 200);
        assert_eq!(config.char_width, 8);
        assert_eq!(config.line_spacing, 12);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new().with_model_width(160).with_char_width(7);
        assert_eq!(config.model_width, 160);
        assert_eq!(config.char_width, 7);
    }

    #[test]
    fn test_route_threshold_derives_from_baseline() {
        assert_eq!(OPTIMAL_ROUTE_DY, 88);
    }
}
