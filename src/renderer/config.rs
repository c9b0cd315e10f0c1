//! Output options for the SVG renderer

/// Options controlling how a routed diagram is serialized.
///
/// The geometry is fixed by the layout engine; these knobs only shape the
/// surrounding markup: viewBox slack, standalone-document framing,
/// whitespace, CSS class naming, and the anchor-grid overlay used to
/// inspect routing decisions.
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Slack added around the diagram bounds on every side of the viewBox
    pub viewbox_padding: i32,

    /// Emit the XML declaration so the output stands alone as a document
    pub standalone: bool,

    /// Separate shapes with newlines and indentation; off gives one line
    pub pretty_print: bool,

    /// Prefix for the emitted CSS classes; `None` leaves them bare
    pub class_prefix: Option<String>,

    /// Draw every anchor slot as a small circle, occupied slots filled
    pub show_anchors: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            viewbox_padding: 20,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("ms-".to_string()),
            show_anchors: false,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewBox slack
    pub fn with_viewbox_padding(mut self, padding: i32) -> Self {
        self.viewbox_padding = padding;
        self
    }

    /// Include or omit the XML declaration
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Toggle newline/indentation formatting
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Emit bare class names
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Toggle the anchor-grid overlay
    pub fn with_show_anchors(mut self, show: bool) -> Self {
        self.show_anchors = show;
        self
    }
}
