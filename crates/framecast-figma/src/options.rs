//! Conversion options.

use serde::{Deserialize, Serialize};

use framecast_css::{
    DEFAULT_FONT_SIZE_PX, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, ResolutionContext,
};

use crate::node::CounterAxisAlign;

/// What `align-items: stretch` becomes on the counter axis.
///
/// The design tool has no exact equivalent of a stretched flex item, so the
/// choice is explicit: keep children at the start edge, or emit STRETCH.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StretchAlignment {
    /// Map to MIN.
    Min,
    /// Map to STRETCH.
    #[default]
    Stretch,
}

impl StretchAlignment {
    /// The counter-axis alignment this choice produces.
    #[must_use]
    pub const fn counter_axis(self) -> CounterAxisAlign {
        match self {
            Self::Min => CounterAxisAlign::Min,
            Self::Stretch => CounterAxisAlign::Stretch,
        }
    }
}

/// Caller-supplied settings for one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionOptions {
    /// Viewport width in pixels, the base for `vw` and the root frame width.
    pub viewport_width: f64,
    /// Viewport height in pixels, the base for `vh`.
    pub viewport_height: f64,
    /// Root font size, the base for `rem` until `html` sets its own.
    pub root_font_size: f64,
    /// Mapping of `align-items: stretch` for elements that do not pin one.
    pub stretch_alignment: StretchAlignment,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            root_font_size: DEFAULT_FONT_SIZE_PX,
            stretch_alignment: StretchAlignment::default(),
        }
    }
}

impl ConversionOptions {
    /// The context the document root is resolved in.
    #[must_use]
    pub fn root_context(&self) -> ResolutionContext {
        ResolutionContext {
            parent_font_size: self.root_font_size,
            root_font_size: self.root_font_size,
            viewport_width: self.viewport_width,
            viewport_height: self.viewport_height,
            container_width: None,
            container_height: None,
        }
    }
}
