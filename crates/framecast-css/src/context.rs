//! Resolution context.
//!
//! [§ 5.1 Relative Lengths](https://www.w3.org/TR/css-values-4/#relative-lengths)
//!
//! "Relative length units specify a length relative to another length."
//!
//! The converter has no layout pass, so every base a relative unit may need is
//! carried down the recursion in a [`ResolutionContext`] value. Each element
//! derives the context for its children; nothing is read from shared state.

use serde::{Deserialize, Serialize};

/// User agent default font size.
/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

/// Default viewport width when the caller does not provide one.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1920.0;

/// Default viewport height when the caller does not provide one.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 1080.0;

/// Which dimension a length is measured along.
///
/// Percentages resolve against the container dimension of the same axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Widths, horizontal padding, gaps between columns.
    Horizontal,
    /// Heights, gaps between rows.
    Vertical,
}

/// Numeric bases required to turn a relative length into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionContext {
    /// [§ 5.1.1](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// Base for `em`: the computed font size of the parent element.
    pub parent_font_size: f64,
    /// Base for `rem`: "the computed value of the font-size property of the root element."
    pub root_font_size: f64,
    /// Base for `vw`.
    pub viewport_width: f64,
    /// Base for `vh`.
    pub viewport_height: f64,
    /// Base for horizontal percentages, when the container width is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_width: Option<f64>,
    /// Base for vertical percentages, when the container height is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_height: Option<f64>,
}

impl Default for ResolutionContext {
    fn default() -> Self {
        Self {
            parent_font_size: DEFAULT_FONT_SIZE_PX,
            root_font_size: DEFAULT_FONT_SIZE_PX,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            container_width: None,
            container_height: None,
        }
    }
}

impl ResolutionContext {
    /// The container dimension percentages on `axis` resolve against.
    #[must_use]
    pub const fn container(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => self.container_width,
            Axis::Vertical => self.container_height,
        }
    }

    /// Copy of this context with a different parent font size.
    #[must_use]
    pub const fn with_parent_font_size(mut self, size: f64) -> Self {
        self.parent_font_size = size;
        self
    }

    /// Copy of this context with a different root font size.
    #[must_use]
    pub const fn with_root_font_size(mut self, size: f64) -> Self {
        self.root_font_size = size;
        self
    }

    /// Copy of this context with new container dimensions.
    #[must_use]
    pub const fn with_container(mut self, width: Option<f64>, height: Option<f64>) -> Self {
        self.container_width = width;
        self.container_height = height;
        self
    }
}
