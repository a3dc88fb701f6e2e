//! Conversion of styled element trees into auto-layout design nodes.
//!
//! # Scope
//!
//! This crate implements:
//! - **Output model**: FRAME and TEXT nodes with auto-layout fields,
//!   serialized in the shape a design-tool plugin consumes
//! - **Flexbox mapping** ([CSS Flexbox Level 1](https://www.w3.org/TR/css-flexbox-1/))
//!   onto layout mode, axis alignment, spacing, wrap, and per-item grow
//! - **Conversion template**: the per-element pipeline every tag goes through
//! - **Typography**: decomposition of inline markup into styled text runs
//! - **Element registry and node mapper**: tag dispatch and the recursive walk
//!
//! # Not Implemented
//!
//! - Absolute and fixed positioning, floats, grid layout
//! - Images and other replaced content beyond a sized placeholder frame
//! - Stylesheets; only inline `style` attributes are read

/// Flexbox properties mapped onto auto-layout fields.
pub mod flex;
/// The document-level mapper and its recursion.
pub mod mapper;
/// Node names derived from id and class attributes.
pub mod naming;
/// Output node model.
pub mod node;
/// Caller-supplied conversion options.
pub mod options;
/// Tag to conversion-strategy registry.
pub mod registry;
/// The shared per-element conversion pipeline.
pub mod template;
/// Inline markup decomposition into styled text runs.
pub mod typography;

pub use mapper::{NodeMapper, convert};
pub use node::{
    CounterAxisAlign, FontStyle, FrameNode, LayoutMode, LayoutWrap, LineHeight, OutputNode,
    Paint, PrimaryAxisAlign, Rgb, SizingMode, TextAlign, TextDecoration, TextNode, TextStyle,
};
pub use options::{ConversionOptions, StretchAlignment};
pub use registry::{ElementDefinition, ElementRegistry, Strategy};
pub use typography::{ChildNodeResult, ChildTextNode, RunMetadata, TextRun};
