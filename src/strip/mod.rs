//! The status strip: token parsing, color and size lookup, render
//! derivation, and the attribute-driven component.

pub mod color;
pub mod component;
pub mod render;
pub mod size;
pub mod token;

pub use color::Rgb;
pub use component::{HeatStrip, RenderTarget, ShadowRoot, DATA_ATTRIBUTE, SIZE_ATTRIBUTE};
pub use render::{Attributes, BlockDescriptor, StripRender};
pub use size::{CellDimensions, Dimensions, SizePreset};
pub use token::{parse_tokens, StatusState, StatusToken};
