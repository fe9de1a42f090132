//! heat-strip: a strip of colored blocks for a sequence of statuses.
//!
//! The [`strip`] module holds the attribute-driven component and its
//! renderers. The remaining modules make up the `heat-strip` binary: CLI,
//! configuration, errors, the terminal UI and the service that drives it.

pub mod cli;
pub mod config;
pub mod error;
pub mod service;
pub mod strip;
pub mod ui;

pub use strip::{Attributes, HeatStrip, RenderTarget, ShadowRoot, StripRender};
