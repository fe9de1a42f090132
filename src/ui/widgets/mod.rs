//! UI widgets for displaying the heat strip.

pub mod help;
pub mod status_bar;
pub mod strip;

pub use help::render_help;
pub use status_bar::{render_status_bar, StatusLine};
pub use strip::render_heat_strip;
