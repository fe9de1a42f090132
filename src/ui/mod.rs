//! Terminal UI module using ratatui.
//!
//! This module provides an interactive terminal view of the heat strip with
//! hover, attribute editing and keyboard controls.

pub mod app;
pub mod input;
pub mod widgets;

pub use app::App;
pub use input::{handle_input, InputAction};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};
use widgets::{render_heat_strip, render_help, render_status_bar, StatusLine};

/// Draw one frame and remember where the blocks landed
pub fn draw(frame: &mut Frame, app: &mut App) {
    let [strip_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(frame.area());

    app.block_rects = render_heat_strip(frame, strip_area, app.render(), app.hovered);

    let status = StatusLine {
        size: app.size(),
        block_count: app.block_count(),
        hovered_tooltip: app.hovered_tooltip(),
        edit_buffer: app.edit_buffer.as_deref(),
        status_message: app.status_message.as_deref(),
        error_message: app.error_message.as_deref(),
    };
    render_status_bar(frame, status_area, &status);

    if app.show_help {
        render_help(frame, centered(frame.area(), 60, 22));
    }
}

/// A rectangle of at most `width` × `height` centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
