//! Application state management for the TUI.
//!
//! This module manages the application state: the heat strip itself, hover
//! and edit state, and messages shown in the status bar. All attribute
//! changes go through the strip's attribute surface so unchanged values never
//! re-render.

use crate::config::StripConfig;
use crate::strip::{HeatStrip, ShadowRoot, SizePreset, StripRender, DATA_ATTRIBUTE, SIZE_ATTRIBUTE};
use crate::ui::widgets::strip::block_at;
use ratatui::layout::Rect;

/// Application state
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    /// The strip being displayed
    pub strip: HeatStrip<ShadowRoot>,
    /// Index of the hovered block
    pub hovered: Option<usize>,
    /// In-progress edit of the `data` attribute
    pub edit_buffer: Option<String>,
    /// Show help panel
    pub show_help: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Error message
    pub error_message: Option<String>,
    /// Block rectangles from the last draw, for mouse hit testing
    pub block_rects: Vec<Rect>,
}

impl App {
    /// Create a new application state and mount the strip
    pub fn new(config: &StripConfig) -> Self {
        let mut app = Self {
            should_quit: false,
            strip: HeatStrip::default(),
            hovered: None,
            edit_buffer: None,
            show_help: false,
            status_message: Some("Press ? for help".to_string()),
            error_message: None,
            block_rects: Vec::new(),
        };
        app.apply_strip_config(config);
        app.strip.on_mount();
        app
    }

    /// Latest render of the strip
    pub fn render(&self) -> Option<&StripRender> {
        self.strip.target().render()
    }

    /// Number of blocks in the latest render
    pub fn block_count(&self) -> usize {
        self.render().map_or(0, StripRender::len)
    }

    /// Active size preset
    pub fn size(&self) -> SizePreset {
        self.render()
            .map(|render| render.size)
            .unwrap_or_else(|| SizePreset::resolve(self.strip.attributes().size.as_deref()))
    }

    /// Tooltip of the hovered block
    pub fn hovered_tooltip(&self) -> Option<&str> {
        let index = self.hovered?;
        self.render()?
            .blocks
            .get(index)
            .map(|block| block.tooltip.as_str())
    }

    /// Whether the data editor is open
    pub fn is_editing(&self) -> bool {
        self.edit_buffer.is_some()
    }

    /// Set the strip attributes from configuration
    pub fn apply_strip_config(&mut self, config: &StripConfig) {
        for (name, value) in [(DATA_ATTRIBUTE, &config.data), (SIZE_ATTRIBUTE, &config.size)] {
            match value {
                Some(value) => self.strip.set_attribute(name, value),
                None => self.strip.remove_attribute(name),
            }
        }
        self.clamp_hover();
    }

    /// Hover the next block
    pub fn hover_next(&mut self) {
        let count = self.block_count();
        if count > 0 {
            self.hovered = Some(match self.hovered {
                Some(index) => (index + 1) % count,
                None => 0,
            });
        }
    }

    /// Hover the previous block
    pub fn hover_prev(&mut self) {
        let count = self.block_count();
        if count > 0 {
            self.hovered = Some(match self.hovered {
                Some(0) | None => count - 1,
                Some(index) => index - 1,
            });
        }
    }

    /// Hover whatever block lies under the pointer, if any
    pub fn hover_at(&mut self, column: u16, row: u16) {
        // A lifted block sits one row above its resting rectangle.
        let lifted_hit = self.hovered.filter(|&index| {
            self.block_rects.get(index).is_some_and(|rect| {
                column >= rect.x && column < rect.right() && row + 1 == rect.y
            })
        });
        self.hovered = lifted_hit.or_else(|| block_at(&self.block_rects, column, row));
    }

    /// Cycle the size attribute small → medium → large → small
    pub fn cycle_size(&mut self) {
        let next = self.size().next();
        self.strip.set_attribute(SIZE_ATTRIBUTE, next.as_str());
        self.status_message = Some(format!("Size set to {}", next));
    }

    /// Open the data editor with the current value
    pub fn start_edit(&mut self) {
        let current = self.strip.attributes().data.clone().unwrap_or_default();
        self.edit_buffer = Some(current);
    }

    /// Append a character to the edit buffer
    pub fn edit_push(&mut self, c: char) {
        if let Some(buffer) = self.edit_buffer.as_mut() {
            buffer.push(c);
        }
    }

    /// Delete the last character of the edit buffer
    pub fn edit_backspace(&mut self) {
        if let Some(buffer) = self.edit_buffer.as_mut() {
            buffer.pop();
        }
    }

    /// Apply the edit buffer to the `data` attribute
    pub fn commit_edit(&mut self) {
        let Some(buffer) = self.edit_buffer.take() else {
            return;
        };
        let before = self.strip.render_count();
        self.strip.set_attribute(DATA_ATTRIBUTE, &buffer);
        self.clamp_hover();

        self.status_message = Some(if self.strip.render_count() == before {
            "Data unchanged".to_string()
        } else {
            format!("Rendered {} blocks", self.block_count())
        });
    }

    /// Discard the edit buffer
    pub fn cancel_edit(&mut self) {
        self.edit_buffer = None;
    }

    /// Toggle help panel
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Set status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Set error message
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    fn clamp_hover(&mut self) {
        let count = self.block_count();
        if self.hovered.is_some_and(|index| index >= count) {
            self.hovered = None;
        }
    }
}
