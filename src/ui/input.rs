//! Input handling for the TUI.
//!
//! This module handles keyboard and mouse input and translates it into
//! application actions. While the data editor is open, printable keys go to
//! the editor instead of triggering shortcuts.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Actions that can be performed based on user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Quit the application
    Quit,
    /// Hover the next block
    HoverNext,
    /// Hover the previous block
    HoverPrev,
    /// Hover the block under the pointer
    HoverAt { column: u16, row: u16 },
    /// Cycle the size preset
    CycleSize,
    /// Open the data editor
    EditData,
    /// Type a character into the editor
    EditInput(char),
    /// Delete the last character in the editor
    EditBackspace,
    /// Apply the edited data
    CommitEdit,
    /// Close the editor without applying
    CancelEdit,
    /// Reload configuration
    Reload,
    /// Toggle help panel
    ToggleHelp,
    /// No action
    None,
}

/// Handle input and return the corresponding action
pub fn handle_input(timeout: Duration, editing: bool) -> std::io::Result<InputAction> {
    if event::poll(timeout)? {
        return Ok(match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                map_key_to_action(key_event, editing)
            }
            Event::Mouse(mouse_event) => map_mouse_to_action(mouse_event),
            _ => InputAction::None,
        });
    }
    Ok(InputAction::None)
}

/// Map a key event to an application action
fn map_key_to_action(key_event: KeyEvent, editing: bool) -> InputAction {
    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return InputAction::Quit;
    }

    if editing {
        return match key_event.code {
            KeyCode::Enter => InputAction::CommitEdit,
            KeyCode::Esc => InputAction::CancelEdit,
            KeyCode::Backspace => InputAction::EditBackspace,
            KeyCode::Char(c) => InputAction::EditInput(c),
            _ => InputAction::None,
        };
    }

    match key_event.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => InputAction::Quit,
        KeyCode::Esc => InputAction::Quit,

        // Hover
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => InputAction::HoverPrev,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => InputAction::HoverNext,

        // Attributes
        KeyCode::Char('s') | KeyCode::Char('S') => InputAction::CycleSize,
        KeyCode::Char('e') | KeyCode::Char('E') => InputAction::EditData,

        // Reload
        KeyCode::Char('r') | KeyCode::Char('R') => InputAction::Reload,

        // Help
        KeyCode::Char('?') | KeyCode::F(1) => InputAction::ToggleHelp,

        _ => InputAction::None,
    }
}

/// Map a mouse event to an application action
fn map_mouse_to_action(mouse_event: MouseEvent) -> InputAction {
    match mouse_event.kind {
        MouseEventKind::Moved => InputAction::HoverAt {
            column: mouse_event.column,
            row: mouse_event.row,
        },
        _ => InputAction::None,
    }
}
