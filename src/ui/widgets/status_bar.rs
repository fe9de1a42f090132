//! Status bar widget.

use crate::strip::SizePreset;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the status bar shows
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusLine<'a> {
    pub size: SizePreset,
    pub block_count: usize,
    pub hovered_tooltip: Option<&'a str>,
    pub edit_buffer: Option<&'a str>,
    pub status_message: Option<&'a str>,
    pub error_message: Option<&'a str>,
}

/// Build the status bar line
pub fn status_line(status: &StatusLine<'_>) -> Line<'static> {
    let mut spans = vec![];

    // Edit prompt replaces everything else
    if let Some(buffer) = status.edit_buffer {
        spans.push(Span::styled(
            "data: ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(buffer.to_string()));
        spans.push(Span::styled("█", Style::default().fg(Color::Gray)));
        return Line::from(spans);
    }

    spans.push(Span::styled(
        status.size.as_str().to_uppercase(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));

    spans.push(Span::raw(" │ "));
    spans.push(Span::raw(format!(
        "{} block{}",
        status.block_count,
        if status.block_count == 1 { "" } else { "s" }
    )));

    if let Some(tooltip) = status.hovered_tooltip {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            tooltip.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    }

    // Error message takes priority
    if let Some(error) = status.error_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("ERROR: {}", error),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    } else if let Some(message) = status.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(message.to_string(), Style::default().fg(Color::Gray)));
    }

    Line::from(spans)
}

/// Render the status bar
pub fn render_status_bar(frame: &mut Frame, area: Rect, status: &StatusLine<'_>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(status_line(status)).block(block);
    frame.render_widget(paragraph, area);
}
