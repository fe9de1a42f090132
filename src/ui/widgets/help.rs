//! Help panel widget.

use crate::strip::Rgb;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )])
}

fn binding(keys: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(keys, Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}

/// Render the help panel
pub fn render_help(frame: &mut Frame, area: Rect) {
    // Clear the area first
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let help_text = vec![
        Line::from(""),
        section("Navigation"),
        binding("  ←/h", "    - Hover previous block"),
        binding("  →/l", "    - Hover next block"),
        binding("  mouse", "   - Hover block under pointer"),
        Line::from(""),
        section("Attributes"),
        binding("  s", "       - Cycle size (small/medium/large)"),
        binding("  e", "       - Edit data (Enter applies, Esc cancels)"),
        binding("  r", "       - Reload configuration"),
        Line::from(""),
        section("Colors"),
        Line::from(vec![
            Span::styled("  ██", Style::default().fg(Color::from(Rgb::OK))),
            Span::raw(" ok  "),
            Span::styled("██", Style::default().fg(Color::from(Rgb::WARNING))),
            Span::raw(" warning  "),
            Span::styled("██", Style::default().fg(Color::from(Rgb::ERROR))),
            Span::raw(" error  "),
            Span::styled("██", Style::default().fg(Color::from(Rgb::FALLBACK))),
            Span::raw(" other"),
        ]),
        Line::from(""),
        section("Other"),
        binding("  ?/F1", "    - Toggle this help"),
        binding("  q/Esc", "   - Quit application"),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("?", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" to close this help"),
        ]),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
