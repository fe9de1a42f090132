//! Heat strip widget: one colored cell block per status.

use crate::strip::StripRender;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Color of the row under a hovered block.
const SHADOW_COLOR: Color = Color::Rgb(30, 30, 30);

/// Lay out blocks left to right inside `area`. The first row is kept free so
/// a hovered block can lift into it. Blocks that do not fit are left out.
pub fn block_rects(area: Rect, render: &StripRender) -> Vec<Rect> {
    let cells = render.dimensions.cells();
    let top = area.y.saturating_add(1);
    if top.saturating_add(cells.height) > area.bottom() {
        return Vec::new();
    }

    let mut rects = Vec::with_capacity(render.len());
    let mut x = area.x;
    for _ in &render.blocks {
        if x.saturating_add(cells.width) > area.right() {
            break;
        }
        rects.push(Rect::new(x, top, cells.width, cells.height));
        x = x.saturating_add(cells.width + cells.gap);
    }
    rects
}

/// Index of the block under the given terminal position
pub fn block_at(rects: &[Rect], column: u16, row: u16) -> Option<usize> {
    rects.iter().position(|rect| {
        column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
    })
}

/// Render the strip and return the resting rectangle of every drawn block
pub fn render_heat_strip(
    frame: &mut Frame,
    area: Rect,
    render: Option<&StripRender>,
    hovered: Option<usize>,
) -> Vec<Rect> {
    let Some(render) = render else {
        let paragraph = Paragraph::new("Not rendered yet")
            .block(panel(" Heat Strip ".to_string()))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
        return Vec::new();
    };

    let block = panel(format!(" Heat Strip ({}) ", render.size));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if render.is_empty() {
        let paragraph = Paragraph::new("No statuses").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, inner);
        return Vec::new();
    }

    let rects = block_rects(inner, render);
    let buffer = frame.buffer_mut();
    for (index, (rect, descriptor)) in rects.iter().zip(&render.blocks).enumerate() {
        let fill = Style::default().bg(Color::from(descriptor.color));
        if hovered == Some(index) {
            // Lift by one row and leave a shadow on the row it vacated.
            let lifted = Rect::new(rect.x, rect.y - 1, rect.width, rect.height);
            buffer.set_style(lifted, fill);
            let shadow = Rect::new(rect.x, rect.bottom() - 1, rect.width, 1);
            buffer.set_style(shadow, Style::default().bg(SHADOW_COLOR));
        } else {
            buffer.set_style(*rect, fill);
        }
    }

    rects
}

fn panel(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strip::{Attributes, Rgb};
    use ratatui::{backend::TestBackend, Terminal};

    fn derive(data: &str, size: &str) -> StripRender {
        StripRender::derive(&Attributes::new(Some(data), Some(size)))
    }

    #[test]
    fn test_block_rects_follow_preset() {
        let area = Rect::new(0, 0, 40, 10);

        let small = block_rects(area, &derive("ok,ok,ok", "small"));
        assert_eq!(small, vec![
            Rect::new(0, 1, 2, 2),
            Rect::new(3, 1, 2, 2),
            Rect::new(6, 1, 2, 2),
        ]);

        let large = block_rects(area, &derive("ok,ok", "large"));
        assert_eq!(large, vec![Rect::new(0, 1, 4, 4), Rect::new(6, 1, 4, 4)]);
    }

    #[test]
    fn test_block_rects_clip_to_area() {
        let render = derive("ok,ok,ok,ok,ok", "medium");
        assert_eq!(block_rects(Rect::new(0, 0, 10, 5), &render).len(), 2);
        assert!(block_rects(Rect::new(0, 0, 10, 3), &render).is_empty());
    }

    #[test]
    fn test_block_at() {
        let rects = vec![Rect::new(0, 1, 3, 3), Rect::new(4, 1, 3, 3)];
        assert_eq!(block_at(&rects, 1, 2), Some(0));
        assert_eq!(block_at(&rects, 5, 3), Some(1));
        assert_eq!(block_at(&rects, 3, 2), None);
        assert_eq!(block_at(&rects, 1, 0), None);
    }

    #[test]
    fn test_render_colors_blocks() {
        let render = derive("ok,warning,error,unknown", "large");
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        let mut rects = Vec::new();
        terminal
            .draw(|frame| {
                let area = frame.area();
                rects = render_heat_strip(frame, area, Some(&render), None);
            })
            .unwrap();

        assert_eq!(rects.len(), 4);
        let buffer = terminal.backend().buffer();
        let expected = [Rgb::OK, Rgb::WARNING, Rgb::ERROR, Rgb::FALLBACK];
        for (rect, color) in rects.iter().zip(expected) {
            assert_eq!(buffer[(rect.x, rect.y)].bg, Color::from(color));
            assert_eq!(buffer[(rect.right() - 1, rect.bottom() - 1)].bg, Color::from(color));
        }
    }

    #[test]
    fn test_hovered_block_is_lifted() {
        let render = derive("ok,error", "medium");
        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
        let mut rects = Vec::new();
        terminal
            .draw(|frame| {
                let area = frame.area();
                rects = render_heat_strip(frame, area, Some(&render), Some(1));
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let hovered = rects[1];
        assert_eq!(buffer[(hovered.x, hovered.y - 1)].bg, Color::from(Rgb::ERROR));
        assert_eq!(buffer[(hovered.x, hovered.bottom() - 1)].bg, SHADOW_COLOR);

        let resting = rects[0];
        assert_eq!(buffer[(resting.x, resting.y - 1)].bg, Color::Reset);
        assert_eq!(buffer[(resting.x, resting.bottom() - 1)].bg, Color::from(Rgb::OK));
    }
}
