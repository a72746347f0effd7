//! Loading placeholders.
//!
//! Each placeholder fills exactly the area its content will take, so the
//! layout does not move when a region is revealed.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Spinner glyph for a frame counter.
pub fn spinner(frame: usize) -> char {
    SPINNER[frame % SPINNER.len()]
}

/// A titled panel with a centered spinner and caption.
pub fn render_loading(frame: &mut Frame, app: &App, area: Rect, title: &str, caption: &str) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(app.theme.panel_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", spinner(app.spinner_frame)),
            Style::default().fg(app.theme.highlight),
        ),
        Span::styled(caption.to_string(), app.theme.muted),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), middle);
}

/// A titled panel of grey bars, one per future content row.
pub fn render_skeleton(frame: &mut Frame, app: &App, area: Rect, title: &str, rows: u16) {
    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(format!(" {title} ")),
            Span::styled(
                format!("{} ", spinner(app.spinner_frame)),
                Style::default().fg(app.theme.highlight),
            ),
        ]))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(app.theme.panel_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let style = Style::default()
        .fg(app.theme.skeleton)
        .add_modifier(Modifier::DIM);
    let lines: Vec<Line> = (0..rows.min(inner.height))
        .map(|row| {
            // Alternate widths so the skeleton reads as text
            let width = if row % 2 == 0 {
                inner.width.saturating_sub(2)
            } else {
                inner.width.saturating_sub(2) * 2 / 3
            };
            Line::from(Span::styled(
                format!(" {}", "▬".repeat(width as usize)),
                style,
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner(0), '⠋');
        assert_eq!(spinner(1), '⠙');
        assert_eq!(spinner(SPINNER.len()), '⠋');
    }
}
