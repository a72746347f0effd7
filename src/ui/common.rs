//! Common UI components shared across regions.
//!
//! This module contains the header bar, status bar, help overlay and the
//! terminal-too-small notice.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use moana_types::{Region, StationStatus};

use crate::app::App;
use crate::data::duration::format_delay;

use super::placeholder::spinner;

pub const APP_TITLE: &str = "MOANA INSIGHTS";

/// Render the header bar with the station health overview.
///
/// Displays: worst status indicator, station counts by status, and either
/// the reveal progress or the live badge.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let counts = app.data.insights.status_counts;

    let status_span = match counts.worst() {
        Some(worst) => Span::styled(" ● ", app.theme.status_style(worst)),
        None => Span::raw("   "),
    };

    let mut spans = vec![
        status_span,
        Span::styled(
            format!("{APP_TITLE} "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
    ];

    for status in StationStatus::ALL {
        let count = counts.get(status);
        let style = if count > 0 {
            app.theme.status_style(status)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        spans.push(Span::styled(count.to_string(), style));
        spans.push(Span::raw(format!(" {} ", status.label().to_lowercase())));
    }

    spans.push(Span::raw("│ "));
    spans.push(Span::styled(
        counts.total().to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw(" stations │ "));

    if app.flags.all_ready() {
        spans.push(Span::styled(
            "● Live",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled(
            format!(
                "{} Loading {}/{}",
                spinner(app.spinner_frame),
                app.flags.ready_count(),
                Region::ALL.len()
            ),
            Style::default().fg(app.theme.highlight),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the status bar at the bottom.
///
/// Shows: pending regions with their delays, available controls. Also
/// displays temporary status messages.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {msg} ")).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let delays = app.reveal().delays();
    let pending: Vec<String> = app
        .flags
        .pending()
        .map(|region| format!("{region} {}", format_delay(delays.get(region))))
        .collect();

    let progress = if pending.is_empty() {
        "All regions loaded".to_string()
    } else {
        format!("Waiting: {}", pending.join(", "))
    };

    let controls = if app.show_detail_overlay {
        "↑↓:station Esc:close"
    } else {
        "↑↓:station ←→:month Enter:detail r:reload e:export t:theme ?:help q:quit"
    };

    let paragraph = Paragraph::new(format!(" {progress} | {controls}"))
        .style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the dashboard.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        ))
    };

    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        section(" Stations"),
        Line::from("  ↑/↓ j/k     Select station"),
        Line::from("  Home/End    First/last station"),
        Line::from("  Enter       Station detail"),
        Line::from("  Esc         Close overlay"),
        Line::from(""),
        section(" Charts"),
        Line::from("  ←/→ h/l     Move month cursor"),
        Line::from(""),
        section(" General"),
        Line::from("  r           Reload dashboard"),
        Line::from("  e           Export to JSON"),
        Line::from("  t           Toggle theme"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 40u16.min(area.width.saturating_sub(4));
    let help_height = 22u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

/// Render the notice shown when the terminal is below the minimum size.
pub fn render_too_small(frame: &mut Frame, area: Rect, min_width: u16, min_height: u16) {
    let msg = format!(
        "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
        area.width, area.height, min_width, min_height
    );
    let paragraph = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    let height = 5u16.min(area.height);
    let centered = Rect::new(
        area.x,
        area.y + (area.height.saturating_sub(height)) / 2,
        area.width,
        height,
    );
    frame.render_widget(paragraph, centered);
}
