//! Station detail overlay.
//!
//! Displays a modal overlay with everything known about the selected
//! station.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use moana_types::Station;

use crate::app::App;
use crate::data::format;

/// Minimum width required for the detail overlay to render properly.
const MIN_OVERLAY_WIDTH: u16 = 40;
/// Minimum height required for the detail overlay to render properly.
const MIN_OVERLAY_HEIGHT: u16 = 14;

/// "Healthy Ecosystem", "Degraded Ecosystem", ...
pub fn status_caption(station: &Station) -> String {
    format!("{} Ecosystem", station.status.label())
}

/// Render the selected station as a modal overlay.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Skip rendering if terminal is too small for the overlay
    if area.width < MIN_OVERLAY_WIDTH || area.height < MIN_OVERLAY_HEIGHT {
        return;
    }
    let Some(station) = app.selected_station() else {
        return;
    };

    let overlay_width = (area.width * 60 / 100).clamp(MIN_OVERLAY_WIDTH, 64);
    let overlay_height = MIN_OVERLAY_HEIGHT;
    let x = area.x + (area.width.saturating_sub(overlay_width)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_height)) / 2;
    let overlay_area = Rect::new(x, y, overlay_width, overlay_height);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let label = |text: &'static str| Span::styled(format!(" {text:<16}"), app.theme.muted);
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled(" ● ", app.theme.status_style(station.status)),
            Span::styled(status_caption(station), app.theme.status_style(station.status)),
        ]),
        Line::from(""),
        Line::from(vec![
            label("Coral Coverage"),
            Span::styled(format::percent(station.coral_coverage), bold),
        ]),
        Line::from(vec![
            label("Water Temp"),
            Span::styled(format::celsius(station.water_temp), bold),
        ]),
        Line::from(vec![
            label("Bleaching Risk"),
            Span::styled(
                station.bleaching_risk.label(),
                app.theme.risk_style(station.bleaching_risk),
            ),
        ]),
        Line::from(vec![label("pH Level"), Span::styled(format::ph(station.ph), bold)]),
        Line::from(vec![label("Species"), Span::raw(station.species.as_str())]),
        Line::from(vec![
            label("Location"),
            Span::raw(format!(
                "{:.4}, {:.4}",
                station.coordinates.lat, station.coordinates.lon
            )),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(" Last updated: {}", station.last_update),
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " ↑↓:station Esc:close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(format!(" {} ", station.name))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, overlay_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use moana_types::dataset;

    #[test]
    fn test_status_caption() {
        let stations = dataset::stations();
        assert_eq!(status_caption(&stations[0]), "Healthy Ecosystem");
        assert_eq!(status_caption(&stations[2]), "Degraded Ecosystem");
    }
}
