//! Sidebar widgets: ecosystem snapshot, research updates and alerts.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use moana_types::AlertLevel;

use crate::app::App;
use crate::data::format;
use crate::reveal::RegionView;

use super::placeholder;

pub const SNAPSHOT_TITLE: &str = "Ecosystem Snapshot";
pub const UPDATES_TITLE: &str = "Research Updates";
pub const ALERTS_TITLE: &str = "Environmental Alerts";

/// Interior rows of each panel, shared by content and skeleton.
const SNAPSHOT_ROWS: u16 = 4;
const UPDATES_ROWS: u16 = 3;

fn split(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(SNAPSHOT_ROWS + 2),
        Constraint::Length(UPDATES_ROWS + 2),
        Constraint::Min(3),
    ])
    .areas(area)
}

/// Render the widgets region for the current plan.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let [snapshot, updates, alerts] = split(area);
    match app.plan.widgets {
        RegionView::Placeholder => {
            placeholder::render_skeleton(frame, app, snapshot, SNAPSHOT_TITLE, SNAPSHOT_ROWS);
            placeholder::render_skeleton(frame, app, updates, UPDATES_TITLE, UPDATES_ROWS);
            placeholder::render_skeleton(
                frame,
                app,
                alerts,
                ALERTS_TITLE,
                app.data.alerts.len() as u16,
            );
        }
        RegionView::Content => {
            render_snapshot(frame, app, snapshot);
            render_updates(frame, app, updates);
            render_alerts(frame, app, alerts);
        }
    }
}

fn panel<'a>(app: &App, title: &'a str) -> Block<'a> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(app.theme.panel_border())
}

fn render_snapshot(frame: &mut Frame, app: &App, area: Rect) {
    let snapshot = &app.data.snapshot;
    let value = Style::default().add_modifier(Modifier::BOLD);
    let row = |label: &'static str, text: String| {
        Line::from(vec![
            Span::styled(format!(" {label:<18}"), app.theme.muted),
            Span::styled(text, value),
        ])
    };

    let lines = vec![
        row("Avg Water Temp", format::celsius(snapshot.avg_water_temp)),
        row("Coral Coverage", format::percent(snapshot.coral_coverage)),
        row("pH Level", format::ph(snapshot.ph)),
        row(
            "Active Stations",
            format!("{}/{}", snapshot.active_stations, snapshot.total_stations),
        ),
    ];

    frame.render_widget(Paragraph::new(lines).block(panel(app, SNAPSHOT_TITLE)), area);
}

fn render_updates(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .data
        .research_updates
        .iter()
        .map(|update| {
            Line::from(vec![
                Span::styled(" • ", Style::default().fg(app.theme.highlight)),
                Span::raw(update.as_str()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(panel(app, UPDATES_TITLE)), area);
}

fn alert_icon(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::Info => "ℹ",
        AlertLevel::Caution => "▲",
        AlertLevel::Critical => "✖",
    }
}

fn render_alerts(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .data
        .alerts
        .iter()
        .map(|alert| {
            let style = app.theme.alert_style(alert.level);
            Line::from(vec![
                Span::styled(format!(" {} ", alert_icon(alert.level)), style),
                Span::styled(alert.message.as_str(), style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(panel(app, ALERTS_TITLE))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
