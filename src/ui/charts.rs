//! Charts region: water temperature, coral health and species distribution.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap,
    },
    Frame,
};

use moana_types::{dataset, AlertLevel, CoralHealthPoint, Station};

use crate::app::App;
use crate::data::format::{self, CoralMetric, TemperatureSeries};
use crate::reveal::RegionView;

use super::placeholder;
use super::theme::{color, HEALTHY, SERIES_BASELINE, SERIES_PRIMARY};

pub const TEMPERATURE_TITLE: &str = "Water Temperature Trends";
pub const CORAL_TITLE: &str = "Coral Coverage & Health";
pub const SPECIES_TITLE: &str = "Species Distribution";

/// Render the charts region for the current plan.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let [temperature, coral, species] = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(32),
        Constraint::Percentage(28),
    ])
    .areas(area);

    match app.plan.charts {
        RegionView::Placeholder => {
            for (title, area) in [
                (TEMPERATURE_TITLE, temperature),
                (CORAL_TITLE, coral),
                (SPECIES_TITLE, species),
            ] {
                let caption = format::loading_caption(title);
                placeholder::render_loading(frame, app, area, title, &caption);
            }
        }
        RegionView::Content => {
            render_temperature(frame, app, temperature);
            render_coral(frame, app, coral);
            render_species(frame, app, species);
        }
    }
}

fn panel<'a>(app: &App, title: impl Into<Line<'a>>) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(app.theme.panel_border())
}

// ===== Water temperature =====

fn render_temperature(frame: &mut Frame, app: &App, area: Rect) {
    let block = panel(app, format!(" {TEMPERATURE_TITLE} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [chart_area, readout_area, note_area] = Layout::vertical([
        Constraint::Min(4),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(inner);

    let points = &app.data.water_temperature;
    let current: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.temp))
        .collect();
    let baseline: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.baseline))
        .collect();
    let cursor: Vec<(f64, f64)> = app
        .selected_month()
        .map(|p| vec![(app.selected_month as f64, p.temp)])
        .unwrap_or_default();

    let datasets = vec![
        Dataset::default()
            .name(TemperatureSeries::Current.legend())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color(SERIES_PRIMARY)))
            .data(&current),
        Dataset::default()
            .name(TemperatureSeries::Baseline.legend())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color(SERIES_BASELINE)))
            .data(&baseline),
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(app.theme.highlight))
            .data(&cursor),
    ];

    let (lo, hi) = app.data.insights.temperature_domain;
    let last = points.len().saturating_sub(1);
    let month_labels: Vec<String> = [0, last / 2, last]
        .iter()
        .filter_map(|&i| points.get(i).map(|p| p.month.clone()))
        .collect();

    let chart = Chart::new(datasets)
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
        .x_axis(
            Axis::default()
                .style(app.theme.muted)
                .bounds([0.0, last.max(1) as f64])
                .labels(month_labels),
        )
        .y_axis(
            Axis::default()
                .style(app.theme.muted)
                .bounds([lo, hi])
                .labels([format!("{lo:.0}°"), format!("{hi:.0}°")]),
        );
    frame.render_widget(chart, chart_area);

    frame.render_widget(Paragraph::new(temperature_readout(app)), readout_area);

    let note = Paragraph::new(Line::from(vec![
        Span::styled(
            "Climate Alert: ",
            Style::default()
                .fg(color(SERIES_PRIMARY))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(dataset::CLIMATE_ALERT, app.theme.muted),
    ]))
    .wrap(Wrap { trim: true });
    frame.render_widget(note, note_area);
}

/// Tooltip for the month under the cursor.
fn temperature_readout(app: &App) -> Line<'static> {
    let Some(point) = app.selected_month() else {
        return Line::default();
    };
    let (current, current_label) =
        format::temperature_tooltip(point.temp, TemperatureSeries::Current);
    let (baseline, baseline_label) =
        format::temperature_tooltip(point.baseline, TemperatureSeries::Baseline);

    Line::from(vec![
        Span::styled(
            format!(" {} ", point.month),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{current_label} "), app.theme.muted),
        Span::styled(current, Style::default().fg(color(SERIES_PRIMARY))),
        Span::styled(format!("  {baseline_label} "), app.theme.muted),
        Span::styled(baseline, Style::default().fg(color(SERIES_BASELINE))),
        Span::styled(format!("  ({})", format::anomaly(point.anomaly())), app.theme.muted),
    ])
}

// ===== Coral health =====

/// Chart point belonging to a station; chart labels are name prefixes.
fn coral_point<'a>(
    points: &'a [CoralHealthPoint],
    station: &Station,
) -> Option<&'a CoralHealthPoint> {
    points.iter().find(|p| station.name.starts_with(&p.station))
}

fn render_coral(frame: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::raw(format!(" {CORAL_TITLE} ")),
        Span::styled(format!("{} ", dataset::CORAL_HEALTH_UPDATED), app.theme.muted),
    ]);
    let block = panel(app, title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [legend_area, chart_area, notes_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(4),
        Constraint::Length(3),
    ])
    .areas(inner);

    let coverage_style = Style::default().fg(color(HEALTHY));
    let health_style = Style::default().fg(color(SERIES_PRIMARY));

    let legend = Line::from(vec![
        Span::styled(" ■ ", coverage_style),
        Span::raw(CoralMetric::Coverage.label()),
        Span::styled("  ■ ", health_style),
        Span::raw(CoralMetric::Health.label()),
    ]);
    frame.render_widget(Paragraph::new(legend), legend_area);

    let points = &app.data.coral_health;
    let groups = points.len().max(1) as u16;
    let group_gap = 1;
    let bar_width = (chart_area.width.saturating_sub(group_gap * groups) / (groups * 2)).clamp(1, 5);

    let mut chart = BarChart::default()
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(group_gap)
        .max(100);
    for point in points {
        let bars = [
            Bar::default()
                .value(u64::from(point.coverage))
                .text_value(format::coral_tooltip(point.coverage, CoralMetric::Coverage).0)
                .style(coverage_style),
            Bar::default()
                .value(u64::from(point.health))
                .text_value(format::coral_tooltip(point.health, CoralMetric::Health).0)
                .style(health_style),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(point.station.clone()))
                .bars(&bars),
        );
    }
    frame.render_widget(chart, chart_area);

    frame.render_widget(
        Paragraph::new(coral_notes(app)).wrap(Wrap { trim: true }),
        notes_area,
    );
}

fn coral_notes(app: &App) -> Vec<Line<'static>> {
    let insights = &app.data.insights;
    let mut lines = Vec::new();

    if let Some(best) = &insights.best_performing {
        lines.push(Line::from(vec![
            Span::styled(" Best performing: ", Style::default().fg(color(HEALTHY))),
            Span::raw(format!("{} ({})", best.station, best.summary())),
        ]));
    }
    if let Some(worst) = &insights.needs_attention {
        lines.push(Line::from(vec![
            Span::styled(" Needs attention: ", app.theme.alert_style(AlertLevel::Critical)),
            Span::raw(format!("{} ({})", worst.station, worst.summary())),
        ]));
    }

    // Readout for the station selected on the map
    let selected = app
        .selected_station()
        .and_then(|station| coral_point(&app.data.coral_health, station).map(|p| (station, p)));
    if let Some((station, point)) = selected {
        let (coverage, coverage_label) =
            format::coral_tooltip(point.coverage, CoralMetric::Coverage);
        let (health, health_label) = format::coral_tooltip(point.health, CoralMetric::Health);
        lines.push(Line::from(vec![
            Span::styled(format!(" {}: ", station.name), app.theme.muted),
            Span::raw(format!("{coverage_label} {coverage}, {health_label} {health}")),
        ]));
    }

    lines
}

// ===== Species distribution =====

fn render_species(frame: &mut Frame, app: &App, area: Rect) {
    let block = panel(app, format!(" {SPECIES_TITLE} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let species = &app.data.species;
    let [bars_area, note_area] =
        Layout::vertical([Constraint::Min(species.len() as u16 * 2), Constraint::Length(3)])
            .areas(inner);

    // Widest share gets the full bar, the rest scale to it
    let widest = species.iter().map(|s| s.percentage).max().unwrap_or(1).max(1);
    let bar_room = bars_area.width.saturating_sub(2);

    let mut lines = Vec::with_capacity(species.len() * 2);
    for share in species {
        let style = Style::default().fg(color(share.color));
        let width = usize::from(bar_room) * usize::from(share.percentage) / usize::from(widest);
        lines.push(Line::from(vec![
            Span::styled(" ■ ", style),
            Span::raw(format::species_label(&share.name, share.percentage)),
        ]));
        lines.push(Line::from(Span::styled(format!(" {}", "█".repeat(width)), style)));
    }
    frame.render_widget(Paragraph::new(lines), bars_area);

    let mut note = Vec::new();
    if let Some(top) = species.iter().max_by_key(|s| s.percentage) {
        let (value, label) = format::species_tooltip(top.percentage);
        note.push(Line::from(vec![
            Span::styled(" Dominant: ", app.theme.muted),
            Span::raw(format!("{} ({label} {value})", top.name)),
        ]));
    }
    note.push(Line::from(vec![
        Span::styled(
            " Ecosystem Insight: ",
            Style::default()
                .fg(color(HEALTHY))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(dataset::ECOSYSTEM_INSIGHT, app.theme.muted),
    ]));
    frame.render_widget(Paragraph::new(note).wrap(Wrap { trim: true }), note_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coral_point_matches_prefix() {
        let points = dataset::coral_health();
        let stations = dataset::stations();
        for station in &stations {
            assert!(coral_point(&points, station).is_some(), "{}", station.name);
        }
        assert_eq!(coral_point(&points, &stations[1]).unwrap().health, 78);
    }

    #[test]
    fn test_captions_lowercase_titles() {
        assert_eq!(
            format::loading_caption(TEMPERATURE_TITLE),
            "Loading water temperature trends..."
        );
        assert_eq!(
            format::loading_caption(SPECIES_TITLE),
            "Loading species distribution..."
        );
    }
}
