//! Station map region.
//!
//! A coastline canvas with one marker per station, next to a selectable
//! station table.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Map, MapResolution},
        Block, Borders, Cell, Row, Table, TableState,
    },
    Frame,
};

use moana_types::{dataset::MAP_CENTER, Station};

use crate::app::App;
use crate::data::format;
use crate::reveal::RegionView;

use super::placeholder;

pub const TITLE: &str = "Monitoring Stations";
pub const LOADING_CAPTION: &str = "Loading monitoring stations...";
pub const LIVE_BADGE: &str = "● Live Data";

/// Degrees of longitude either side of the map center.
const LON_SPAN: f64 = 7.0;
/// Degrees of latitude either side of the map center.
const LAT_SPAN: f64 = 7.0;

/// Canvas bounds around [`MAP_CENTER`], as `(x_bounds, y_bounds)`.
pub fn bounds() -> ([f64; 2], [f64; 2]) {
    (
        [MAP_CENTER.lon - LON_SPAN, MAP_CENTER.lon + LON_SPAN],
        [MAP_CENTER.lat - LAT_SPAN, MAP_CENTER.lat + LAT_SPAN],
    )
}

/// Render the map region for the current plan.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match app.plan.map {
        RegionView::Placeholder => {
            placeholder::render_loading(frame, app, area, TITLE, LOADING_CAPTION)
        }
        RegionView::Content => render_content(frame, app, area),
    }
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    let mut title = vec![Span::raw(format!(" {TITLE} "))];
    if app.plan.live_badge {
        title.push(Span::styled(
            format!("{LIVE_BADGE} "),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(app.theme.panel_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [map_area, table_area] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(inner);

    render_canvas(frame, app, map_area);
    render_table(frame, app, table_area);
}

fn render_canvas(frame: &mut Frame, app: &App, area: Rect) {
    let (x_bounds, y_bounds) = bounds();
    let stations = &app.data.stations;
    let selected = app.selected_station;

    let canvas = Canvas::default()
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: app.theme.coastline,
            });
            ctx.layer();

            for (index, station) in stations.iter().enumerate() {
                let glyph = if index == selected { "◉" } else { "●" };
                ctx.print(
                    station.coordinates.lon,
                    station.coordinates.lat,
                    Span::styled(glyph, app.theme.status_style(station.status)),
                );
            }
        });

    frame.render_widget(canvas, area);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Station"),
        Cell::from("Cover"),
        Cell::from("Temp"),
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = app
        .data
        .stations
        .iter()
        .map(|station| station_row(app, station))
        .collect();

    let widths = [
        Constraint::Length(1),
        Constraint::Fill(3),
        Constraint::Length(5),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(
        app.selected_station
            .min(app.data.stations.len().saturating_sub(1)),
    ));

    frame.render_stateful_widget(table, area, &mut state);
}

fn station_row<'a>(app: &App, station: &'a Station) -> Row<'a> {
    Row::new(vec![
        Cell::from("●").style(app.theme.status_style(station.status)),
        Cell::from(station.name.as_str()),
        Cell::from(format::percent(station.coral_coverage)),
        Cell::from(format::celsius(station.water_temp)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use moana_types::{dataset, Coordinates};

    #[test]
    fn test_every_station_is_inside_the_map() {
        let ([x0, x1], [y0, y1]) = bounds();
        for station in dataset::stations() {
            let Coordinates { lon, lat } = station.coordinates;
            assert!(lon > x0 && lon < x1, "{}", station.name);
            assert!(lat > y0 && lat < y1, "{}", station.name);
        }
    }
}
