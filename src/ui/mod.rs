//! Terminal UI rendering using ratatui.
//!
//! Each region of the dashboard is implemented in its own submodule with a
//! `render` function that shows either the region's placeholder or its
//! content, as decided by [`DashboardPlan`](crate::reveal::DashboardPlan).
//!
//! ## Submodules
//!
//! - [`map`]: station map and station table
//! - [`widgets`]: ecosystem snapshot, research updates, alerts
//! - [`charts`]: temperature trend, coral health and species distribution
//! - [`placeholder`]: spinners and skeleton rows shown while loading
//! - [`detail`]: modal overlay for the selected station
//! - [`common`]: header, status bar, help overlay
//! - [`theme`]: light/dark theme support with terminal auto-detection
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├───────────────────────┬──────────────┤
//! │ Map (map::render)     │ Widgets      │
//! │                       │              │
//! ├────────────┬──────────┴─┬────────────┤
//! │ Temperature│ Coral      │ Species    │
//! │         (charts::render)│            │
//! ├────────────┴────────────┴────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlays rendered on top:
//!    - detail::render_overlay
//!    - common::render_help
//! ```

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::App;

pub mod charts;
pub mod common;
pub mod detail;
pub mod map;
pub mod placeholder;
pub mod theme;
pub mod widgets;

pub use theme::Theme;

/// Minimum terminal width for a usable dashboard.
pub const MIN_WIDTH: u16 = 80;
/// Minimum terminal height for a usable dashboard.
pub const MIN_HEIGHT: u16 = 24;

/// Draw one frame of the dashboard.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        common::render_too_small(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let [header, top, bottom, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Percentage(52),
        Constraint::Min(10),
        Constraint::Length(1),
    ])
    .areas(area);

    let [map_area, widgets_area] =
        Layout::horizontal([Constraint::Percentage(64), Constraint::Percentage(36)]).areas(top);

    common::render_header(frame, app, header);
    map::render(frame, app, map_area);
    widgets::render(frame, app, widgets_area);
    charts::render(frame, app, bottom);
    common::render_status_bar(frame, app, status);

    if app.show_detail_overlay {
        detail::render_overlay(frame, app, area);
    }
    if app.show_help {
        common::render_help(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moana_types::{LoadingFlags, Region};
    use ratatui::{backend::TestBackend, Terminal};

    use crate::reveal::RevealDelays;

    fn app_with(ready: &[Region]) -> App {
        let mut app = App::new(RevealDelays::default(), Theme::dark());
        let mut flags = LoadingFlags::new();
        for region in ready {
            flags.mark_ready(*region);
        }
        app.apply_flags(flags);
        app
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_all_placeholders_before_reveal() {
        let screen = draw(&app_with(&[]), 140, 40);
        assert!(screen.contains(map::LOADING_CAPTION));
        assert!(screen.contains("Loading water temperature trends..."));
        assert!(screen.contains("Loading coral coverage & health..."));
        assert!(screen.contains(widgets::SNAPSHOT_TITLE));
        assert!(!screen.contains("Poor Knights Marine Reserve"));
        assert!(!screen.contains(map::LIVE_BADGE));
        assert!(!screen.contains("Avg Water Temp"));
    }

    #[test]
    fn test_map_only() {
        let screen = draw(&app_with(&[Region::Map]), 140, 40);
        assert!(screen.contains("Poor Knights Marine Reserve"));
        assert!(screen.contains(map::LIVE_BADGE));
        assert!(!screen.contains(map::LOADING_CAPTION));
        assert!(!screen.contains("Avg Water Temp"));
        assert!(screen.contains("Loading species distribution..."));
    }

    #[test]
    fn test_everything_revealed() {
        let screen = draw(&app_with(&Region::ALL), 140, 40);
        assert!(screen.contains("Avg Water Temp"));
        assert!(screen.contains("15.8°C"));
        assert!(screen.contains("Bay of Islands coral degradation"));
        assert!(screen.contains("Kelp Forest: 35%"));
        assert!(screen.contains("Climate Alert:"));
        assert!(screen.contains("Best performing:"));
        assert!(!screen.contains("Loading"));
        assert!(screen.contains("All regions loaded"));
    }

    #[test]
    fn test_detail_overlay() {
        let mut app = app_with(&Region::ALL);
        app.selected_station = 2;
        app.enter_detail();
        let screen = draw(&app, 140, 40);
        assert!(screen.contains("Degraded Ecosystem"));
        assert!(screen.contains("Last updated: 1 hour ago"));
        assert!(screen.contains("Reduced Diversity"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = app_with(&[]);
        app.toggle_help();
        let screen = draw(&app, 120, 40);
        assert!(screen.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_too_small_notice() {
        let screen = draw(&app_with(&[]), 60, 20);
        assert!(screen.contains("Terminal too small: 60x20"));
        assert!(!screen.contains(map::LOADING_CAPTION));
    }
}
