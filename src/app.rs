//! Application state and navigation logic.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use moana_types::{LoadingFlags, Station, TemperaturePoint};

use crate::data::DashboardData;
use crate::reveal::{DashboardPlan, RevealDelays, RevealHandle};
use crate::ui::Theme;

/// Where the `e` key writes its JSON export.
pub const DEFAULT_EXPORT_PATH: &str = "moana_export.json";

/// How long a status message stays in the status bar.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Main application state.
///
/// The app is the hosting view of the reveal: it owns exactly one
/// [`RevealHandle`] at a time, and the handle's lifetime is the mount's
/// lifetime.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub show_detail_overlay: bool,

    // Reveal
    reveal: RevealHandle,
    updates: mpsc::UnboundedReceiver<LoadingFlags>,
    pub flags: LoadingFlags,
    pub plan: DashboardPlan,

    // Data
    pub data: DashboardData,

    // Navigation state
    pub selected_station: usize,
    pub selected_month: usize,

    // UI
    pub theme: Theme,
    pub spinner_frame: usize,
    pub export_path: PathBuf,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Mount the dashboard. The reveal is created but not armed; call
    /// [`start_reveal`](Self::start_reveal) from inside the runtime.
    pub fn new(delays: RevealDelays, theme: Theme) -> Self {
        let reveal = RevealHandle::new(delays);
        let updates = reveal.subscribe();
        let flags = reveal.snapshot();

        Self {
            running: true,
            show_help: false,
            show_detail_overlay: false,
            reveal,
            updates,
            flags,
            plan: DashboardPlan::from_flags(&flags),
            data: DashboardData::load(),
            selected_station: 0,
            selected_month: 0,
            theme,
            spinner_frame: 0,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            status_message: None,
        }
    }

    /// Arm the reveal timers. Repeated calls are no-ops.
    pub fn start_reveal(&mut self) {
        if self.reveal.start() {
            debug!("dashboard mounted");
        }
    }

    /// Wait for the next flag transition of the current mount.
    ///
    /// Resolves to `None` once the mount is torn down; a pending call is
    /// cancel safe.
    pub async fn next_update(&mut self) -> Option<LoadingFlags> {
        self.updates.recv().await
    }

    /// Apply every transition already queued, without waiting. Called by the
    /// run loop before each redraw.
    pub fn drain_updates(&mut self) {
        while let Ok(flags) = self.updates.try_recv() {
            self.apply_flags(flags);
        }
    }

    /// Adopt a pushed flag set and recompute the plan.
    ///
    /// Sets that are not strictly more ready than the current one are
    /// ignored, so a stale message can never hide a mounted region.
    pub fn apply_flags(&mut self, flags: LoadingFlags) {
        if !flags.is_strictly_more_ready_than(&self.flags) {
            return;
        }
        self.flags = flags;
        self.plan = DashboardPlan::from_flags(&flags);
    }

    /// Tear the dashboard down and mount it again, replaying the reveal.
    pub fn remount(&mut self) {
        let delays = *self.reveal.delays();
        let reveal = RevealHandle::new(delays);
        let updates = reveal.subscribe();

        // The old handle is dropped here, which cancels its timers.
        self.reveal = reveal;
        self.updates = updates;
        self.flags = self.reveal.snapshot();
        self.plan = DashboardPlan::from_flags(&self.flags);
        self.show_detail_overlay = false;
        self.selected_station = 0;
        self.selected_month = 0;

        self.start_reveal();
        self.set_status_message("Reloading dashboard".to_string());
    }

    /// The reveal of the current mount.
    pub fn reveal(&self) -> &RevealHandle {
        &self.reveal
    }

    /// Advance the placeholder spinner.
    pub fn on_tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        match &self.status_message {
            Some((msg, time)) if time.elapsed() < STATUS_MESSAGE_TTL => Some(msg),
            _ => None,
        }
    }

    /// The station under the cursor, once the map is mounted.
    pub fn selected_station(&self) -> Option<&Station> {
        if !self.plan.map.is_content() {
            return None;
        }
        self.data.stations.get(self.selected_station)
    }

    /// The month under the temperature chart cursor, once charts are mounted.
    pub fn selected_month(&self) -> Option<&TemperaturePoint> {
        if !self.plan.charts.is_content() {
            return None;
        }
        self.data.water_temperature.get(self.selected_month)
    }

    /// Move selection down by one station.
    pub fn select_next(&mut self) {
        if !self.plan.map.is_content() {
            return;
        }
        let max = self.data.stations.len().saturating_sub(1);
        self.selected_station = (self.selected_station + 1).min(max);
    }

    /// Move selection up by one station.
    pub fn select_prev(&mut self) {
        if !self.plan.map.is_content() {
            return;
        }
        self.selected_station = self.selected_station.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        if self.plan.map.is_content() {
            self.selected_station = 0;
        }
    }

    pub fn select_last(&mut self) {
        if self.plan.map.is_content() {
            self.selected_station = self.data.stations.len().saturating_sub(1);
        }
    }

    /// Move the temperature chart cursor to the next month, wrapping.
    pub fn next_month(&mut self) {
        let months = self.data.water_temperature.len();
        if self.plan.charts.is_content() && months > 0 {
            self.selected_month = (self.selected_month + 1) % months;
        }
    }

    /// Move the temperature chart cursor to the previous month, wrapping.
    pub fn prev_month(&mut self) {
        let months = self.data.water_temperature.len();
        if self.plan.charts.is_content() && months > 0 {
            self.selected_month = (self.selected_month + months - 1) % months;
        }
    }

    /// Open the station detail overlay. Nothing to show until the map is up.
    pub fn enter_detail(&mut self) {
        if self.selected_station().is_some() {
            self.show_detail_overlay = true;
        }
    }

    /// Close whatever overlay is open.
    pub fn go_back(&mut self) {
        if self.show_help {
            self.show_help = false;
        } else {
            self.show_detail_overlay = false;
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Switch between the dark and light theme.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        let name = if self.theme.is_dark { "dark" } else { "light" };
        self.set_status_message(format!("Theme: {name}"));
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the datasets and current flags to a file.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        self.data.export(self.reveal.snapshot(), path)
    }

    /// Export to [`export_path`](Self::export_path) and report the outcome
    /// in the status bar.
    pub fn export_with_feedback(&mut self) {
        let path = self.export_path.clone();
        match self.export_state(&path) {
            Ok(()) => self.set_status_message(format!("Exported to {}", path.display())),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "export failed");
                self.set_status_message(format!("Export failed: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moana_types::Region;

    fn app() -> App {
        App::new(RevealDelays::default(), Theme::dark())
    }

    fn all_ready() -> LoadingFlags {
        let mut flags = LoadingFlags::new();
        for region in Region::ALL {
            flags.mark_ready(region);
        }
        flags
    }

    #[test]
    fn test_new_app_shows_placeholders() {
        let app = app();
        assert!(app.running);
        assert!(app.flags.is_loading(Region::Map));
        assert_eq!(app.plan, DashboardPlan::default());
        assert!(!app.reveal().is_started());
        assert!(app.selected_station().is_none());
    }

    #[test]
    fn test_apply_flags_updates_plan() {
        let mut app = app();
        let mut flags = LoadingFlags::new();
        flags.mark_ready(Region::Map);
        app.apply_flags(flags);

        assert!(app.plan.map.is_content());
        assert!(app.plan.live_badge);
        assert!(!app.plan.charts.is_content());
        assert_eq!(app.selected_station().unwrap().name, "Poor Knights Marine Reserve");
    }

    #[test]
    fn test_stale_flags_are_ignored() {
        let mut app = app();
        app.apply_flags(all_ready());
        app.apply_flags(LoadingFlags::new());
        assert!(app.flags.all_ready());
    }

    #[test]
    fn test_selection_waits_for_map() {
        let mut app = app();
        app.select_next();
        app.select_last();
        assert_eq!(app.selected_station, 0);

        app.apply_flags(all_ready());
        app.select_next();
        app.select_next();
        assert_eq!(app.selected_station, 2);
        app.select_last();
        assert_eq!(app.selected_station, 4);
        app.select_next();
        assert_eq!(app.selected_station, 4);
        app.select_first();
        app.select_prev();
        assert_eq!(app.selected_station, 0);
    }

    #[test]
    fn test_month_cursor_wraps() {
        let mut app = app();
        app.next_month();
        assert_eq!(app.selected_month, 0);

        app.apply_flags(all_ready());
        app.prev_month();
        assert_eq!(app.selected_month, 11);
        assert_eq!(app.selected_month().unwrap().month, "Dec");
        app.next_month();
        assert_eq!(app.selected_month, 0);
    }

    #[test]
    fn test_detail_requires_map() {
        let mut app = app();
        app.enter_detail();
        assert!(!app.show_detail_overlay);

        app.apply_flags(all_ready());
        app.enter_detail();
        assert!(app.show_detail_overlay);
        app.go_back();
        assert!(!app.show_detail_overlay);
    }

    #[test]
    fn test_go_back_closes_help_first() {
        let mut app = app();
        app.apply_flags(all_ready());
        app.enter_detail();
        app.toggle_help();

        app.go_back();
        assert!(!app.show_help);
        assert!(app.show_detail_overlay);
    }

    #[test]
    fn test_toggle_theme_sets_message() {
        let mut app = app();
        app.toggle_theme();
        assert!(!app.theme.is_dark);
        assert_eq!(app.get_status_message(), Some("Theme: light"));
    }

    #[test]
    fn test_status_message_expires() {
        let mut app = app();
        app.status_message = Some(("old".to_string(), Instant::now() - Duration::from_secs(5)));
        assert!(app.get_status_message().is_none());
    }

    #[test]
    fn test_export_with_feedback() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app();
        app.export_path = dir.path().join("out.json");
        app.export_with_feedback();

        assert!(app.export_path.exists());
        assert!(app.get_status_message().unwrap().starts_with("Exported to"));

        app.export_path = dir.path().join("missing").join("out.json");
        app.export_with_feedback();
        assert!(app.get_status_message().unwrap().starts_with("Export failed"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_drives_plan() {
        let mut app = app();
        app.start_reveal();

        let flags = app.next_update().await.unwrap();
        app.apply_flags(flags);
        assert!(app.plan.map.is_content());
        assert!(!app.plan.widgets.is_content());

        while !app.flags.all_ready() {
            let flags = app.next_update().await.unwrap();
            app.apply_flags(flags);
        }
        assert!(app.plan.widgets.is_content());
        assert!(app.plan.charts.is_content());
    }

    #[tokio::test(start_paused = true)]
    async fn test_remount_replays_reveal() {
        let mut app = app();
        app.start_reveal();
        while !app.flags.all_ready() {
            let flags = app.next_update().await.unwrap();
            app.apply_flags(flags);
        }
        app.selected_station = 3;
        app.show_detail_overlay = true;

        app.remount();
        assert!(app.flags.is_loading(Region::Map));
        assert!(!app.plan.live_badge);
        assert!(!app.show_detail_overlay);
        assert_eq!(app.selected_station, 0);
        assert!(app.reveal().is_started());

        let flags = app.next_update().await.unwrap();
        app.apply_flags(flags);
        assert!(app.plan.map.is_content());
        assert!(app.flags.is_loading(Region::Charts));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drain_updates_takes_everything_pending() {
        let mut app = app();
        app.start_reveal();
        tokio::time::sleep(Duration::from_millis(2500)).await;
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }

        app.drain_updates();
        assert!(app.plan.map.is_content());
        assert!(app.plan.widgets.is_content());
        assert!(!app.plan.charts.is_content());
    }
}
