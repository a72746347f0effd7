//! # moana-insights
//!
//! A terminal dashboard for coastal coral monitoring stations, with a
//! staggered reveal of its map, sidebar widgets and charts.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌──────────┐  │
//! │  │  app    │───▶│  reveal  │───▶│   ui    │───▶│ Terminal │  │
//! │  │ (state) │    │  (plan)  │    │(render) │    │          │  │
//! │  └────┬────┘    └────▲─────┘    └────▲────┘    └──────────┘  │
//! │       │              │ flags         │                       │
//! │       ▼              │               │                       │
//! │  ┌──────────┐   RevealHandle    ┌────┴─────┐                 │
//! │  │  events  │   (tokio timers)  │   data   │                 │
//! │  └──────────┘                   └──────────┘                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`reveal`]**: the [`RevealHandle`] that flips one loading flag per
//!   region after its delay and pushes every transition to subscribers, and
//!   [`DashboardPlan`], the pure mapping from flags to placeholder/content
//! - **[`data`]**: the literal datasets, derived insights and JSON export
//! - **[`app`]**: application state; owns the handle of the current mount
//! - **[`ui`]**: ratatui rendering of each region and the overlays
//! - **[`settings`]**: layered configuration (file, environment, flags)
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Default delays: map 1.5s, widgets 2.2s, charts 3s
//! moana
//!
//! # Slow everything down and log the transitions
//! moana --map-delay 3s --widgets-delay 4s --charts-delay 6s --log-file moana.log
//!
//! # Write the dashboard data to JSON and exit
//! moana --export dashboard.json
//! ```
//!
//! ### As a library
//!
//! ```
//! use moana_insights::{DashboardPlan, RevealDelays, RevealHandle};
//! use moana_types::Region;
//!
//! # tokio_test::block_on(async {
//! let handle = RevealHandle::new(RevealDelays::default());
//! let mut updates = handle.subscribe();
//! handle.start();
//!
//! let flags = updates.recv().await.unwrap();
//! let plan = DashboardPlan::from_flags(&flags);
//! assert!(plan.view(Region::Map).is_content());
//! assert!(plan.live_badge);
//! # });
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod logging;
pub mod reveal;
pub mod settings;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use data::{DashboardData, Insights};
pub use reveal::{DashboardPlan, RegionView, RevealDelays, RevealHandle};
pub use settings::{Settings, SettingsError, ThemeChoice};
