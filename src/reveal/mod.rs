//! Staggered reveal of the dashboard regions.
//!
//! - [`sequencer`]: [`RevealHandle`] arms one timer per region and pushes
//!   every flag transition to its subscribers
//! - [`plan`]: [`DashboardPlan`] turns a flag set into the placeholder /
//!   content choice for each region
//!
//! ```text
//! RevealHandle::start()
//!        │  timers (map 1.5s, widgets 2.2s, charts 3s)
//!        ▼
//! LoadingFlags ──subscribe()──▶ App::apply_flags()
//!                                    │
//!                                    ▼
//!                         DashboardPlan::from_flags()
//!                                    │
//!                                    ▼
//!                         ui::render (placeholder | content)
//! ```

pub mod plan;
pub mod sequencer;

pub use plan::{DashboardPlan, RegionView};
pub use sequencer::{start, RevealDelays, RevealHandle};
