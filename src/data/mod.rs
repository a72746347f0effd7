//! Dashboard data and the small amount of processing it needs.
//!
//! ## Submodules
//!
//! - [`dashboard`]: [`DashboardData`], the loaded datasets plus JSON export
//! - [`duration`]: parsing and formatting of reveal delays ("1500ms", "2.2s")
//! - [`format`]: display strings for readings, tooltips and placeholders
//! - [`insights`]: status counts, best/worst station, chart domains
//!
//! ## Data Flow
//!
//! ```text
//! moana_types::dataset (literals)
//!        │
//!        ▼
//! DashboardData::load()
//!        │
//!        ├──▶ Insights::compute()
//!        │
//!        └──▶ ui::* (via format::*)
//! ```

pub mod dashboard;
pub mod duration;
pub mod format;
pub mod insights;

pub use dashboard::DashboardData;
pub use insights::{Highlight, Insights, StatusCounts};
