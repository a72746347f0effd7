//! # moana-types
//!
//! Data model for the Moana Insights coral health dashboard. This crate
//! holds everything the dashboard shows or reacts to that is not rendering:
//!
//! - [`Region`] and [`LoadingFlags`]: the closed set of dashboard areas and
//!   their monotonic "still loading" indicators
//! - [`Station`]: monitoring station records with status and readings
//! - Chart series ([`TemperaturePoint`], [`CoralHealthPoint`], [`SpeciesShare`])
//! - Sidebar panels ([`EcosystemSnapshot`], [`Alert`])
//! - [`dataset`]: the literal records shipped with the dashboard
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for every type (used by the
//!   JSON export)
//!
//! ## Example
//!
//! ```rust
//! use moana_types::{dataset, LoadingFlags, Region, StationStatus};
//!
//! let mut flags = LoadingFlags::new();
//! assert!(flags.is_loading(Region::Map));
//! assert!(flags.mark_ready(Region::Map));
//! assert!(!flags.mark_ready(Region::Map)); // exactly once
//!
//! let degraded = dataset::stations()
//!     .into_iter()
//!     .filter(|s| s.status == StationStatus::Degraded)
//!     .count();
//! assert_eq!(degraded, 1);
//! ```

mod color;
pub mod dataset;
mod panels;
mod region;
mod series;
mod station;
mod version;

pub use color::*;
pub use panels::*;
pub use region::*;
pub use series::*;
pub use station::*;
pub use version::*;

/// Current export document version.
///
/// Increment this when the layout of the exported JSON changes in a way
/// older readers cannot handle.
pub const EXPORT_VERSION: u32 = 1;
