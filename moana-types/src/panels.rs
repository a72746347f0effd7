//! Sidebar panel contents.

/// Headline figures shown in the ecosystem snapshot panel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EcosystemSnapshot {
    /// Average water temperature, °C.
    pub avg_water_temp: f64,
    /// Average coral coverage, percent.
    pub coral_coverage: f64,
    pub ph: f64,
    pub active_stations: usize,
    pub total_stations: usize,
}

/// Severity of an environmental alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlertLevel {
    Info,
    Caution,
    Critical,
}

/// One entry of the environmental alert list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
}

impl Alert {
    pub fn new(level: AlertLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}
