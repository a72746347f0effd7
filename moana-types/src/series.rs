//! Chart series.

use crate::Rgb;

/// Monthly water temperature against the long-term baseline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperaturePoint {
    /// Three-letter month name.
    pub month: String,
    /// Current year, °C.
    pub temp: f64,
    /// Baseline average, °C.
    pub baseline: f64,
}

impl TemperaturePoint {
    pub fn new(month: impl Into<String>, temp: f64, baseline: f64) -> Self {
        Self {
            month: month.into(),
            temp,
            baseline,
        }
    }

    /// Current minus baseline.
    pub fn anomaly(&self) -> f64 {
        self.temp - self.baseline
    }
}

/// Coral coverage and composite health score for one station.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoralHealthPoint {
    /// Short station name.
    pub station: String,
    /// Percent.
    pub coverage: u8,
    /// Percent.
    pub health: u8,
}

impl CoralHealthPoint {
    pub fn new(station: impl Into<String>, coverage: u8, health: u8) -> Self {
        Self {
            station: station.into(),
            coverage,
            health,
        }
    }
}

/// Share of observed coverage held by one species group.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesShare {
    pub name: String,
    /// Percent of the total.
    pub percentage: u8,
    pub color: Rgb,
}

impl SpeciesShare {
    pub fn new(name: impl Into<String>, percentage: u8, color: Rgb) -> Self {
        Self {
            name: name.into(),
            percentage,
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anomaly() {
        let p = TemperaturePoint::new("Jan", 18.2, 17.8);
        assert!((p.anomaly() - 0.4).abs() < 1e-9);
    }
}
