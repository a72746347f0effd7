//! Figures derived from the literal datasets.

use serde::Serialize;

use moana_types::{CoralHealthPoint, Station, StationStatus, TemperaturePoint};

/// Number of stations in each health status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub healthy: usize,
    pub moderate: usize,
    pub degraded: usize,
}

impl StatusCounts {
    pub fn from_stations(stations: &[Station]) -> Self {
        stations.iter().fold(Self::default(), |mut counts, station| {
            match station.status {
                StationStatus::Healthy => counts.healthy += 1,
                StationStatus::Moderate => counts.moderate += 1,
                StationStatus::Degraded => counts.degraded += 1,
            }
            counts
        })
    }

    pub fn get(&self, status: StationStatus) -> usize {
        match status {
            StationStatus::Healthy => self.healthy,
            StationStatus::Moderate => self.moderate,
            StationStatus::Degraded => self.degraded,
        }
    }

    pub fn total(&self) -> usize {
        self.healthy + self.moderate + self.degraded
    }

    /// Worst status present, if any station exists.
    pub fn worst(&self) -> Option<StationStatus> {
        StationStatus::ALL.into_iter().rev().find(|s| self.get(*s) > 0)
    }
}

/// A station singled out on the coral health chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    /// Full station name when it can be resolved, else the chart label.
    pub station: String,
    pub coverage: u8,
    pub health: u8,
}

impl Highlight {
    fn resolve(point: &CoralHealthPoint, stations: &[Station]) -> Self {
        let station = stations
            .iter()
            .find(|s| s.name.starts_with(&point.station))
            .map(|s| s.name.clone())
            .unwrap_or_else(|| point.station.clone());
        Self {
            station,
            coverage: point.coverage,
            health: point.health,
        }
    }

    /// "85% coverage, 92% health"
    pub fn summary(&self) -> String {
        format!("{}% coverage, {}% health", self.coverage, self.health)
    }
}

/// Everything the dashboard computes rather than displays verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub status_counts: StatusCounts,
    pub best_performing: Option<Highlight>,
    pub needs_attention: Option<Highlight>,
    /// Y axis bounds of the temperature chart.
    pub temperature_domain: (f64, f64),
    /// Mean of current minus baseline over the year.
    pub mean_anomaly: f64,
}

impl Insights {
    pub fn compute(
        stations: &[Station],
        coral: &[CoralHealthPoint],
        temperature: &[TemperaturePoint],
    ) -> Self {
        Self {
            status_counts: StatusCounts::from_stations(stations),
            best_performing: best_performing(coral).map(|p| Highlight::resolve(p, stations)),
            needs_attention: needs_attention(coral).map(|p| Highlight::resolve(p, stations)),
            temperature_domain: temperature_domain(temperature),
            mean_anomaly: mean_anomaly(temperature),
        }
    }
}

/// Highest health score; ties go to the earlier station.
pub fn best_performing(points: &[CoralHealthPoint]) -> Option<&CoralHealthPoint> {
    points.iter().rev().max_by_key(|p| p.health)
}

/// Lowest health score; ties go to the earlier station.
pub fn needs_attention(points: &[CoralHealthPoint]) -> Option<&CoralHealthPoint> {
    points.iter().min_by_key(|p| p.health)
}

/// Lowest and highest value across both series, padded by one degree.
///
/// An empty series yields `(0.0, 1.0)` so the axis stays drawable.
pub fn temperature_domain(points: &[TemperaturePoint]) -> (f64, f64) {
    let values = points.iter().flat_map(|p| [p.temp, p.baseline]);
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min.is_finite() && max.is_finite() {
        (min - 1.0, max + 1.0)
    } else {
        (0.0, 1.0)
    }
}

pub fn mean_anomaly(points: &[TemperaturePoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().map(|p| p.anomaly()).sum::<f64>() / points.len() as f64
}
