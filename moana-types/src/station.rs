//! Monitoring station records.

use core::fmt;

/// Longitude/latitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinates {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Ecosystem health of a station. Drives the marker color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StationStatus {
    Healthy,
    Moderate,
    Degraded,
}

impl StationStatus {
    pub const ALL: [StationStatus; 3] = [
        StationStatus::Healthy,
        StationStatus::Moderate,
        StationStatus::Degraded,
    ];

    /// Capitalized label, e.g. "Healthy".
    pub fn label(&self) -> &'static str {
        match self {
            StationStatus::Healthy => "Healthy",
            StationStatus::Moderate => "Moderate",
            StationStatus::Degraded => "Degraded",
        }
    }
}

impl fmt::Display for StationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coral bleaching risk reported by a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BleachingRisk {
    Low,
    Moderate,
    High,
}

impl BleachingRisk {
    pub fn label(&self) -> &'static str {
        match self {
            BleachingRisk::Low => "Low",
            BleachingRisk::Moderate => "Moderate",
            BleachingRisk::High => "High",
        }
    }
}

impl fmt::Display for BleachingRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A fixed monitoring station and its latest readings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub name: String,
    pub coordinates: Coordinates,
    pub status: StationStatus,
    /// Live coral coverage, percent.
    pub coral_coverage: u8,
    /// Water temperature, degrees Celsius.
    pub water_temp: f64,
    pub bleaching_risk: BleachingRisk,
    /// Human-readable age of the readings ("2 hours ago").
    pub last_update: String,
    /// Dominant species, comma separated.
    pub species: String,
    pub ph: f64,
}

impl Station {
    /// Create a station with the given identity; readings start empty and
    /// are filled in with the `with_*` methods.
    pub fn new(name: impl Into<String>, coordinates: Coordinates, status: StationStatus) -> Self {
        Self {
            name: name.into(),
            coordinates,
            status,
            coral_coverage: 0,
            water_temp: 0.0,
            bleaching_risk: BleachingRisk::Low,
            last_update: String::new(),
            species: String::new(),
            ph: 0.0,
        }
    }

    pub fn with_coverage(mut self, percent: u8) -> Self {
        self.coral_coverage = percent;
        self
    }

    pub fn with_water_temp(mut self, celsius: f64) -> Self {
        self.water_temp = celsius;
        self
    }

    pub fn with_bleaching_risk(mut self, risk: BleachingRisk) -> Self {
        self.bleaching_risk = risk;
        self
    }

    pub fn with_last_update(mut self, age: impl Into<String>) -> Self {
        self.last_update = age.into();
        self
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = species.into();
        self
    }

    pub fn with_ph(mut self, ph: f64) -> Self {
        self.ph = ph;
        self
    }
}
