//! Literal records shipped with the dashboard.
//!
//! There is no data feed: every figure on screen comes from here.

use crate::{
    Alert, AlertLevel, BleachingRisk, CoralHealthPoint, Coordinates, EcosystemSnapshot, Rgb,
    SpeciesShare, Station, StationStatus, TemperaturePoint,
};

/// Map view center (Wellington), lon/lat.
pub const MAP_CENTER: Coordinates = Coordinates::new(174.7633, -41.2865);

/// The five coastal monitoring stations.
pub fn stations() -> Vec<Station> {
    vec![
        Station::new(
            "Poor Knights Marine Reserve",
            Coordinates::new(175.9057, -37.5339),
            StationStatus::Healthy,
        )
        .with_coverage(85)
        .with_water_temp(16.2)
        .with_bleaching_risk(BleachingRisk::Low)
        .with_last_update("2 hours ago")
        .with_species("Bryozoans, Sponges")
        .with_ph(8.1),
        Station::new(
            "Mayor Island (Tuhua)",
            Coordinates::new(176.2144, -37.787),
            StationStatus::Moderate,
        )
        .with_coverage(72)
        .with_water_temp(18.1)
        .with_bleaching_risk(BleachingRisk::Moderate)
        .with_last_update("4 hours ago")
        .with_species("Kelp Forest, Soft Corals")
        .with_ph(7.9),
        Station::new(
            "Bay of Islands",
            Coordinates::new(174.0299, -35.2269),
            StationStatus::Degraded,
        )
        .with_coverage(45)
        .with_water_temp(19.3)
        .with_bleaching_risk(BleachingRisk::High)
        .with_last_update("1 hour ago")
        .with_species("Reduced Diversity")
        .with_ph(7.8),
        Station::new(
            "Wellington South Coast",
            Coordinates::new(174.7633, -41.2865),
            StationStatus::Healthy,
        )
        .with_coverage(78)
        .with_water_temp(14.8)
        .with_bleaching_risk(BleachingRisk::Low)
        .with_last_update("30 minutes ago")
        .with_species("Bull Kelp, Caulerpa")
        .with_ph(8.0),
        Station::new(
            "Marlborough Sounds",
            Coordinates::new(173.2792, -41.737),
            StationStatus::Moderate,
        )
        .with_coverage(68)
        .with_water_temp(15.5)
        .with_bleaching_risk(BleachingRisk::Low)
        .with_last_update("3 hours ago")
        .with_species("Green Mussels, Kelp")
        .with_ph(7.95),
    ]
}

/// Monthly water temperature, current year against baseline.
pub fn water_temperature() -> Vec<TemperaturePoint> {
    [
        ("Jan", 18.2, 17.8),
        ("Feb", 19.1, 18.5),
        ("Mar", 17.8, 17.2),
        ("Apr", 16.4, 15.9),
        ("May", 14.8, 14.5),
        ("Jun", 13.2, 13.1),
        ("Jul", 12.9, 12.8),
        ("Aug", 13.4, 13.2),
        ("Sep", 14.7, 14.1),
        ("Oct", 15.8, 15.2),
        ("Nov", 17.2, 16.5),
        ("Dec", 18.8, 17.9),
    ]
    .into_iter()
    .map(|(month, temp, baseline)| TemperaturePoint::new(month, temp, baseline))
    .collect()
}

/// Coverage and health score per station.
pub fn coral_health() -> Vec<CoralHealthPoint> {
    vec![
        CoralHealthPoint::new("Poor Knights", 85, 92),
        CoralHealthPoint::new("Mayor Island", 72, 78),
        CoralHealthPoint::new("Bay of Islands", 45, 52),
        CoralHealthPoint::new("Wellington", 78, 84),
        CoralHealthPoint::new("Marlborough", 68, 75),
    ]
}

/// Species distribution across all stations.
pub fn species_distribution() -> Vec<SpeciesShare> {
    vec![
        SpeciesShare::new("Kelp Forest", 35, Rgb::from_u32(0x10B981)),
        SpeciesShare::new("Soft Corals", 28, Rgb::from_u32(0x3B82F6)),
        SpeciesShare::new("Sponges", 18, Rgb::from_u32(0x8B5CF6)),
        SpeciesShare::new("Bryozoans", 12, Rgb::from_u32(0xF59E0B)),
        SpeciesShare::new("Other", 7, Rgb::from_u32(0x6B7280)),
    ]
}

/// Headline figures for the ecosystem snapshot panel.
pub fn ecosystem_snapshot() -> EcosystemSnapshot {
    let total = stations().len();
    EcosystemSnapshot {
        avg_water_temp: 15.8,
        coral_coverage: 71.6,
        ph: 7.96,
        active_stations: total,
        total_stations: total,
    }
}

/// Latest field reports.
pub fn research_updates() -> Vec<String> {
    vec![
        "Poor Knights - Kelp recovery noted".to_string(),
        "Mayor Island - New species sighting".to_string(),
        "Wellington - pH levels stabilizing".to_string(),
    ]
}

/// Environmental alerts, most urgent first.
pub fn alerts() -> Vec<Alert> {
    vec![
        Alert::new(AlertLevel::Caution, "Water temp +0.4°C above baseline"),
        Alert::new(AlertLevel::Critical, "Bay of Islands coral degradation"),
        Alert::new(AlertLevel::Info, "Poor Knights kelp recovery noted"),
    ]
}

/// Note shown under the temperature chart.
pub const CLIMATE_ALERT: &str = "Water temperatures are averaging 0.4°C above baseline this year, \
indicating warming trend across monitoring stations.";

/// Note shown under the species distribution.
pub const ECOSYSTEM_INSIGHT: &str =
    "Kelp forests dominate healthy stations, while degraded areas show reduced species diversity.";

/// Age label for the coral health chart.
pub const CORAL_HEALTH_UPDATED: &str = "Updated 2 hours ago";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_stations_with_unique_names() {
        let stations = stations();
        assert_eq!(stations.len(), 5);
        let mut names: Vec<&str> = stations.iter().map(|s| s.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_stations_within_new_zealand_waters() {
        for station in stations() {
            let c = station.coordinates;
            assert!((165.0..180.0).contains(&c.lon), "{} lon {}", station.name, c.lon);
            assert!((-48.0..-34.0).contains(&c.lat), "{} lat {}", station.name, c.lat);
        }
    }

    #[test]
    fn test_temperature_series_covers_year() {
        let series = water_temperature();
        assert_eq!(series.len(), 12);
        assert_eq!(series[0].month, "Jan");
        assert_eq!(series[11].month, "Dec");
        // Every month runs warmer than its baseline.
        assert!(series.iter().all(|p| p.anomaly() > 0.0));
    }

    #[test]
    fn test_species_shares_sum_to_whole() {
        let total: u32 = species_distribution().iter().map(|s| s.percentage as u32).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_coral_health_matches_stations() {
        let health = coral_health();
        let stations = stations();
        assert_eq!(health.len(), stations.len());
        for (point, station) in health.iter().zip(&stations) {
            assert!(station.name.starts_with(&point.station));
            assert_eq!(point.coverage, station.coral_coverage);
        }
    }

    #[test]
    fn test_snapshot_counts_all_stations_active() {
        let snapshot = ecosystem_snapshot();
        assert_eq!(snapshot.active_stations, 5);
        assert_eq!(snapshot.total_stations, 5);
    }

    #[test]
    fn test_alerts_include_one_critical() {
        let critical = alerts().iter().filter(|a| a.level == AlertLevel::Critical).count();
        assert_eq!(critical, 1);
    }
}
