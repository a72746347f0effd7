//! Everything the dashboard displays, loaded once per mount.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use moana_types::{
    dataset, Alert, CoralHealthPoint, EcosystemSnapshot, ExportVersion, LoadingFlags,
    SpeciesShare, Station, TemperaturePoint,
};

use super::insights::Insights;

/// Station records, chart series and sidebar panels.
///
/// All of it is literal data; there is nothing to refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub stations: Vec<Station>,
    pub water_temperature: Vec<TemperaturePoint>,
    pub coral_health: Vec<CoralHealthPoint>,
    pub species: Vec<SpeciesShare>,
    pub snapshot: EcosystemSnapshot,
    pub research_updates: Vec<String>,
    pub alerts: Vec<Alert>,
    pub insights: Insights,
}

impl DashboardData {
    /// Load the shipped datasets and derive the insights.
    pub fn load() -> Self {
        let stations = dataset::stations();
        let water_temperature = dataset::water_temperature();
        let coral_health = dataset::coral_health();
        let insights = Insights::compute(&stations, &coral_health, &water_temperature);

        Self {
            stations,
            water_temperature,
            coral_health,
            species: dataset::species_distribution(),
            snapshot: dataset::ecosystem_snapshot(),
            research_updates: dataset::research_updates(),
            alerts: dataset::alerts(),
            insights,
        }
    }

    /// Write the data, plus the flags at export time, as pretty JSON.
    pub fn export(&self, flags: LoadingFlags, path: &Path) -> Result<()> {
        let document = ExportDocument {
            version: ExportVersion::current(),
            loading: flags,
            dashboard: self,
        };
        let json = serde_json::to_string_pretty(&document)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Default for DashboardData {
    fn default() -> Self {
        Self::load()
    }
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    version: ExportVersion,
    loading: LoadingFlags,
    #[serde(flatten)]
    dashboard: &'a DashboardData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use moana_types::Region;

    #[test]
    fn test_load_has_all_datasets() {
        let data = DashboardData::load();
        assert_eq!(data.stations.len(), 5);
        assert_eq!(data.water_temperature.len(), 12);
        assert_eq!(data.coral_health.len(), 5);
        assert_eq!(data.species.len(), 5);
        assert_eq!(data.alerts.len(), 3);
        assert_eq!(data.research_updates.len(), 3);
        assert_eq!(data.insights.status_counts.total(), 5);
    }

    #[test]
    fn test_export_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");

        let mut flags = LoadingFlags::new();
        flags.mark_ready(Region::Map);
        DashboardData::load().export(flags, &path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["version"]["major"], 1);
        assert_eq!(json["loading"]["map"], false);
        assert_eq!(json["loading"]["charts"], true);
        assert_eq!(json["stations"].as_array().unwrap().len(), 5);
        assert_eq!(json["stations"][2]["status"], "degraded");
        assert_eq!(json["stations"][2]["bleaching_risk"], "High");
        assert_eq!(
            json["insights"]["best_performing"]["station"],
            "Poor Knights Marine Reserve"
        );
        assert_eq!(json["alerts"][1]["level"], "critical");
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("export.json");
        assert!(DashboardData::load().export(LoadingFlags::new(), &path).is_err());
    }
}
