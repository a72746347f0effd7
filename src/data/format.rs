//! Display strings for readings, tooltips and placeholders.

use std::fmt::Display;

/// Line series of the water temperature chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureSeries {
    Current,
    Baseline,
}

impl TemperatureSeries {
    /// Tooltip label.
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureSeries::Current => "Current",
            TemperatureSeries::Baseline => "Baseline",
        }
    }

    /// Legend label.
    pub fn legend(&self) -> &'static str {
        match self {
            TemperatureSeries::Current => "Current Year",
            TemperatureSeries::Baseline => "Baseline Average",
        }
    }
}

/// Bar series of the coral health chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoralMetric {
    Coverage,
    Health,
}

impl CoralMetric {
    pub fn label(&self) -> &'static str {
        match self {
            CoralMetric::Coverage => "Coverage",
            CoralMetric::Health => "Health Score",
        }
    }
}

/// "16.2°C"
pub fn celsius(value: f64) -> String {
    format!("{value:.1}°C")
}

/// "85%" or "71.6%", whatever the value displays as.
pub fn percent(value: impl Display) -> String {
    format!("{value}%")
}

/// pH with one decimal, or two when the second is significant ("8.0", "7.95").
pub fn ph(value: f64) -> String {
    let tenths = value * 10.0;
    if (tenths - tenths.round()).abs() < 1e-6 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

/// Temperature tooltip: value and series label.
pub fn temperature_tooltip(value: f64, series: TemperatureSeries) -> (String, &'static str) {
    (celsius(value), series.label())
}

/// Coral chart tooltip: value and metric label.
pub fn coral_tooltip(value: u8, metric: CoralMetric) -> (String, &'static str) {
    (percent(value), metric.label())
}

/// Species chart tooltip.
pub fn species_tooltip(value: u8) -> (String, &'static str) {
    (percent(value), "Coverage")
}

/// Pie slice label: "Kelp Forest: 35%".
pub fn species_label(name: &str, value: u8) -> String {
    format!("{name}: {value}%")
}

/// Signed anomaly: "+0.4°C".
pub fn anomaly(value: f64) -> String {
    format!("{value:+.1}°C")
}

/// Placeholder caption for a chart: "Loading water temperature trends...".
pub fn loading_caption(title: &str) -> String {
    format!("Loading {}...", title.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius() {
        assert_eq!(celsius(16.2), "16.2°C");
        assert_eq!(celsius(8.0), "8.0°C");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(85), "85%");
        assert_eq!(percent(71.6), "71.6%");
    }

    #[test]
    fn test_ph_keeps_significant_hundredths() {
        assert_eq!(ph(8.1), "8.1");
        assert_eq!(ph(8.0), "8.0");
        assert_eq!(ph(7.95), "7.95");
        assert_eq!(ph(7.96), "7.96");
    }

    #[test]
    fn test_tooltips() {
        assert_eq!(
            temperature_tooltip(18.2, TemperatureSeries::Current),
            ("18.2°C".to_string(), "Current")
        );
        assert_eq!(
            temperature_tooltip(17.8, TemperatureSeries::Baseline),
            ("17.8°C".to_string(), "Baseline")
        );
        assert_eq!(coral_tooltip(92, CoralMetric::Health), ("92%".to_string(), "Health Score"));
        assert_eq!(coral_tooltip(85, CoralMetric::Coverage), ("85%".to_string(), "Coverage"));
        assert_eq!(species_tooltip(35), ("35%".to_string(), "Coverage"));
    }

    #[test]
    fn test_species_label() {
        assert_eq!(species_label("Kelp Forest", 35), "Kelp Forest: 35%");
    }

    #[test]
    fn test_anomaly_is_signed() {
        assert_eq!(anomaly(0.4), "+0.4°C");
        assert_eq!(anomaly(-1.3), "-1.3°C");
    }

    #[test]
    fn test_loading_caption_lowercases_title() {
        assert_eq!(
            loading_caption("Water Temperature Trends"),
            "Loading water temperature trends..."
        );
    }
}
