//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection. Station
//! and species colors are fixed across themes; only chrome changes.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use moana_types::{AlertLevel, BleachingRisk, Rgb, StationStatus};

use crate::settings::ThemeChoice;

/// Marker color for healthy stations (#10B981).
pub const HEALTHY: Rgb = Rgb::from_u32(0x10B981);
/// Marker color for moderate stations (#F59E0B).
pub const MODERATE: Rgb = Rgb::from_u32(0xF59E0B);
/// Marker color for degraded stations (#EF4444).
pub const DEGRADED: Rgb = Rgb::from_u32(0xEF4444);
/// Current-year temperature line and health bars (#3B82F6).
pub const SERIES_PRIMARY: Rgb = Rgb::from_u32(0x3B82F6);
/// Baseline temperature line (#9CA3AF).
pub const SERIES_BASELINE: Rgb = Rgb::from_u32(0x9CA3AF);

/// Convert a data-model color for ratatui.
pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for titles and active elements.
    pub highlight: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Placeholder skeleton blocks.
    pub skeleton: Color,
    /// Color of the coastline on the station map.
    pub coastline: Color,
    /// Style for header rows in tables.
    pub header: Style,
    /// Style for selected/highlighted rows.
    pub selected: Style,
    /// Style for secondary text.
    pub muted: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
    /// True for the dark variant.
    pub is_dark: bool,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            border: Color::Gray,
            skeleton: Color::DarkGray,
            coastline: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
            is_dark: true,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            border: Color::DarkGray,
            skeleton: Color::Gray,
            coastline: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
            is_dark: false,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::auto_detect(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Swap between the dark and light variants.
    pub fn toggled(&self) -> Self {
        if self.is_dark {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Marker color for a station status.
    pub fn status_color(&self, status: StationStatus) -> Color {
        match status {
            StationStatus::Healthy => color(HEALTHY),
            StationStatus::Moderate => color(MODERATE),
            StationStatus::Degraded => color(DEGRADED),
        }
    }

    pub fn status_style(&self, status: StationStatus) -> Style {
        let style = Style::default().fg(self.status_color(status));
        match status {
            StationStatus::Degraded => style.add_modifier(Modifier::BOLD),
            _ => style,
        }
    }

    /// High is red, Moderate yellow, Low green.
    pub fn risk_style(&self, risk: BleachingRisk) -> Style {
        let fg = match risk {
            BleachingRisk::High => Color::Red,
            BleachingRisk::Moderate => Color::Yellow,
            BleachingRisk::Low => Color::Green,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    pub fn alert_style(&self, level: AlertLevel) -> Style {
        match level {
            AlertLevel::Info => Style::default().fg(Color::Blue),
            AlertLevel::Caution => Style::default().fg(Color::Yellow),
            AlertLevel::Critical => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }

    /// Style for a bordered panel.
    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors_match_markers() {
        let theme = Theme::dark();
        assert_eq!(
            theme.status_color(StationStatus::Healthy),
            Color::Rgb(0x10, 0xB9, 0x81)
        );
        assert_eq!(
            theme.status_color(StationStatus::Moderate),
            Color::Rgb(0xF5, 0x9E, 0x0B)
        );
        assert_eq!(
            theme.status_color(StationStatus::Degraded),
            Color::Rgb(0xEF, 0x44, 0x44)
        );
    }

    #[test]
    fn test_risk_colors() {
        let theme = Theme::light();
        assert_eq!(theme.risk_style(BleachingRisk::High).fg, Some(Color::Red));
        assert_eq!(theme.risk_style(BleachingRisk::Moderate).fg, Some(Color::Yellow));
        assert_eq!(theme.risk_style(BleachingRisk::Low).fg, Some(Color::Green));
    }

    #[test]
    fn test_toggle_flips_variant() {
        assert!(!Theme::dark().toggled().is_dark);
        assert!(Theme::light().toggled().is_dark);
        assert!(Theme::from_choice(ThemeChoice::Dark).is_dark);
    }
}
