//! Mapping from loading flags to what each region mounts.

use moana_types::{LoadingFlags, Region};

/// What a region shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionView {
    /// Skeleton of the same size as the content, so nothing shifts on reveal.
    Placeholder,
    Content,
}

impl RegionView {
    pub fn is_content(&self) -> bool {
        matches!(self, RegionView::Content)
    }
}

/// Per-region view selection for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardPlan {
    pub map: RegionView,
    pub widgets: RegionView,
    pub charts: RegionView,
    /// "Live Data" badge next to the map title; shown with the map.
    pub live_badge: bool,
}

impl DashboardPlan {
    pub fn from_flags(flags: &LoadingFlags) -> Self {
        let view = |region| {
            if flags.is_loading(region) {
                RegionView::Placeholder
            } else {
                RegionView::Content
            }
        };
        let map = view(Region::Map);
        Self {
            map,
            widgets: view(Region::Widgets),
            charts: view(Region::Charts),
            live_badge: map.is_content(),
        }
    }

    pub fn view(&self, region: Region) -> RegionView {
        match region {
            Region::Map => self.map,
            Region::Widgets => self.widgets,
            Region::Charts => self.charts,
        }
    }
}

impl Default for DashboardPlan {
    fn default() -> Self {
        Self::from_flags(&LoadingFlags::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_loading_is_all_placeholders() {
        let plan = DashboardPlan::default();
        for region in Region::ALL {
            assert_eq!(plan.view(region), RegionView::Placeholder);
        }
        assert!(!plan.live_badge);
    }

    #[test]
    fn test_every_flag_combination() {
        // Walk all 8 combinations of ready regions.
        for mask in 0u8..8 {
            let mut flags = LoadingFlags::new();
            for (bit, region) in Region::ALL.into_iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    flags.mark_ready(region);
                }
            }

            let plan = DashboardPlan::from_flags(&flags);
            for region in Region::ALL {
                assert_eq!(
                    plan.view(region).is_content(),
                    !flags.is_loading(region),
                    "mask {mask:03b} region {region}"
                );
            }
            assert_eq!(plan.live_badge, !flags.is_loading(Region::Map));
        }
    }

    #[test]
    fn test_charts_ready_alone() {
        let mut flags = LoadingFlags::new();
        flags.mark_ready(Region::Charts);
        let plan = DashboardPlan::from_flags(&flags);
        assert_eq!(plan.map, RegionView::Placeholder);
        assert_eq!(plan.widgets, RegionView::Placeholder);
        assert_eq!(plan.charts, RegionView::Content);
        assert!(!plan.live_badge);
    }
}
