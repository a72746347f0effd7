//! Dashboard regions and their loading flags.

use core::fmt;

/// One of the fixed dashboard areas that independently switches from a
/// placeholder to its content.
///
/// The set is closed: regions are never added at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Region {
    /// Monitoring station map.
    Map,
    /// Sidebar summary panels.
    Widgets,
    /// Analysis charts.
    Charts,
}

impl Region {
    /// Every region, in reveal order.
    pub const ALL: [Region; 3] = [Region::Map, Region::Widgets, Region::Charts];

    /// Lowercase identifier, as used in configuration keys.
    pub fn key(&self) -> &'static str {
        match self {
            Region::Map => "map",
            Region::Widgets => "widgets",
            Region::Charts => "charts",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// "Still loading" indicator for every [`Region`].
///
/// Every flag starts `true` and may flip to `false` exactly once. There is
/// no way to set a flag back to loading; a fresh set is the only way to
/// start over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadingFlags {
    map: bool,
    widgets: bool,
    charts: bool,
}

impl LoadingFlags {
    /// All regions loading.
    pub const fn new() -> Self {
        Self {
            map: true,
            widgets: true,
            charts: true,
        }
    }

    /// Whether `region` is still showing its placeholder.
    pub fn is_loading(&self, region: Region) -> bool {
        match region {
            Region::Map => self.map,
            Region::Widgets => self.widgets,
            Region::Charts => self.charts,
        }
    }

    /// Flip `region` to ready.
    ///
    /// Returns `true` if this call performed the transition, `false` if the
    /// region was already ready.
    pub fn mark_ready(&mut self, region: Region) -> bool {
        let slot = match region {
            Region::Map => &mut self.map,
            Region::Widgets => &mut self.widgets,
            Region::Charts => &mut self.charts,
        };
        let was_loading = *slot;
        *slot = false;
        was_loading
    }

    /// Number of regions that are ready.
    pub fn ready_count(&self) -> usize {
        Region::ALL.iter().filter(|r| !self.is_loading(**r)).count()
    }

    /// True once every region is ready.
    pub fn all_ready(&self) -> bool {
        self.ready_count() == Region::ALL.len()
    }

    /// Regions still loading, in reveal order.
    pub fn pending(&self) -> impl Iterator<Item = Region> + '_ {
        Region::ALL.into_iter().filter(|r| self.is_loading(*r))
    }

    /// True if every region ready in `earlier` is also ready here and at
    /// least one more region is ready.
    pub fn is_strictly_more_ready_than(&self, earlier: &LoadingFlags) -> bool {
        let never_reverted = Region::ALL
            .iter()
            .all(|r| earlier.is_loading(*r) || !self.is_loading(*r));
        never_reverted && self.ready_count() > earlier.ready_count()
    }
}

impl Default for LoadingFlags {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_flags_all_loading() {
        let flags = LoadingFlags::new();
        for region in Region::ALL {
            assert!(flags.is_loading(region));
        }
        assert_eq!(flags.ready_count(), 0);
        assert!(!flags.all_ready());
    }

    #[test]
    fn test_mark_ready_is_exactly_once() {
        let mut flags = LoadingFlags::new();
        assert!(flags.mark_ready(Region::Widgets));
        assert!(!flags.mark_ready(Region::Widgets));
        assert!(!flags.is_loading(Region::Widgets));
        assert!(flags.is_loading(Region::Map));
        assert!(flags.is_loading(Region::Charts));
    }

    #[test]
    fn test_pending_in_reveal_order() {
        let mut flags = LoadingFlags::new();
        flags.mark_ready(Region::Widgets);
        let pending: Vec<Region> = flags.pending().collect();
        assert_eq!(pending, vec![Region::Map, Region::Charts]);
    }

    #[test]
    fn test_strictly_more_ready_requires_progress() {
        let start = LoadingFlags::new();
        let mut one = start;
        one.mark_ready(Region::Map);

        assert!(one.is_strictly_more_ready_than(&start));
        assert!(!start.is_strictly_more_ready_than(&one));
        assert!(!one.is_strictly_more_ready_than(&one));
    }

    #[test]
    fn test_strictly_more_ready_rejects_different_region() {
        let mut map_ready = LoadingFlags::new();
        map_ready.mark_ready(Region::Map);
        let mut widgets_and_charts = LoadingFlags::new();
        widgets_and_charts.mark_ready(Region::Widgets);
        widgets_and_charts.mark_ready(Region::Charts);

        // More regions ready, but map went back to loading.
        assert!(!widgets_and_charts.is_strictly_more_ready_than(&map_ready));
    }

    #[test]
    fn test_region_keys() {
        assert_eq!(Region::Map.key(), "map");
        assert_eq!(Region::Widgets.to_string(), "widgets");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_lowercase_region() {
        let json = serde_json::to_string(&Region::Widgets).unwrap();
        assert_eq!(json, "\"widgets\"");
    }
}
