//! Regions of influence for the five turbine families.
//!
//! Vertices are in m³/s and m, authored for a log-log chart spanning
//! 1..=1000 on both axes. Containment is tested on the coordinates as
//! listed; the log scale only applies when the chart is drawn.

use std::fmt;

use serde::Serialize;

use crate::geometry::{Vertex, contains_inclusive};

/// Flow and head window of the selection chart, shared by both axes.
pub const CHART_LIMITS: (f64, f64) = (1.0, 1000.0);

static PELTON: [Vertex; 6] = [
    Vertex::new(1.0, 50.0),
    Vertex::new(1.0, 1000.0),
    Vertex::new(20.0, 1000.0),
    Vertex::new(60.0, 500.0),
    Vertex::new(50.0, 400.0),
    Vertex::new(1.0, 50.0),
];

static TURGO: [Vertex; 4] = [
    Vertex::new(1.0, 50.0),
    Vertex::new(1.0, 260.0),
    Vertex::new(10.0, 50.0),
    Vertex::new(1.0, 50.0),
];

static FRANCIS: [Vertex; 8] = [
    Vertex::new(1.0, 50.0),
    Vertex::new(5.0, 10.0),
    Vertex::new(200.0, 10.0),
    Vertex::new(900.0, 15.0),
    Vertex::new(900.0, 80.0),
    Vertex::new(100.0, 700.0),
    Vertex::new(6.0, 700.0),
    Vertex::new(1.0, 50.0),
];

static KAPLAN: [Vertex; 7] = [
    Vertex::new(1.0, 1.0),
    Vertex::new(1.0, 20.0),
    Vertex::new(9.0, 80.0),
    Vertex::new(175.0, 80.0),
    Vertex::new(1000.0, 15.0),
    Vertex::new(60.0, 1.0),
    Vertex::new(1.0, 1.0),
];

static CROSSFLOW: [Vertex; 5] = [
    Vertex::new(1.0, 4.0),
    Vertex::new(1.0, 100.0),
    Vertex::new(10.0, 10.0),
    Vertex::new(10.0, 4.0),
    Vertex::new(1.0, 4.0),
];

/// A turbine family with a fixed region of influence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TurbineRegion {
    Pelton,
    Turgo,
    Francis,
    Kaplan,
    Crossflow,
}

impl TurbineRegion {
    /// Every region, in chart legend order.
    pub const ALL: [TurbineRegion; 5] = [
        TurbineRegion::Pelton,
        TurbineRegion::Turgo,
        TurbineRegion::Francis,
        TurbineRegion::Kaplan,
        TurbineRegion::Crossflow,
    ];

    /// Closed vertex loop (first vertex repeated last) in m³/s and m.
    pub fn vertices(self) -> &'static [Vertex] {
        match self {
            TurbineRegion::Pelton => &PELTON,
            TurbineRegion::Turgo => &TURGO,
            TurbineRegion::Francis => &FRANCIS,
            TurbineRegion::Kaplan => &KAPLAN,
            TurbineRegion::Crossflow => &CROSSFLOW,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            TurbineRegion::Pelton => "Pelton",
            TurbineRegion::Turgo => "Turgo",
            TurbineRegion::Francis => "Francis",
            TurbineRegion::Kaplan => "Kaplan",
            TurbineRegion::Crossflow => "Crossflow",
        }
    }

    /// Returns `true` if the metric point lies inside or on the region.
    pub fn contains(self, point: Vertex) -> bool {
        contains_inclusive(self.vertices(), point)
    }
}

impl fmt::Display for TurbineRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_are_closed() {
        for region in TurbineRegion::ALL {
            let v = region.vertices();
            assert!(v.len() >= 4, "{region} has too few vertices");
            assert_eq!(v.first(), v.last(), "{region} ring is not closed");
        }
    }

    #[test]
    fn rings_fit_the_chart_window() {
        let (lo, hi) = CHART_LIMITS;
        for region in TurbineRegion::ALL {
            for v in region.vertices() {
                assert!((lo..=hi).contains(&v.flow), "{region} flow {}", v.flow);
                assert!((lo..=hi).contains(&v.head), "{region} head {}", v.head);
            }
        }
    }

    #[test]
    fn names_match_display() {
        for region in TurbineRegion::ALL {
            assert_eq!(region.to_string(), region.name());
        }
    }

    #[test]
    fn pelton_covers_high_head() {
        assert!(TurbineRegion::Pelton.contains(Vertex::new(30.0, 800.0)));
        assert!(!TurbineRegion::Pelton.contains(Vertex::new(30.0, 100.0)));
    }

    #[test]
    fn kaplan_covers_low_head_high_flow() {
        assert!(TurbineRegion::Kaplan.contains(Vertex::new(100.0, 5.0)));
        assert!(!TurbineRegion::Kaplan.contains(Vertex::new(100.0, 200.0)));
    }
}
