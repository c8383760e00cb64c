// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Walking routes between named campus landmarks.
//!
//! Landmarks form a complete graph: every pair of distinct landmarks is directly
//! connected, with the great-circle distance between them as the edge cost.
//! Dijkstra's algorithm is run over that graph to find shortest paths. The landmark
//! table is immutable once built, either from the built-in [campus](LandmarkTable::campus)
//! or from a file of [OpenStreetMap](https://www.openstreetmap.org/) nodes (see [osm]).
//!
//! # Example
//!
//! ```
//! let table = wayfinder::LandmarkTable::campus();
//! let route = wayfinder::find_route(&table, "PCE Main Gate", "Library")
//!     .expect("both landmarks are on the campus");
//!
//! assert_eq!(route.path.first(), Some(&"PCE Main Gate"));
//! assert_eq!(route.path.last(), Some(&"Library"));
//! println!("{:.0} m", route.distance);
//! ```

mod campus;
mod distance;
pub mod navigation;
pub mod osm;
mod route;
mod table;

pub use distance::{earth_distance, EARTH_RADIUS};
pub use route::{find_route, find_route_with_options, Options, Route, RouteError};
pub use table::{LandmarkTable, TableError};

/// A named point of interest with fixed geographic coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Landmark {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Landmark {
    pub fn new<S: Into<String>>(name: S, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }

    /// Returns the great-circle distance to another [Landmark], in meters.
    #[inline]
    pub fn distance_to(&self, other: &Landmark) -> f64 {
        earth_distance(self.lat, self.lon, other.lat, other.lon)
    }
}
