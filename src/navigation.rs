// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Turning [Routes](crate::Route) into something a walker can follow:
//! walking time estimates, route overlays and destination pickers.

use std::time::Duration;

use serde_json::{json, Value};

use crate::{find_route_with_options, LandmarkTable, Options, Route, RouteError};

/// Assumed average walking speed, in meters per second.
pub const DEFAULT_WALKING_SPEED: f64 = 1.4;

/// Estimates how long it takes to walk `distance` meters at `speed` meters per second.
///
/// Non-positive or non-finite speeds are replaced by [DEFAULT_WALKING_SPEED].
pub fn walking_time(distance: f64, speed: f64) -> Duration {
    let speed = if speed.is_finite() && speed > 0.0 {
        speed
    } else {
        DEFAULT_WALKING_SPEED
    };
    Duration::try_from_secs_f64(distance.max(0.0) / speed).unwrap_or(Duration::MAX)
}

/// Converts a location passed through a URL parameter (or a scanned code)
/// into a landmark name, by replacing underscores with spaces.
pub fn decode_location_param(param: &str) -> String {
    param.replace('_', " ")
}

/// Finds the name of a landmark matching the user-provided location.
///
/// Exact names are preferred; otherwise the location is treated as
/// an [encoded parameter](decode_location_param).
pub fn resolve_location<'a>(
    table: &'a LandmarkTable,
    location: &str,
) -> Result<&'a str, RouteError> {
    table
        .get(location)
        .or_else(|| table.get(&decode_location_param(location)))
        .map(|l| l.name.as_str())
        .ok_or_else(|| RouteError::UnknownLandmark(location.to_string()))
}

/// A candidate destination, as seen from the current location.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination<'a> {
    pub name: &'a str,

    /// Straight-line distance from the current location, in meters.
    pub distance: f64,
}

/// Lists all landmarks other than `from`, in definition order,
/// together with their straight-line distance.
pub fn destinations<'a>(
    table: &'a LandmarkTable,
    from: &str,
) -> Result<Vec<Destination<'a>>, RouteError> {
    let here = table
        .get(from)
        .ok_or_else(|| RouteError::UnknownLandmark(from.to_string()))?;

    Ok(table
        .iter()
        .filter(|l| l.name != here.name)
        .map(|l| Destination {
            name: l.name.as_str(),
            distance: here.distance_to(l),
        })
        .collect())
}

/// Retains only the destinations whose name contains `term`, ignoring case.
/// An empty (or whitespace-only) term keeps everything.
pub fn filter_destinations<'a, 'b>(
    destinations: &'b [Destination<'a>],
    term: &str,
) -> Vec<&'b Destination<'a>> {
    let term = term.trim().to_lowercase();
    destinations
        .iter()
        .filter(|d| d.name.to_lowercase().contains(&term))
        .collect()
}

/// Everything needed to present a route: the [Route] itself,
/// the estimated walking time and the positions to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary<'a> {
    pub route: Route<'a>,

    pub walking_time: Duration,

    /// `(lat, lon)` of every landmark on the path, in order.
    pub waypoints: Vec<(f64, f64)>,
}

impl Itinerary<'_> {
    /// Builds the route overlay as a [GeoJSON](https://geojson.org/) FeatureCollection
    /// with a single LineString feature.
    pub fn to_geojson(&self) -> Value {
        let coordinates: Vec<Value> = self
            .waypoints
            .iter()
            .map(|&(lat, lon)| json!([lon, lat]))
            .collect();

        json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {
                    "from": self.route.start(),
                    "to": self.route.end(),
                    "via": self.route.via(),
                    "distance": (self.route.distance * 10.0).round() / 10.0,
                    "walking_time": self.walking_time.as_secs_f64().round() as u64,
                },
                "geometry": {
                    "type": "LineString",
                    "coordinates": coordinates,
                },
            }],
        })
    }
}

/// Finds the shortest route between two landmarks and prepares it for presentation.
pub fn plan<'a>(
    table: &'a LandmarkTable,
    from: &str,
    to: &str,
    options: &Options,
    walking_speed: f64,
) -> Result<Itinerary<'a>, RouteError> {
    let route = find_route_with_options(table, from, to, options)?;

    let waypoints = route
        .path
        .iter()
        .filter_map(|&name| table.get(name))
        .map(|l| (l.lat, l.lon))
        .collect();

    Ok(Itinerary {
        walking_time: walking_time(route.distance, walking_speed),
        route,
        waypoints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Landmark;

    #[test]
    fn walking_time_at_default_speed() {
        assert_eq!(
            walking_time(140.0, DEFAULT_WALKING_SPEED),
            Duration::from_secs(100)
        );
        assert_eq!(walking_time(0.0, DEFAULT_WALKING_SPEED), Duration::ZERO);
        assert_eq!(walking_time(100.0, 2.0), Duration::from_secs(50));
    }

    #[test]
    fn walking_time_with_invalid_speed() {
        assert_eq!(walking_time(140.0, 0.0), Duration::from_secs(100));
        assert_eq!(walking_time(140.0, -3.0), Duration::from_secs(100));
        assert_eq!(walking_time(140.0, f64::NAN), Duration::from_secs(100));
    }

    #[test]
    fn location_params() {
        assert_eq!(decode_location_param("PCE_Main_Gate"), "PCE Main Gate");
        assert_eq!(decode_location_param("Library"), "Library");

        let t = LandmarkTable::campus();
        assert_eq!(resolve_location(&t, "PCE_Main_Gate"), Ok("PCE Main Gate"));
        assert_eq!(resolve_location(&t, "Mechanical & T&P"), Ok("Mechanical & T&P"));
        assert_eq!(
            resolve_location(&t, "Hostel"),
            Err(RouteError::UnknownLandmark("Hostel".to_string())),
        );
    }

    #[test]
    fn resolve_prefers_exact_names() {
        let t = LandmarkTable::new([
            Landmark::new("Gate_A", 0.0, 0.0),
            Landmark::new("Gate A", 0.001, 0.0),
        ])
        .unwrap();

        assert_eq!(resolve_location(&t, "Gate_A"), Ok("Gate_A"));
        assert_eq!(resolve_location(&t, "Gate A"), Ok("Gate A"));
    }

    #[test]
    fn destination_list() {
        let t = LandmarkTable::campus();
        let list = destinations(&t, "PCE Main Gate").unwrap();

        assert_eq!(list.len(), t.len() - 1);
        assert!(list.iter().all(|d| d.name != "PCE Main Gate"));
        assert_eq!(list[0].name, "First Year Canteen");
        assert!((list[0].distance - 146.63).abs() < 0.01);

        assert!(matches!(
            destinations(&t, "Hostel"),
            Err(RouteError::UnknownLandmark(_))
        ));
    }

    #[test]
    fn destination_search() {
        let t = LandmarkTable::campus();
        let list = destinations(&t, "PCE Main Gate").unwrap();

        let names: Vec<&str> = filter_destinations(&list, "temple")
            .iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Saraswati Temple", "Mahadev Temple"]);

        let names: Vec<&str> = filter_destinations(&list, " IT ")
            .iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["IT Garden", "IT Auditorium", "IT/CS/CT Department"]);

        assert_eq!(filter_destinations(&list, "").len(), list.len());
        assert!(filter_destinations(&list, "hostel").is_empty());
    }

    #[test]
    fn plan_direct_route() {
        let t = LandmarkTable::campus();
        let itinerary = plan(
            &t,
            "PCE Main Gate",
            "Library",
            &Options::default(),
            DEFAULT_WALKING_SPEED,
        )
        .unwrap();

        assert_eq!(itinerary.route.start(), "PCE Main Gate");
        assert_eq!(itinerary.route.end(), "Library");
        assert!(itinerary.route.via().is_empty());
        assert_eq!(
            itinerary.waypoints,
            vec![(21.103063, 79.004020), (21.101417, 79.007840)],
        );
        assert_eq!(
            itinerary.walking_time,
            walking_time(itinerary.route.distance, DEFAULT_WALKING_SPEED),
        );
        assert_eq!(itinerary.walking_time.as_secs(), 311);
    }

    #[test]
    fn plan_with_stops() {
        let t = LandmarkTable::new([
            Landmark::new("West", 0.0, 0.0),
            Landmark::new("Middle", 0.0, 0.001),
            Landmark::new("East", 0.0, 0.002),
        ])
        .unwrap();
        let options = Options {
            max_leg: 150.0,
            ..Options::default()
        };

        let itinerary = plan(&t, "West", "East", &options, DEFAULT_WALKING_SPEED).unwrap();
        assert_eq!(itinerary.route.via(), &["Middle"]);
        assert_eq!(itinerary.waypoints, vec![(0.0, 0.0), (0.0, 0.001), (0.0, 0.002)]);
    }

    #[test]
    fn geojson() {
        let t = LandmarkTable::new([
            Landmark::new("Old \"Gate\"", 0.0, 0.0),
            Landmark::new("Hall", 0.0, 0.001),
        ])
        .unwrap();
        let itinerary = plan(&t, "Old \"Gate\"", "Hall", &Options::default(), 1.0).unwrap();

        assert_eq!(
            itinerary.to_geojson(),
            json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "properties": {
                        "from": "Old \"Gate\"",
                        "to": "Hall",
                        "via": [],
                        "distance": 111.2,
                        "walking_time": 111,
                    },
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[0.0, 0.0], [0.001, 0.0]],
                    },
                }],
            }),
        );

        let text = serde_json::to_string_pretty(&itinerary.to_geojson()).unwrap();
        assert!(text.contains(r#""from": "Old \"Gate\"""#));
    }
}
