// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::btree_map::{BTreeMap, Entry};

use crate::campus::PCE_LANDMARKS;
use crate::{earth_distance, Landmark};

/// Error conditions which may occur when building a [LandmarkTable].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("landmark without a name")]
    EmptyName,

    #[error("duplicate landmark: {0:?}")]
    DuplicateName(String),

    #[error("landmark {name:?} has invalid coordinates: {lat}, {lon}")]
    InvalidCoordinates { name: String, lat: f64, lon: f64 },
}

/// Immutable set of [Landmarks](Landmark), indexed by name.
///
/// Iteration follows the order in which landmarks were provided to [LandmarkTable::new].
/// A table can't be changed once built; it is safe to share between threads
/// and to route over concurrently.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LandmarkTable {
    landmarks: Vec<Landmark>,
    by_name: BTreeMap<String, usize>,
}

impl LandmarkTable {
    /// Builds a table from an iterable of [Landmarks](Landmark).
    ///
    /// Names must be non-empty and unique, latitudes must be within [-90, 90]
    /// and longitudes within [-180, 180].
    pub fn new<I: IntoIterator<Item = Landmark>>(landmarks: I) -> Result<Self, TableError> {
        let mut t = Self::default();

        for landmark in landmarks {
            if landmark.name.is_empty() {
                return Err(TableError::EmptyName);
            }

            if !valid_position(landmark.lat, landmark.lon) {
                return Err(TableError::InvalidCoordinates {
                    name: landmark.name,
                    lat: landmark.lat,
                    lon: landmark.lon,
                });
            }

            match t.by_name.entry(landmark.name.clone()) {
                Entry::Vacant(e) => {
                    e.insert(t.landmarks.len());
                    t.landmarks.push(landmark);
                }
                Entry::Occupied(e) => return Err(TableError::DuplicateName(e.key().clone())),
            }
        }

        Ok(t)
    }

    /// Returns the built-in table of landmarks on the PCE campus.
    pub fn campus() -> Self {
        Self {
            landmarks: PCE_LANDMARKS
                .iter()
                .map(|&(name, lat, lon)| Landmark::new(name, lat, lon))
                .collect(),
            by_name: PCE_LANDMARKS
                .iter()
                .enumerate()
                .map(|(idx, &(name, _, _))| (name.to_string(), idx))
                .collect(),
        }
    }

    /// Returns the number of landmarks in the table.
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Returns an iterator over all [Landmarks](Landmark), in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter()
    }

    /// Returns names of all landmarks, in definition order.
    pub fn names(&self) -> Vec<&str> {
        self.landmarks.iter().map(|l| l.name.as_str()).collect()
    }

    /// Retrieves a [Landmark] with the provided name.
    pub fn get(&self, name: &str) -> Option<&Landmark> {
        self.index_of(name).map(|idx| &self.landmarks[idx])
    }

    /// Returns the definition-order position of a landmark with the provided name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Retrieves a [Landmark] by its definition-order position.
    ///
    /// Panics if `idx` is out of bounds.
    pub(crate) fn at(&self, idx: usize) -> &Landmark {
        &self.landmarks[idx]
    }

    /// Finds the closest [Landmark] to the given position.
    ///
    /// Returns `None` only if the table is empty.
    pub fn find_nearest(&self, lat: f64, lon: f64) -> Option<&Landmark> {
        self.landmarks
            .iter()
            .map(|l| (earth_distance(lat, lon, l.lat, l.lon), l))
            .min_by(|(a_dist, _), (b_dist, _)| a_dist.total_cmp(b_dist))
            .map(|(_, l)| l)
    }
}

impl<'a> IntoIterator for &'a LandmarkTable {
    type Item = &'a Landmark;
    type IntoIter = std::slice::Iter<'a, Landmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.landmarks.iter()
    }
}

fn valid_position(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campus_table() {
        let t = LandmarkTable::campus();
        assert_eq!(t.len(), 21);
        assert!(!t.is_empty());

        let names = t.names();
        assert_eq!(names.first(), Some(&"PCE Main Gate"));
        assert_eq!(names.last(), Some(&"MBA/BBA"));

        let library = t.get("Library").unwrap();
        assert_eq!(library.lat, 21.101417);
        assert_eq!(library.lon, 79.007840);
        assert_eq!(t.index_of("Library"), Some(12));
        assert_eq!(t.get("Nonexistent"), None);
    }

    #[test]
    fn campus_table_matches_new() {
        let built = LandmarkTable::new(LandmarkTable::campus().iter().cloned()).unwrap();
        assert_eq!(built, LandmarkTable::campus());
    }

    #[test]
    fn new_keeps_definition_order() {
        let t = LandmarkTable::new([
            Landmark::new("Zeta", 0.0, 0.0),
            Landmark::new("Alpha", 0.001, 0.0),
            Landmark::new("Mu", 0.002, 0.0),
        ])
        .unwrap();

        assert_eq!(t.names(), vec!["Zeta", "Alpha", "Mu"]);
        assert_eq!(t.index_of("Alpha"), Some(1));
    }

    #[test]
    fn new_rejects_duplicates() {
        let err = LandmarkTable::new([
            Landmark::new("Gate", 0.0, 0.0),
            Landmark::new("Gate", 0.001, 0.0),
        ])
        .unwrap_err();

        assert_eq!(err, TableError::DuplicateName("Gate".to_string()));
    }

    #[test]
    fn new_rejects_empty_names() {
        let err = LandmarkTable::new([Landmark::new("", 0.0, 0.0)]).unwrap_err();
        assert_eq!(err, TableError::EmptyName);
    }

    #[test]
    fn new_rejects_invalid_coordinates() {
        assert!(matches!(
            LandmarkTable::new([Landmark::new("North", 90.5, 0.0)]),
            Err(TableError::InvalidCoordinates { .. })
        ));
        assert!(matches!(
            LandmarkTable::new([Landmark::new("East", 0.0, 181.0)]),
            Err(TableError::InvalidCoordinates { .. })
        ));
        assert!(matches!(
            LandmarkTable::new([Landmark::new("Nowhere", f64::NAN, 0.0)]),
            Err(TableError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn find_nearest() {
        let t = LandmarkTable::campus();
        assert_eq!(
            t.find_nearest(21.10307, 79.00403).map(|l| l.name.as_str()),
            Some("PCE Main Gate"),
        );
        assert_eq!(
            t.find_nearest(21.1014, 79.0079).map(|l| l.name.as_str()),
            Some("Library"),
        );
        assert_eq!(LandmarkTable::default().find_nearest(0.0, 0.0), None);
    }
}
