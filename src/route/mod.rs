// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

mod dijkstra;
mod error;

pub use dijkstra::{find_route, find_route_with_options};
pub use error::RouteError;

/// Additional controls for route search.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Longest direct leg between two consecutive landmarks, in meters.
    /// Longer legs are not considered at all, which means that a route
    /// may need to pass through intermediate landmarks, or not exist.
    ///
    /// Defaults to [f64::INFINITY], making every pair of landmarks directly connected.
    pub max_leg: f64,

    /// Names of landmarks which must not be passed through.
    /// They can still be used as the start or the end of a route.
    pub avoid: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_leg: f64::INFINITY,
            avoid: Vec::default(),
        }
    }
}

/// Shortest path between two landmarks.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<'a> {
    /// Names of landmarks to walk through, from the start to the end (both inclusive).
    pub path: Vec<&'a str>,

    /// Sum of great-circle distances between consecutive landmarks of the path, in meters.
    pub distance: f64,
}

impl<'a> Route<'a> {
    /// Returns the name of the first landmark of the route.
    pub fn start(&self) -> &'a str {
        self.path[0]
    }

    /// Returns the name of the last landmark of the route.
    pub fn end(&self) -> &'a str {
        self.path[self.path.len() - 1]
    }

    /// Returns the names of landmarks between the start and the end.
    pub fn via(&self) -> &[&'a str] {
        if self.path.len() > 2 {
            &self.path[1..self.path.len() - 1]
        } else {
            &[]
        }
    }
}
