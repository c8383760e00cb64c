// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

/// Error conditions which may occur during [find_route](crate::find_route)
/// or [find_route_with_options](crate::find_route_with_options).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// The provided name doesn't exist in the [LandmarkTable](crate::LandmarkTable).
    #[error("unknown landmark: {0:?}")]
    UnknownLandmark(String),

    /// The end can't be reached from the start.
    ///
    /// Never returned for a complete graph, that is when
    /// [Options::max_leg](crate::Options::max_leg) is infinite.
    #[error("no path from {from:?} to {to:?}")]
    NoPathFound { from: String, to: String },

    /// [Options::max_leg](crate::Options::max_leg) is NaN or negative.
    #[error("invalid maximum leg length: {0}")]
    InvalidMaxLeg(f64),
}
