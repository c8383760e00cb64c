// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{Options, Route, RouteError};
use crate::LandmarkTable;

#[derive(Debug, Clone, Copy)]
struct QueueItem {
    at: usize,
    cost: f64,
}

impl PartialEq for QueueItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueItem {}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // NOTE: We revert the order of comparison,
        // as lower costs (and, on ties, earlier landmarks) are considered better ("higher"),
        // and Rust's BinaryHeap is a max-heap.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.at.cmp(&self.at))
    }
}

fn reconstruct_path<'a>(
    table: &'a LandmarkTable,
    came_from: &[Option<usize>],
    mut last: usize,
) -> Vec<&'a str> {
    let mut path = vec![table.at(last).name.as_str()];

    while let Some(idx) = came_from[last] {
        path.push(table.at(idx).name.as_str());
        last = idx;
    }

    path.reverse();
    path
}

fn lookup(table: &LandmarkTable, name: &str) -> Result<usize, RouteError> {
    table
        .index_of(name)
        .ok_or_else(|| RouteError::UnknownLandmark(name.to_string()))
}

/// Uses [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// to find the shortest route between two landmarks, treating every pair
/// of distinct landmarks as directly connected.
///
/// Equivalent to [find_route_with_options] with default [Options].
pub fn find_route<'a>(
    table: &'a LandmarkTable,
    from: &str,
    to: &str,
) -> Result<Route<'a>, RouteError> {
    find_route_with_options(table, from, to, &Options::default())
}

/// Uses [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// to find the shortest route between two landmarks.
///
/// Edges are never stored; the cost of going from one landmark to another is their
/// [great-circle distance](crate::earth_distance), computed when the edge is relaxed.
/// Legs longer than [Options::max_leg] are skipped, and landmarks in [Options::avoid]
/// are never expanded. A NaN or negative [Options::max_leg] is rejected with
/// [RouteError::InvalidMaxLeg].
///
/// Among landmarks with equal tentative distance, the one defined earlier in the
/// table is settled first. Results are thus deterministic for a given table.
pub fn find_route_with_options<'a>(
    table: &'a LandmarkTable,
    from: &str,
    to: &str,
    options: &Options,
) -> Result<Route<'a>, RouteError> {
    if options.max_leg.is_nan() || options.max_leg < 0.0 {
        return Err(RouteError::InvalidMaxLeg(options.max_leg));
    }

    let from_idx = lookup(table, from)?;
    let to_idx = lookup(table, to)?;

    let mut avoided = vec![false; table.len()];
    for name in &options.avoid {
        avoided[lookup(table, name)?] = true;
    }

    if from_idx == to_idx {
        return Ok(Route {
            path: vec![table.at(from_idx).name.as_str()],
            distance: 0.0,
        });
    }

    let mut queue: BinaryHeap<QueueItem> = BinaryHeap::default();
    let mut came_from: Vec<Option<usize>> = vec![None; table.len()];
    let mut known_costs: Vec<f64> = vec![f64::INFINITY; table.len()];
    let mut settled: Vec<bool> = vec![false; table.len()];

    queue.push(QueueItem {
        at: from_idx,
        cost: 0.0,
    });
    known_costs[from_idx] = 0.0;

    while let Some(item) = queue.pop() {
        if item.at == to_idx {
            let path = reconstruct_path(table, &came_from, to_idx);
            log::debug!(
                "route {:?} -> {:?}: {} landmarks, {:.1} m",
                from,
                to,
                path.len(),
                item.cost,
            );
            return Ok(Route {
                path,
                distance: item.cost,
            });
        }

        // A landmark may be queued multiple times; only its cheapest item counts.
        if settled[item.at] {
            continue;
        }
        settled[item.at] = true;

        if item.at != from_idx && avoided[item.at] {
            continue;
        }

        let here = table.at(item.at);
        for (neighbor_idx, neighbor) in table.iter().enumerate() {
            if settled[neighbor_idx] {
                continue;
            }

            let leg = here.distance_to(neighbor);
            if leg > options.max_leg {
                continue;
            }

            let neighbor_cost = item.cost + leg;
            if neighbor_cost < known_costs[neighbor_idx] {
                came_from[neighbor_idx] = Some(item.at);
                known_costs[neighbor_idx] = neighbor_cost;
                queue.push(QueueItem {
                    at: neighbor_idx,
                    cost: neighbor_cost,
                });
            }
        }
    }

    log::debug!("route {:?} -> {:?}: no path", from, to);
    Err(RouteError::NoPathFound {
        from: from.to_string(),
        to: to.to_string(),
    })
}
