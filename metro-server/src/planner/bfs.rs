//! Breadth-first search for the shortest routes between two stations.
//!
//! The search expands partial routes rather than stations: each queue
//! entry is a whole route from the start, and a route may never visit
//! the same station twice. Because every expansion adds exactly one
//! segment, routes leave the queue in order of length, so the first
//! length at which the destination is reached is the minimum.

use std::collections::VecDeque;

use tracing::trace;

use crate::domain::{LineId, Network, Route, StationId};

/// Find every route of minimal segment count from `start` to `end`.
///
/// With `line` set, only segments on that line are followed. Routes are
/// returned in the order they were discovered, which follows the order
/// of each station's outgoing segments, so repeated calls give identical
/// results. Returns nothing when `start == end` or `end` is unreachable.
///
/// The search is exponential in the worst case. It is meant for
/// networks of a few hundred stations.
pub fn shortest_routes(
    network: &Network,
    start: StationId,
    end: StationId,
    line: Option<LineId>,
) -> Vec<Route> {
    let mut found: Vec<Route> = Vec::new();
    if start == end {
        return found;
    }

    let mut best: Option<usize> = None;
    let mut queue: VecDeque<Route> = VecDeque::new();
    queue.push_back(Route::empty());
    let mut explored = 0usize;

    while let Some(route) = queue.pop_front() {
        explored += 1;

        // Already longer than a complete route: cannot improve.
        if best.is_some_and(|len| route.len() > len) {
            continue;
        }

        let (prev, last) = match route.segments().last() {
            Some(seg) => (Some(seg.from), seg.to),
            None => (None, start),
        };

        for segment in network.segments_from(last) {
            if Some(segment.to) == prev {
                continue;
            }
            if line.is_some_and(|l| segment.line != l) {
                continue;
            }

            if segment.to == end {
                let candidate = route.append(*segment);
                match best {
                    Some(len) if candidate.len() > len => {
                        // Every other segment here gives the same length.
                        break;
                    }
                    Some(len) if candidate.len() < len => {
                        found.clear();
                        best = Some(candidate.len());
                        found.push(candidate);
                    }
                    Some(_) => found.push(candidate),
                    None => {
                        best = Some(candidate.len());
                        found.push(candidate);
                    }
                }
            } else if !route.contains_station(segment.to) {
                queue.push_back(route.append(*segment));
            }
        }
    }

    trace!(
        start = start.index(),
        end = end.index(),
        line = line.map(LineId::index),
        explored,
        found = found.len(),
        "shortest route search complete"
    );

    found
}
