//! Picking one route out of several candidates.
//!
//! Both pickers keep the first candidate that is strictly better than
//! everything before it, so among equals the earliest one wins. Callers
//! rely on this: candidate order comes from network insertion order,
//! which makes the chosen route deterministic.

use crate::domain::Route;

/// The route with the fewest segments, or the empty route if there are
/// no candidates.
pub fn shortest(candidates: impl IntoIterator<Item = Route>) -> Route {
    pick_min_by_key(candidates, Route::len)
}

/// The route with the fewest transfers, or the empty route if there are
/// no candidates.
pub fn fewest_transfers(candidates: impl IntoIterator<Item = Route>) -> Route {
    pick_min_by_key(candidates, Route::transfer_count)
}

fn pick_min_by_key<F>(candidates: impl IntoIterator<Item = Route>, key: F) -> Route
where
    F: Fn(&Route) -> usize,
{
    let mut best: Option<(usize, Route)> = None;
    for route in candidates {
        let k = key(&route);
        if best.as_ref().is_none_or(|(best_k, _)| k < *best_k) {
            best = Some((k, route));
        }
    }
    best.map(|(_, route)| route).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineId, Segment, StationId};

    fn route(hops: &[(u32, u32, u32)]) -> Route {
        Route::from_segments(
            hops.iter()
                .map(|&(line, from, to)| Segment::new(LineId(line), StationId(from), StationId(to)))
                .collect(),
        )
    }

    #[test]
    fn shortest_of_nothing_is_empty() {
        assert!(shortest(Vec::new()).is_empty());
        assert!(fewest_transfers(Vec::new()).is_empty());
    }

    #[test]
    fn shortest_picks_fewest_segments() {
        let long = route(&[(0, 0, 1), (0, 1, 2), (0, 2, 3)]);
        let short = route(&[(1, 0, 3)]);
        assert_eq!(shortest(vec![long, short.clone()]), short);
    }

    #[test]
    fn shortest_tie_keeps_first() {
        let first = route(&[(0, 0, 1), (0, 1, 2)]);
        let second = route(&[(1, 0, 4), (1, 4, 2)]);
        assert_eq!(shortest(vec![first.clone(), second]), first);
    }

    #[test]
    fn fewest_transfers_tie_keeps_first() {
        let first = route(&[(0, 0, 1), (1, 1, 2)]);
        let second = route(&[(2, 0, 4), (3, 4, 2)]);
        let third = route(&[(0, 0, 5), (0, 5, 2)]);

        assert_eq!(fewest_transfers(vec![first.clone(), second.clone()]), first);
        assert_eq!(fewest_transfers(vec![first, second, third.clone()]), third);
    }
}
