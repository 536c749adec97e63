use rayon::prelude::*;

use crate::dist::{Distances, Hop};

/// Maximum pressure released by one agent starting at the start valve with
/// `minutes` on the clock. Valves in `visited` are off limits, whether they
/// were already opened or are reserved for the other agent.
pub fn max_release(dist: &Distances, minutes: u32, visited: u64) -> u32 {
    best_from(dist, dist.start_row(), minutes, visited)
}

// Exhaustive depth-first search over opening orders. Time pruning keeps the
// branching factor small: every step costs at least 2 minutes (move plus
// open), so the depth is bounded by minutes/2 and candidates that can't run
// for at least one minute after opening are dropped up front.
fn best_from(dist: &Distances, row: &[Hop], minutes: u32, visited: u64) -> u32 {
    let mut best = 0;
    for hop in row {
        let bit = 1u64 << hop.valve;
        if visited & bit != 0 {
            continue;
        }
        let cost = hop.dist + 1; // travel there, then one minute turning the valve
        if cost >= minutes {
            continue; // it would never run, so opening it can't help
        }
        let left = minutes - cost;
        let gained = dist.flow(hop.valve) * left;
        let rest = best_from(dist, dist.row(hop.valve), left, visited | bit);
        best = best.max(gained + rest);
    }
    best
}

/// Maximum combined pressure released by two agents working the same network
/// for `minutes` each. Every split of the flow valves into "mine" and
/// "yours" is tried; the agents never interact beyond the split, so each
/// side is an independent single-agent search with the other side's valves
/// marked visited. The splits are independent too, so rayon fans them out.
pub fn max_release_duo(dist: &Distances, minutes: u32) -> u32 {
    let n = dist.nvalves();
    if n == 0 {
        return 0;
    }
    let full = dist.full_mask();
    // The highest bit always goes to the second agent. That drops each
    // split's mirror image without dropping any split.
    (0..1u64 << (n - 1))
        .into_par_iter()
        .map(|mine| {
            max_release(dist, minutes, full & !mine) + max_release(dist, minutes, mine)
        })
        .max()
        .unwrap_or(0)
}
