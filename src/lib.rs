//! Pressure-release planning for a valve network: given valves with flow
//! rates joined by tunnels, pick an opening order that maximizes the total
//! pressure released before the clock runs out. One mode plans for a single
//! agent, the other splits the valves between two agents working the same
//! network on a shorter clock.

use std::error::Error;
use std::io::Read;

pub mod dist;
pub mod graph;
pub mod search;

pub use dist::Distances;
pub use graph::Volcano;
pub use search::{max_release, max_release_duo};

/// Where every agent starts. Fixed by the problem, not derived from input.
pub const START_VALVE: &str = "AA";

pub const SOLO_MINUTES: u32 = 30;
pub const DUO_MINUTES: u32 = 26;

pub fn solo(r: impl Read, minutes: u32) -> Result<u32, Box<dyn Error>> {
    let dist = read_distances(r)?;
    Ok(max_release(&dist, minutes, 0))
}

pub fn duo(r: impl Read, minutes: u32) -> Result<u32, Box<dyn Error>> {
    let dist = read_distances(r)?;
    Ok(max_release_duo(&dist, minutes))
}

fn read_distances(r: impl Read) -> Result<Distances, Box<dyn Error>> {
    let input = std::io::read_to_string(r)?;
    let volcano: Volcano = input.parse()?;
    Distances::build(&volcano, START_VALVE)
}

#[cfg(test)]
pub const EXAMPLE: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II";
