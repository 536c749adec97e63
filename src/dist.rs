use std::collections::VecDeque;
use std::error::Error;

use crate::graph::{ValveId, Volcano};

/// One valve worth opening, as seen from some source: the bit it owns in the
/// visited mask and how many tunnel hops away it is.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Hop {
    pub valve: usize,
    pub dist: u32,
}

/// Shortest-path distances between the valves the search cares about: the
/// start valve and every valve with nonzero flow. One BFS per source over the
/// whole network (zero-flow valves still carry tunnels), then each row keeps
/// only nonzero-flow destinations. Unreachable destinations are simply absent
/// from a row. Read-only after build().
pub struct Distances {
    start_row: Vec<Hop>,
    rows: Vec<Vec<Hop>>,
    flows: Vec<u32>,
    names: Vec<String>,
}

impl Distances {
    pub fn build(volcano: &Volcano, start: &str) -> Result<Self, Box<dyn Error>> {
        let start_id = volcano
            .id(start)
            .ok_or_else(|| format!("unknown start valve: {start}"))?;

        let flow_ids: Vec<ValveId> = volcano
            .valves()
            .filter(|(_, v)| v.flow > 0)
            .map(|(id, _)| id)
            .collect();
        if flow_ids.len() > 64 {
            return Err(format!("{} flow valves won't fit a 64-bit visited mask", flow_ids.len()).into());
        }

        let row_for = |src: ValveId| -> Vec<Hop> {
            let dist = bfs(volcano, src);
            flow_ids
                .iter()
                .enumerate()
                .filter(|&(_, &id)| id != src) // a valve is never re-opened
                .filter_map(|(bit, &id)| dist[id.as_usize()].map(|d| Hop { valve: bit, dist: d }))
                .collect()
        };

        Ok(Distances {
            start_row: row_for(start_id),
            rows: flow_ids.iter().map(|&id| row_for(id)).collect(),
            flows: flow_ids.iter().map(|&id| volcano.get(id).flow).collect(),
            names: flow_ids.iter().map(|&id| volcano.get(id).name.clone()).collect(),
        })
    }

    /// Count of nonzero-flow valves, i.e. the width of the visited mask.
    pub fn nvalves(&self) -> usize {
        self.flows.len()
    }

    pub fn full_mask(&self) -> u64 {
        match self.nvalves() {
            0 => 0,
            n => u64::MAX >> (64 - n),
        }
    }

    pub fn flow(&self, bit: usize) -> u32 {
        self.flows[bit]
    }

    pub fn row(&self, bit: usize) -> &[Hop] {
        &self.rows[bit]
    }

    pub fn start_row(&self) -> &[Hop] {
        &self.start_row
    }

    pub fn bit(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn name(&self, bit: usize) -> &str {
        &self.names[bit]
    }
}

fn bfs(volcano: &Volcano, src: ValveId) -> Vec<Option<u32>> {
    let mut dist: Vec<Option<u32>> = vec![None; volcano.nvalves()];
    let mut queue: VecDeque<(ValveId, u32)> = VecDeque::new();
    dist[src.as_usize()] = Some(0);
    queue.push_back((src, 0));
    while let Some((cur, d)) = queue.pop_front() {
        for &next in &volcano.get(cur).tunnels {
            if dist[next.as_usize()].is_none() {
                dist[next.as_usize()] = Some(d + 1);
                queue.push_back((next, d + 1));
            }
        }
    }
    dist
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::EXAMPLE;

    fn example() -> Distances {
        let volcano: Volcano = EXAMPLE.parse().unwrap();
        Distances::build(&volcano, "AA").unwrap()
    }

    fn row_dists<'a>(d: &'a Distances, row: &[Hop]) -> Vec<(&'a str, u32)> {
        row.iter().map(|h| (d.name(h.valve), h.dist)).collect()
    }

    #[test]
    fn test_start_row() {
        let d = example();
        assert_eq!(
            row_dists(&d, d.start_row()),
            vec![("BB", 1), ("CC", 2), ("DD", 1), ("EE", 2), ("HH", 5), ("JJ", 2)],
        );
    }

    #[test]
    fn test_flow_valve_row_excludes_self() {
        let d = example();
        let dd = d.bit("DD").unwrap();
        assert_eq!(
            row_dists(&d, d.row(dd)),
            vec![("BB", 2), ("CC", 1), ("EE", 1), ("HH", 4), ("JJ", 3)],
        );
    }

    #[test]
    fn test_mask_layout() {
        let d = example();
        assert_eq!(d.nvalves(), 6);
        assert_eq!(d.full_mask(), 0b111111);
        assert_eq!(d.flow(d.bit("HH").unwrap()), 22);
    }

    #[test]
    fn test_unreachable_absent() {
        let input = "\
Valve AA has flow rate=0; tunnel leads to valve BB
Valve BB has flow rate=5; tunnel leads to valve AA
Valve CC has flow rate=9; tunnel leads to valve DD
Valve DD has flow rate=0; tunnel leads to valve CC";
        let volcano: Volcano = input.parse().unwrap();
        let d = Distances::build(&volcano, "AA").unwrap();
        assert_eq!(row_dists(&d, d.start_row()), vec![("BB", 1)]);
        // CC still owns a mask bit, it's just never offered from AA's side.
        assert_eq!(d.nvalves(), 2);
    }

    #[test]
    fn test_unknown_start() {
        let volcano: Volcano = EXAMPLE.parse().unwrap();
        assert!(Distances::build(&volcano, "ZZ").is_err());
    }
}
