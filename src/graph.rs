use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use once_cell::unsync::Lazy;
use regex_lite::Regex;

/// Dense valve index, assigned in definition order while parsing. Using a
/// small integer instead of the two-letter name keeps the distance rows and
/// visited masks cheap to index.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValveId(pub(crate) u8);

impl ValveId {
    pub(crate) fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ValveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct Valve {
    pub name: String,
    pub flow: u32,
    pub tunnels: Vec<ValveId>,
}

/// The tunnel network. Immutable once parsed: the search only ever reads it.
pub struct Volcano {
    valves: Vec<Valve>,
    id_for: HashMap<String, ValveId>,
}

impl Volcano {
    pub fn get(&self, id: ValveId) -> &Valve {
        &self.valves[id.as_usize()]
    }

    pub fn id(&self, name: &str) -> Option<ValveId> {
        self.id_for.get(name).copied()
    }

    pub fn nvalves(&self) -> usize {
        self.valves.len()
    }

    pub fn valves(&self) -> impl Iterator<Item = (ValveId, &Valve)> {
        self.valves.iter().enumerate().map(|(i, v)| (ValveId(i as u8), v))
    }

    pub fn flow(&self, name: &str) -> Option<u32> {
        self.id(name).map(|id| self.get(id).flow)
    }

    pub fn tunnel_names(&self, name: &str) -> Option<Vec<&str>> {
        let id = self.id(name)?;
        Some(self.get(id).tunnels.iter().map(|&t| self.get(t).name.as_str()).collect())
    }
}

impl FromStr for Volcano {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // eg: Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
        let line_re = Lazy::new(|| {
            Regex::new(r#"Valve ([A-Z]{2}) has flow rate=(\d+); tunnel(?:s)? lead(?:s)? to valve(?:s)? (.*)"#).unwrap()
        });

        // Tunnels can name valves defined on later lines, so collect every
        // record before resolving names to ids.
        let mut records: Vec<(String, u32, Vec<String>)> = Vec::new();
        let mut id_for: HashMap<String, ValveId> = HashMap::new();
        for line in s.lines() {
            let Some(caps) = line_re.captures(line) else {
                return Err(format!("unexpected line format: {line}").into());
            };
            let name = caps[1].to_string();
            let flow: u32 = caps[2].parse()?;
            let tunnels: Vec<String> = caps[3].split(", ").map(str::to_string).collect();

            if records.len() > u8::MAX as usize {
                return Err("too many valves".into());
            }
            let id = ValveId(records.len() as u8);
            if id_for.insert(name.clone(), id).is_some() {
                return Err(format!("valve defined twice: {name}").into());
            }
            records.push((name, flow, tunnels));
        }

        let mut valves: Vec<Valve> = Vec::with_capacity(records.len());
        for (name, flow, tunnels) in records {
            let tunnels = tunnels
                .iter()
                .map(|t| {
                    id_for.get(t).copied().ok_or_else(|| format!("{name}: tunnel to unknown valve {t}"))
                })
                .collect::<Result<Vec<_>, _>>()?;
            valves.push(Valve { name, flow, tunnels });
        }
        Ok(Volcano { valves, id_for })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::EXAMPLE;

    #[test]
    fn test_volcano_from_str() {
        let volcano = Volcano::from_str(EXAMPLE).unwrap();
        assert_eq!(volcano.nvalves(), 10);
        assert_eq!(volcano.flow("BB"), Some(13));
        assert_eq!(volcano.flow("HH"), Some(22));
        assert_eq!(volcano.tunnel_names("GG"), Some(vec!["FF", "HH"]));
        assert_eq!(volcano.tunnel_names("JJ"), Some(vec!["II"]));
    }

    #[test]
    fn test_bad_line() {
        let got = Volcano::from_str("Valve AA has no flow at all");
        assert!(got.is_err());
    }

    #[test]
    fn test_unknown_tunnel() {
        let got = Volcano::from_str("Valve AA has flow rate=0; tunnel leads to valve ZZ");
        let err = got.err().unwrap().to_string();
        assert!(err.contains("unknown valve ZZ"), "unexpected error: {err}");
    }

    #[test]
    fn test_duplicate_valve() {
        let input = "\
Valve AA has flow rate=0; tunnel leads to valve AA
Valve AA has flow rate=3; tunnel leads to valve AA";
        assert!(Volcano::from_str(input).is_err());
    }
}
