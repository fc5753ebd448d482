use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Number of cells not holding their goal value.
    Mismatch,
    /// Sum of city block distances of all tiles from their goal cells.
    Manhattan,
}

impl Heuristic {
    pub const ALL: [Heuristic; 2] = [Heuristic::Mismatch, Heuristic::Manhattan];
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Manhattan
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::Mismatch => write!(f, "mismatch"),
            Heuristic::Manhattan => write!(f, "manhattan"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mismatch" => Ok(Heuristic::Mismatch),
            "manhattan" => Ok(Heuristic::Manhattan),
            _ => Err(format!("Unknown heuristic: {}", s)),
        }
    }
}

/// Caps on how much work a single search may do. Unlimited by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of search nodes created (pushed to the open set).
    pub max_nodes: Option<usize>,
    /// Checked once per expanded node.
    pub max_time: Option<Duration>,
}

impl Limits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_nodes(self, max_nodes: usize) -> Self {
        Self {
            max_nodes: Some(max_nodes),
            ..self
        }
    }

    pub fn with_max_time(self, max_time: Duration) -> Self {
        Self {
            max_time: Some(max_time),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_names() {
        for &heuristic in &Heuristic::ALL {
            assert_eq!(heuristic.to_string().parse(), Ok(heuristic));
        }
        assert!("euclid".parse::<Heuristic>().is_err());
        assert_eq!(Heuristic::default(), Heuristic::Manhattan);
    }

    #[test]
    fn building_limits() {
        let limits = Limits::unlimited()
            .with_max_nodes(1000)
            .with_max_time(Duration::from_secs(2));
        assert_eq!(limits.max_nodes, Some(1000));
        assert_eq!(limits.max_time, Some(Duration::from_secs(2)));
        assert_eq!(Limits::default().max_nodes, None);
    }
}
