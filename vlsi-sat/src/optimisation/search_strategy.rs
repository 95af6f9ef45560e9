use std::fmt::Display;

use clap::ValueEnum;

/// How the candidate heights are visited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SearchStrategy {
    /// Upwards from the lower bound, one height at a time; the first satisfiable height is
    /// optimal.
    #[default]
    Linear,
    /// Bisection between the lower bound and the first-fit height.
    Binary,
}

impl Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStrategy::Linear => write!(f, "linear"),
            SearchStrategy::Binary => write!(f, "binary"),
        }
    }
}
