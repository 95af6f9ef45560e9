use std::time::Duration;

use super::SearchStrategy;
use crate::encoders::EncodingOptions;

/// Options of [`crate::optimisation::optimise`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptimiserOptions {
    pub strategy: SearchStrategy,
    pub encoding: EncodingOptions,
    /// The budget shared by all probes; `None` for no limit.
    pub time_limit: Option<Duration>,
}
