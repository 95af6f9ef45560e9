use std::fmt::Display;

use super::statistic_logging::log_statistic;

/// Logs statistics under a name prefix, e.g. the statistics of one solver call under
/// `engine`.
#[derive(Clone, Debug, Default)]
pub struct StatisticLogger {
    name_prefix: String,
}

impl StatisticLogger {
    pub fn new(name_prefix: impl Display) -> Self {
        Self {
            name_prefix: name_prefix.to_string(),
        }
    }

    pub fn attach_to_prefix(&self, addition_to_prefix: impl Display) -> Self {
        let name_prefix = if self.name_prefix.is_empty() {
            addition_to_prefix.to_string()
        } else {
            format!("{}_{}", self.name_prefix, addition_to_prefix)
        };
        Self { name_prefix }
    }
}

impl std::fmt::Write for StatisticLogger {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        log_statistic(&self.name_prefix, s);
        Ok(())
    }
}
