//! Logging of statistics in a `PREFIX name=value` format.
//!
//! Nothing is written until [`configure_statistic_logging`] has been called, so library users
//! who do not care about statistics pay only for the check.
mod statistic_logger;
mod statistic_logging;

use std::fmt::Display;
use std::fmt::Write;

pub use statistic_logger::StatisticLogger;
pub use statistic_logging::configure_statistic_logging;
pub use statistic_logging::log_statistic;
pub use statistic_logging::log_statistic_postfix;
pub use statistic_logging::should_log_statistics;
pub use statistic_logging::StatisticOptions;

/// A loggable statistic.
///
/// See [`create_statistics_struct!`] for creating a statistic struct automatically.
pub trait Statistic {
    /// Logs the [`Statistic`] using the provided [`StatisticLogger`].
    fn log(&self, statistic_logger: StatisticLogger);
}

impl<Value: Display> Statistic for Value {
    fn log(&self, mut statistic_logger: StatisticLogger) {
        // The logger never reports a formatting error.
        let _ = write!(statistic_logger, "{self}");
    }
}

/// Generates a struct of counters in which every field is logged under
/// `{prefix}_{field name}`.
///
/// # Example
/// ```rust
/// # use vlsi_sat_core::create_statistics_struct;
/// create_statistics_struct!(Statistics {
///     number_of_calls: usize
/// });
///
/// let statistics = Statistics::default();
///
/// assert_eq!(statistics.number_of_calls, 0);
/// ```
#[macro_export]
macro_rules! create_statistics_struct {
    ($(#[$struct_documentation:meta])* $name:ident { $($(#[$variable_documentation:meta])* $field:ident : $type:ident),+ $(,)? }) => {
        $(#[$struct_documentation])*
        #[derive(Default, Debug, Copy, Clone)]
        pub struct $name {
            $($(#[$variable_documentation])* pub $field: $type),+
        }

        impl $crate::statistics::Statistic for $name {
            fn log(&self, statistic_logger: $crate::statistics::StatisticLogger) {
                $($crate::statistics::Statistic::log(
                    &self.$field,
                    statistic_logger.attach_to_prefix(stringify!($field)),
                ));+
            }
        }
    };
}
