//! Leveled assertions.
//!
//! The level is fixed at compile time; checks above the configured level are compiled out by
//! the optimiser since the condition on the constant is always false.
#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const VLSI_ASSERT_LEVEL_DEFINITION: u8 = VLSI_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const VLSI_ASSERT_LEVEL_DEFINITION: u8 = VLSI_ASSERT_MODERATE;

pub const VLSI_ASSERT_SIMPLE: u8 = 1;
pub const VLSI_ASSERT_MODERATE: u8 = 2;
pub const VLSI_ASSERT_ADVANCED: u8 = 3;
pub const VLSI_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! vlsi_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::VLSI_ASSERT_LEVEL_DEFINITION >= $crate::asserts::VLSI_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! vlsi_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::VLSI_ASSERT_LEVEL_DEFINITION >= $crate::asserts::VLSI_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! vlsi_assert_ne_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::VLSI_ASSERT_LEVEL_DEFINITION >= $crate::asserts::VLSI_ASSERT_SIMPLE {
            assert_ne!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! vlsi_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::VLSI_ASSERT_LEVEL_DEFINITION >= $crate::asserts::VLSI_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! vlsi_assert_ne_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::VLSI_ASSERT_LEVEL_DEFINITION >= $crate::asserts::VLSI_ASSERT_MODERATE {
            assert_ne!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! vlsi_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::VLSI_ASSERT_LEVEL_DEFINITION >= $crate::asserts::VLSI_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! vlsi_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::VLSI_ASSERT_LEVEL_DEFINITION >= $crate::asserts::VLSI_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
