/// Number of `debug#<i>` lines emitted by a debug dump.
pub const DEBUG_ITERATIONS: usize = 3;

/// Offset folded into the sum when a record does not configure one.
pub const DEFAULT_SUM_OFFSET: i32 = 0;

/// Log filter used by the driver when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";
