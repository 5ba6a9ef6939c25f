//! Conditional logging macros.
//!
//! With the `tracing` feature enabled these forward to `tracing`; without
//! it they still typecheck their arguments but emit nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        let _ = ($($arg)*);
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        let _ = ($($arg)*);
    };
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
