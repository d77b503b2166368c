pub mod config;
pub mod error;
pub mod measurement;

#[doc(hidden)]
pub use tracing;

/// Logs a positive outcome on the printer's `success` channel.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "bodyscale::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}
