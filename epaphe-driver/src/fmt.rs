//! Logging shims
//!
//! Diagnostics go to defmt when the `defmt` feature is enabled and cost
//! nothing otherwise. Only `debug` and `warn` levels are used: `debug`
//! for wire traffic, `warn` for protocol violations and drops.

#![allow(unused_macros)]

#[cfg(feature = "defmt")]
macro_rules! debug {
    ($($x:tt)*) => {
        ::defmt::debug!($($x)*)
    };
}

#[cfg(not(feature = "defmt"))]
macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        { $( let _ = &$x; )* }
    };
}

#[cfg(feature = "defmt")]
macro_rules! warn {
    ($($x:tt)*) => {
        ::defmt::warn!($($x)*)
    };
}

#[cfg(not(feature = "defmt"))]
macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        { $( let _ = &$x; )* }
    };
}
