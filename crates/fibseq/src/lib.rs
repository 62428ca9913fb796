#![no_std]
#![forbid(unsafe_code)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_assignments, unused_variables))
))]
#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

//! The leading terms of the Fibonacci sequence.
//!
//! [`fib`] returns the first `n` terms as arbitrary precision integers, so
//! large requests never wrap. [`fib_u64`] is the same computation in native
//! 64-bit integers and reports the first term that no longer fits.
//!
//! ```
//! let terms = fibseq::fib(10)?;
//! assert_eq!(terms.len(), 10);
//! assert_eq!(terms[9], fibseq::BigUint::from(34u32));
//!
//! assert!(fibseq::fib(-1).is_err());
//! # Ok::<(), fibseq::Error>(())
//! ```
//!
//! ## Features
//! - **`std`**\
//!   Enables `num-bigint`'s standard library support. Enabled by default.
//! - **`log`**\
//!   Emits `log` records while building sequences. Enabled by default.
//!
//! Without `std` the crate only needs `alloc`.

mod std;
extern crate alloc;

// log for logging (optional).
#[cfg(feature = "log")]
#[allow(clippy::single_component_path_imports, unused_imports)]
use log;

#[cfg(not(feature = "log"))]
pub(crate) mod log {
    macro_rules! debug    ( ($($tt:tt)*) => {{}} );
    macro_rules! trace    ( ($($tt:tt)*) => {{}} );
    pub(crate) use debug;
    pub(crate) use trace;
}

mod error;
pub use error::*;

mod sequence;
pub use sequence::{fib, fib_u64, first_n, MAX_U64_TERMS};

/// Re-export of the integer type used for arbitrary precision terms.
pub use num_bigint::BigUint;
