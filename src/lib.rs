//! Exact 128-bit unsigned arithmetic built from native 64-bit operations.
//!
//! A value is a pair of 64-bit limbs `(lo, hi)` meaning `lo + hi * 2^64`.
//! Every operation is a pure total function reduced modulo 2^128; nothing
//! allocates, blocks, or fails. The crate also builds as a cdylib so that
//! C callers without a native 128-bit type can link against the same
//! operations.

pub mod core;
pub mod ffi;

// --- Public API ---
pub use crate::core::uint128::{Uint128, add, lt, mul, mul64, negate};
pub use crate::core::wide_arith::{WideningMul, schoolbook_mul64};
