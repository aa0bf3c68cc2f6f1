pub mod uint128;
pub use crate::core::uint128::Uint128;

pub mod wide_arith;
pub use crate::core::wide_arith::WideningMul;
