#![no_std]

pub mod fee_curve;
pub mod full_math;
pub mod oracle_guard;
pub mod price_math;

pub use fee_curve::*;
pub use full_math::*;
pub use oracle_guard::*;
pub use price_math::*;
