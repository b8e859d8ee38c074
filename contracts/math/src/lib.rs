#![no_std]

//! Constant-product quoting shared by the pair and router contracts.
//!
//! Every helper takes the `Env` so that intermediates which can exceed
//! `i128` (reserve products, share math) are carried in host-backed `U256`
//! and narrowed back with an explicit overflow check.

mod errors;
mod quote;
mod shares;
mod wide;

#[cfg(test)]
extern crate std;


pub use errors::MathError;
pub use quote::{quote_liquidity, quote_swap_input, quote_swap_output};
pub use shares::{minted_shares, protocol_fee_shares, withdrawn_amount};
pub use wide::{checked_mul, mul_div, product, sqrt, to_i128};

/// Shares permanently locked on the first deposit of every pair.
pub const MINIMUM_LIQUIDITY: i128 = 1_000;
/// Basis point denominator.
pub const BPS_DENOMINATOR: i128 = 10_000;
/// Swap fee charged on the input side, in basis points (0.30%).
pub const FEE_BPS: u32 = 30;
/// The protocol takes `1 / (PROTOCOL_FEE_DIVISOR + 1)` of invariant growth.
pub const PROTOCOL_FEE_DIVISOR: u32 = 5;
/// Fixed-point scale for cumulative prices.
pub const PRICE_SCALE: i128 = 100_000_000_000_000; // 1e14
