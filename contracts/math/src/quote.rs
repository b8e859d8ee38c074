use soroban_sdk::{Env, U256};

use crate::{
    errors::MathError,
    wide::{checked_mul, mul_div, product, to_i128},
    BPS_DENOMINATOR,
};

fn fee_factor(fee_bps: u32) -> Result<i128, MathError> {
    let factor = BPS_DENOMINATOR - fee_bps as i128;
    if factor <= 0 {
        return Err(MathError::InvalidFee);
    }
    Ok(factor)
}

/// Output of an exact-input swap against a constant-product pool.
///
/// The fee is taken from the input first:
///
/// ```text
/// amount_in_after_fee = amount_in * (10000 - fee_bps) / 10000
/// amount_out          = reserve_out * amount_in_after_fee
///                     / (reserve_in + amount_in_after_fee)
/// ```
///
/// A dust input may legitimately quote to zero; callers decide whether that
/// is acceptable.
pub fn quote_swap_output(
    env: &Env,
    amount_in: i128,
    reserve_in: i128,
    reserve_out: i128,
    fee_bps: u32,
) -> Result<i128, MathError> {
    if amount_in <= 0 {
        return Err(MathError::InsufficientInput);
    }
    if reserve_in <= 0 || reserve_out <= 0 {
        return Err(MathError::InsufficientLiquidity);
    }

    let amount_in_after_fee = mul_div(env, amount_in, fee_factor(fee_bps)?, BPS_DENOMINATOR)?;
    let denominator = reserve_in
        .checked_add(amount_in_after_fee)
        .ok_or(MathError::ArithmeticOverflow)?;

    mul_div(env, reserve_out, amount_in_after_fee, denominator)
}

/// Input required to receive exactly `amount_out`, rounded up by one unit.
///
/// Formula: amount_in = reserve_in * amount_out * 10000
///                    / ((reserve_out - amount_out) * (10000 - fee_bps)) + 1
pub fn quote_swap_input(
    env: &Env,
    amount_out: i128,
    reserve_in: i128,
    reserve_out: i128,
    fee_bps: u32,
) -> Result<i128, MathError> {
    if amount_out <= 0 {
        return Err(MathError::InsufficientOutput);
    }
    if reserve_in <= 0 || reserve_out <= 0 || amount_out >= reserve_out {
        return Err(MathError::InsufficientLiquidity);
    }

    let numerator = checked_mul(
        env,
        &product(env, reserve_in, amount_out)?,
        &U256::from_u128(env, BPS_DENOMINATOR as u128),
    )?;
    let denominator = product(env, reserve_out - amount_out, fee_factor(fee_bps)?)?;

    to_i128(&numerator.div(&denominator))?
        .checked_add(1)
        .ok_or(MathError::ArithmeticOverflow)
}

/// Amount of token B that matches `amount_a` at the current pool ratio.
pub fn quote_liquidity(
    env: &Env,
    amount_a: i128,
    reserve_a: i128,
    reserve_b: i128,
) -> Result<i128, MathError> {
    if amount_a <= 0 {
        return Err(MathError::InsufficientInput);
    }
    if reserve_a <= 0 || reserve_b < 0 {
        return Err(MathError::InsufficientLiquidity);
    }
    mul_div(env, amount_a, reserve_b, reserve_a)
}
