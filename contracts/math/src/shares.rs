use soroban_sdk::{Env, U256};

use crate::{
    errors::MathError,
    wide::{mul_div, product, sqrt, to_i128, widen},
    MINIMUM_LIQUIDITY, PROTOCOL_FEE_DIVISOR,
};

/// Shares owed for a deposit of `amount_0` / `amount_1`.
///
/// The first deposit mints `sqrt(amount_0 * amount_1) - MINIMUM_LIQUIDITY`
/// (the caller locks `MINIMUM_LIQUIDITY` separately). Later deposits mint
/// the smaller of the two proportional claims, so an unbalanced deposit
/// donates its excess to existing holders.
///
/// Returns `Ok(0)` when the deposit is too small to mint anything; the pair
/// turns that into `InsufficientLiquidityMinted`.
pub fn minted_shares(
    env: &Env,
    amount_0: i128,
    amount_1: i128,
    reserve_0: i128,
    reserve_1: i128,
    total_shares: i128,
) -> Result<i128, MathError> {
    if amount_0 < 0 || amount_1 < 0 {
        return Err(MathError::InsufficientInput);
    }

    if total_shares == 0 {
        let root = to_i128(&sqrt(env, &product(env, amount_0, amount_1)?))?;
        return Ok((root - MINIMUM_LIQUIDITY).max(0));
    }

    if reserve_0 <= 0 || reserve_1 <= 0 {
        return Err(MathError::InsufficientLiquidity);
    }
    let shares_0 = mul_div(env, amount_0, total_shares, reserve_0)?;
    let shares_1 = mul_div(env, amount_1, total_shares, reserve_1)?;
    Ok(shares_0.min(shares_1))
}

/// Pro-rata slice of `balance` redeemed by burning `shares`.
pub fn withdrawn_amount(
    env: &Env,
    shares: i128,
    balance: i128,
    total_shares: i128,
) -> Result<i128, MathError> {
    if total_shares <= 0 {
        return Err(MathError::InsufficientLiquidity);
    }
    mul_div(env, shares, balance, total_shares)
}

/// Shares minted to the fee recipient for invariant growth since the last
/// fee checkpoint:
///
/// ```text
/// total_shares * (root_k - root_k_last) / (root_k * 5 + root_k_last)
/// ```
pub fn protocol_fee_shares(
    env: &Env,
    total_shares: i128,
    root_k: &U256,
    root_k_last: &U256,
) -> Result<i128, MathError> {
    if root_k <= root_k_last {
        return Ok(0);
    }
    let numerator = widen(env, total_shares)?.mul(&root_k.sub(root_k_last));
    let denominator = root_k
        .mul(&U256::from_u32(env, PROTOCOL_FEE_DIVISOR))
        .add(root_k_last);
    to_i128(&numerator.div(&denominator))
}
