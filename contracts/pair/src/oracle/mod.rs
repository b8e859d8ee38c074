use escrowswap_math::PRICE_SCALE;
use soroban_sdk::{Env, U256};

// Cumulative price oracle.
// Each accumulator sums `price * seconds`, with price scaled by 1e14, so a
// time-weighted average over any window is the difference of two readings
// divided by the window length.

/// `numerator * 1e14 / denominator`, saturating at `i128::MAX`.
///
/// Both reserves are positive `i128`s, so the intermediate always fits in
/// 256 bits.
fn scaled_price(env: &Env, numerator: i128, denominator: i128) -> i128 {
    let price = U256::from_u128(env, numerator as u128)
        .mul(&U256::from_u128(env, PRICE_SCALE as u128))
        .div(&U256::from_u128(env, denominator as u128));
    price
        .to_u128()
        .and_then(|p| i128::try_from(p).ok())
        .unwrap_or(i128::MAX)
}

/// Advances both accumulators by the prices implied by the reserves that
/// held for the last `time_elapsed` seconds.
///
/// Never fails: a reserve update must not be blocked by the oracle.
/// Accumulators wrap on overflow; only differences between readings are
/// meaningful.
pub fn update_cumulative_prices(
    env: &Env,
    reserve_0: i128,
    reserve_1: i128,
    time_elapsed: u64,
    price_0_cumulative: &mut i128,
    price_1_cumulative: &mut i128,
) {
    if time_elapsed == 0 || reserve_0 <= 0 || reserve_1 <= 0 {
        return;
    }

    let elapsed = time_elapsed as i128;
    let price_0 = scaled_price(env, reserve_1, reserve_0);
    let price_1 = scaled_price(env, reserve_0, reserve_1);

    *price_0_cumulative = price_0_cumulative.wrapping_add(price_0.wrapping_mul(elapsed));
    *price_1_cumulative = price_1_cumulative.wrapping_add(price_1.wrapping_mul(elapsed));
}
