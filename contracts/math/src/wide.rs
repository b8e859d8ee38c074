use soroban_sdk::{Env, U256};

use crate::errors::MathError;

/// Lifts a non-negative `i128` into `U256`. Negative values have no
/// unsigned representation and are reported as overflow.
pub(crate) fn widen(env: &Env, value: i128) -> Result<U256, MathError> {
    if value < 0 {
        return Err(MathError::ArithmeticOverflow);
    }
    Ok(U256::from_u128(env, value as u128))
}

/// Narrows a `U256` back into the token amount domain.
pub fn to_i128(value: &U256) -> Result<i128, MathError> {
    value
        .to_u128()
        .and_then(|v| i128::try_from(v).ok())
        .ok_or(MathError::ArithmeticOverflow)
}

/// Full-width `a * b`. Two `i128` operands always fit in 256 bits.
pub fn product(env: &Env, a: i128, b: i128) -> Result<U256, MathError> {
    Ok(widen(env, a)?.mul(&widen(env, b)?))
}

/// `a * b` on `U256`, reporting `ArithmeticOverflow` instead of trapping when
/// the product leaves 256 bits.
pub fn checked_mul(env: &Env, a: &U256, b: &U256) -> Result<U256, MathError> {
    let zero = U256::from_u32(env, 0);
    if *b == zero {
        return Ok(zero);
    }
    let max = U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX);
    if *a > max.div(b) {
        return Err(MathError::ArithmeticOverflow);
    }
    Ok(a.mul(b))
}

/// `a * b / denominator` rounded down, with a 256-bit intermediate.
pub fn mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> Result<i128, MathError> {
    if denominator <= 0 {
        return Err(MathError::ArithmeticOverflow);
    }
    let result = product(env, a, b)?.div(&widen(env, denominator)?);
    to_i128(&result)
}

/// Integer square root (floor) using Newton's method.
pub fn sqrt(env: &Env, value: &U256) -> U256 {
    let zero = U256::from_u32(env, 0);
    if *value == zero {
        return zero;
    }
    let one = U256::from_u32(env, 1);
    let two = U256::from_u32(env, 2);

    let mut x = value.clone();
    let mut y = x.add(&one).div(&two);
    while y < x {
        x = y;
        y = x.add(&value.div(&x)).div(&two);
    }
    x
}
