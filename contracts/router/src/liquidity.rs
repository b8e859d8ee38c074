use escrowswap_math::quote_liquidity;
use soroban_sdk::{token::TokenClient, Address, Env};

use crate::{
    errors::RouterError,
    helpers::{
        ensure_deadline, factory, get_pair_address, get_reserves, sort_tokens, FactoryClient,
        PairClient,
    },
};

/// Amounts to deposit so the pool ratio is preserved.
///
/// An empty pool takes the desired amounts as they are. Otherwise one side
/// is kept at its desired amount and the other is cut down to match.
fn optimal_amounts(
    env: &Env,
    reserve_a: i128,
    reserve_b: i128,
    amount_a_desired: i128,
    amount_b_desired: i128,
    amount_a_min: i128,
    amount_b_min: i128,
) -> Result<(i128, i128), RouterError> {
    if reserve_a == 0 && reserve_b == 0 {
        if amount_a_desired < amount_a_min || amount_b_desired < amount_b_min {
            return Err(RouterError::SlippageExceeded);
        }
        return Ok((amount_a_desired, amount_b_desired));
    }

    let amount_b_optimal = quote_liquidity(env, amount_a_desired, reserve_a, reserve_b)?;
    if amount_b_optimal <= amount_b_desired {
        if amount_b_optimal < amount_b_min {
            return Err(RouterError::SlippageExceeded);
        }
        return Ok((amount_a_desired, amount_b_optimal));
    }

    let amount_a_optimal = quote_liquidity(env, amount_b_desired, reserve_b, reserve_a)?;
    if amount_a_optimal > amount_a_desired || amount_a_optimal < amount_a_min {
        return Err(RouterError::SlippageExceeded);
    }
    Ok((amount_a_optimal, amount_b_desired))
}

#[allow(clippy::too_many_arguments)]
pub fn add_liquidity(
    env: &Env,
    token_a: Address,
    token_b: Address,
    amount_a_desired: i128,
    amount_b_desired: i128,
    amount_a_min: i128,
    amount_b_min: i128,
    to: Address,
    deadline: u64,
) -> Result<(i128, i128, i128), RouterError> {
    ensure_deadline(env, deadline)?;
    sort_tokens(&token_a, &token_b)?;
    if amount_a_desired <= 0 || amount_b_desired <= 0 {
        return Err(RouterError::InsufficientInput);
    }
    to.require_auth();

    let factory = factory(env)?;
    let factory_client = FactoryClient::new(env, &factory);
    let pair = match factory_client.get_pair(&token_a, &token_b) {
        Some(pair) => pair,
        None => factory_client.create_pair(&token_a, &token_b),
    };

    let (reserve_a, reserve_b) = get_reserves(env, &pair, &token_a, &token_b)?;
    let (amount_a, amount_b) = optimal_amounts(
        env,
        reserve_a,
        reserve_b,
        amount_a_desired,
        amount_b_desired,
        amount_a_min,
        amount_b_min,
    )?;

    TokenClient::new(env, &token_a).transfer(&to, &pair, &amount_a);
    TokenClient::new(env, &token_b).transfer(&to, &pair, &amount_b);
    let liquidity = PairClient::new(env, &pair).mint(&to);

    Ok((amount_a, amount_b, liquidity))
}

#[allow(clippy::too_many_arguments)]
pub fn remove_liquidity(
    env: &Env,
    token_a: Address,
    token_b: Address,
    liquidity: i128,
    amount_a_min: i128,
    amount_b_min: i128,
    to: Address,
    deadline: u64,
) -> Result<(i128, i128), RouterError> {
    ensure_deadline(env, deadline)?;

    if liquidity <= 0 {
        return Err(RouterError::InsufficientInput);
    }

    let factory = factory(env)?;
    let pair_address = get_pair_address(env, &factory, &token_a, &token_b)?;
    let pair_client = PairClient::new(env, &pair_address);
    let lp_token_address = pair_client.lp_token();

    // The holder authorizes moving their shares into the pair
    to.require_auth();
    TokenClient::new(env, &lp_token_address).transfer(&to, &pair_address, &liquidity);

    let (amount_0, amount_1) = pair_client.burn(&to);
    let (token_0, _) = sort_tokens(&token_a, &token_b)?;
    let (amount_a, amount_b) = if token_a == token_0 {
        (amount_0, amount_1)
    } else {
        (amount_1, amount_0)
    };

    if amount_a < amount_a_min || amount_b < amount_b_min {
        return Err(RouterError::SlippageExceeded);
    }

    Ok((amount_a, amount_b))
}
