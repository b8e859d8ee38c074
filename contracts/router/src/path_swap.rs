use soroban_sdk::{token::TokenClient, Address, Env, Vec};

use crate::{
    errors::RouterError,
    helpers::{
        ensure_deadline, factory, get_amounts_in, get_amounts_out, get_pair_address,
        pair_outputs, PairClient,
    },
};

/// Executes the hops of an already quoted path. The first pair must
/// already hold `amounts[0]`; each pair pays straight into the next one.
fn swap_along(
    env: &Env,
    factory: &Address,
    amounts: &Vec<i128>,
    path: &Vec<Address>,
    to: &Address,
) -> Result<(), RouterError> {
    let hops = path.len() - 1;
    for i in 0..hops {
        let token_in = path.get(i).ok_or(RouterError::InvalidPath)?;
        let token_out = path.get(i + 1).ok_or(RouterError::InvalidPath)?;
        let amount_out = amounts.get(i + 1).ok_or(RouterError::InvalidPath)?;
        let (amount_0_out, amount_1_out) = pair_outputs(&token_in, &token_out, amount_out)?;

        let recipient = if i + 1 < hops {
            let next = path.get(i + 2).ok_or(RouterError::InvalidPath)?;
            get_pair_address(env, factory, &token_out, &next)?
        } else {
            to.clone()
        };

        let pair = get_pair_address(env, factory, &token_in, &token_out)?;
        PairClient::new(env, &pair).swap(&amount_0_out, &amount_1_out, &recipient);
    }
    Ok(())
}

fn pay_first_pair(
    env: &Env,
    factory: &Address,
    path: &Vec<Address>,
    from: &Address,
    amount: i128,
) -> Result<(), RouterError> {
    let token_in = path.get(0).ok_or(RouterError::InvalidPath)?;
    let next = path.get(1).ok_or(RouterError::InvalidPath)?;
    let pair = get_pair_address(env, factory, &token_in, &next)?;
    TokenClient::new(env, &token_in).transfer(from, &pair, &amount);
    Ok(())
}

pub fn exact_tokens_for_tokens(
    env: &Env,
    amount_in: i128,
    amount_out_min: i128,
    path: Vec<Address>,
    to: Address,
    deadline: u64,
) -> Result<Vec<i128>, RouterError> {
    ensure_deadline(env, deadline)?;
    if amount_in <= 0 {
        return Err(RouterError::InsufficientInput);
    }
    to.require_auth();

    let factory = factory(env)?;
    let amounts = get_amounts_out(env, &factory, amount_in, &path)?;
    let amount_out = amounts.last().ok_or(RouterError::InvalidPath)?;
    if amount_out < amount_out_min {
        return Err(RouterError::InsufficientOutputAmount);
    }

    pay_first_pair(env, &factory, &path, &to, amount_in)?;
    swap_along(env, &factory, &amounts, &path, &to)?;
    Ok(amounts)
}

pub fn tokens_for_exact_tokens(
    env: &Env,
    amount_out: i128,
    amount_in_max: i128,
    path: Vec<Address>,
    to: Address,
    deadline: u64,
) -> Result<Vec<i128>, RouterError> {
    ensure_deadline(env, deadline)?;
    to.require_auth();

    let factory = factory(env)?;
    let amounts = get_amounts_in(env, &factory, amount_out, &path)?;
    let amount_in = amounts.first().ok_or(RouterError::InvalidPath)?;
    if amount_in > amount_in_max {
        return Err(RouterError::ExcessiveInputAmount);
    }

    pay_first_pair(env, &factory, &path, &to, amount_in)?;
    swap_along(env, &factory, &amounts, &path, &to)?;
    Ok(amounts)
}
