use escrowswap_math::{quote_swap_input, quote_swap_output};
use soroban_sdk::{contractclient, Address, Env, Vec};

use crate::{errors::RouterError, storage::get_factory};

#[contractclient(name = "FactoryClient")]
pub trait FactoryInterface {
    fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address>;
    fn create_pair(env: Env, token_a: Address, token_b: Address) -> Address;
}

#[contractclient(name = "PairClient")]
pub trait PairInterface {
    fn mint(env: Env, to: Address) -> i128;
    fn burn(env: Env, to: Address) -> (i128, i128);
    fn lp_token(env: Env) -> Address;
    fn swap(env: Env, amount_0_out: i128, amount_1_out: i128, to: Address);
    fn get_reserves(env: Env) -> (i128, i128, u64);
    fn get_current_fee_bps(env: Env) -> u32;
}

pub fn ensure_deadline(env: &Env, deadline: u64) -> Result<(), RouterError> {
    if env.ledger().timestamp() > deadline {
        return Err(RouterError::Expired);
    }
    Ok(())
}

pub fn factory(env: &Env) -> Result<Address, RouterError> {
    get_factory(env).ok_or(RouterError::NotInitialized)
}

/// Sorts token addresses into canonical order.
///
/// Returns `(token_0, token_1)` with `token_0 < token_1`, the order the
/// pair stores its reserves in.
pub fn sort_tokens(token_a: &Address, token_b: &Address) -> Result<(Address, Address), RouterError> {
    if token_a == token_b {
        return Err(RouterError::IdenticalTokens);
    }
    if token_a < token_b {
        Ok((token_a.clone(), token_b.clone()))
    } else {
        Ok((token_b.clone(), token_a.clone()))
    }
}

/// Get the pair address from the factory contract
pub fn get_pair_address(
    env: &Env,
    factory: &Address,
    token_a: &Address,
    token_b: &Address,
) -> Result<Address, RouterError> {
    let factory_client = FactoryClient::new(env, factory);
    factory_client
        .get_pair(token_a, token_b)
        .ok_or(RouterError::PairNotFound)
}

/// Reserves of `pair` ordered as `(reserve_a, reserve_b)`.
pub fn get_reserves(
    env: &Env,
    pair: &Address,
    token_a: &Address,
    token_b: &Address,
) -> Result<(i128, i128), RouterError> {
    let (token_0, _) = sort_tokens(token_a, token_b)?;
    let (reserve_0, reserve_1, _) = PairClient::new(env, pair).get_reserves();
    if *token_a == token_0 {
        Ok((reserve_0, reserve_1))
    } else {
        Ok((reserve_1, reserve_0))
    }
}

/// `(amount_0_out, amount_1_out)` for a swap that sells `token_in` and pays
/// `amount_out` of the other token.
pub fn pair_outputs(
    token_in: &Address,
    token_out: &Address,
    amount_out: i128,
) -> Result<(i128, i128), RouterError> {
    let (token_0, _) = sort_tokens(token_in, token_out)?;
    if *token_in == token_0 {
        Ok((0, amount_out))
    } else {
        Ok((amount_out, 0))
    }
}

fn check_path(path: &Vec<Address>) -> Result<(), RouterError> {
    if path.len() < 2 {
        return Err(RouterError::InvalidPath);
    }
    Ok(())
}

/// Chained exact-input quotes along `path`; element `i` is the amount of
/// `path[i]` moved.
pub fn get_amounts_out(
    env: &Env,
    factory: &Address,
    amount_in: i128,
    path: &Vec<Address>,
) -> Result<Vec<i128>, RouterError> {
    check_path(path)?;
    let mut amounts = Vec::new(env);
    amounts.push_back(amount_in);

    let mut amount = amount_in;
    for i in 0..path.len() - 1 {
        let token_in = path.get(i).ok_or(RouterError::InvalidPath)?;
        let token_out = path.get(i + 1).ok_or(RouterError::InvalidPath)?;
        let pair = get_pair_address(env, factory, &token_in, &token_out)?;
        let (reserve_in, reserve_out) = get_reserves(env, &pair, &token_in, &token_out)?;
        let fee_bps = PairClient::new(env, &pair).get_current_fee_bps();

        amount = quote_swap_output(env, amount, reserve_in, reserve_out, fee_bps)?;
        if amount <= 0 {
            return Err(RouterError::InsufficientOutputAmount);
        }
        amounts.push_back(amount);
    }
    Ok(amounts)
}

/// Chained exact-output quotes along `path`, walked backwards from the
/// last hop.
pub fn get_amounts_in(
    env: &Env,
    factory: &Address,
    amount_out: i128,
    path: &Vec<Address>,
) -> Result<Vec<i128>, RouterError> {
    check_path(path)?;
    let mut amounts = Vec::new(env);
    amounts.push_front(amount_out);

    let mut amount = amount_out;
    for i in (1..path.len()).rev() {
        let token_in = path.get(i - 1).ok_or(RouterError::InvalidPath)?;
        let token_out = path.get(i).ok_or(RouterError::InvalidPath)?;
        let pair = get_pair_address(env, factory, &token_in, &token_out)?;
        let (reserve_in, reserve_out) = get_reserves(env, &pair, &token_in, &token_out)?;
        let fee_bps = PairClient::new(env, &pair).get_current_fee_bps();

        amount = quote_swap_input(env, amount, reserve_in, reserve_out, fee_bps)?;
        amounts.push_front(amount);
    }
    Ok(amounts)
}
