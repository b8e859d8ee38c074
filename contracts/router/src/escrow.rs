//! Escrowed swaps.
//!
//! A swap moves through `initiate -> confirm | cancel`. Initiation pulls the
//! input into router custody and snapshots a quote; nothing touches the
//! pair until confirmation. Both terminal transitions mark the record
//! inactive before any token moves, so a record can settle at most once.

use escrowswap_math::quote_swap_output;
use soroban_sdk::{token::TokenClient, Address, Env};

use crate::{
    errors::RouterError,
    events::RouterEvents,
    helpers::{factory, get_pair_address, get_reserves, pair_outputs, sort_tokens, PairClient},
    storage::{next_swap_id, read_swap, write_swap, PendingSwap},
};

fn load_active(env: &Env, swap_id: u64) -> Result<PendingSwap, RouterError> {
    let swap = read_swap(env, swap_id).ok_or(RouterError::SwapNotFound)?;
    if !swap.active {
        return Err(RouterError::SwapNotActive);
    }
    Ok(swap)
}

pub fn initiate(
    env: &Env,
    depositor: Address,
    token_in: Address,
    token_out: Address,
    amount_in: i128,
    min_amount_out: i128,
    recipient: Option<Address>,
) -> Result<u64, RouterError> {
    if amount_in <= 0 {
        return Err(RouterError::InsufficientInput);
    }
    sort_tokens(&token_in, &token_out)?;
    depositor.require_auth();

    let factory = factory(env)?;
    let pair = get_pair_address(env, &factory, &token_in, &token_out)?;

    // Escrow what actually arrives; a taxed token delivers less than sent.
    let this = env.current_contract_address();
    let token = TokenClient::new(env, &token_in);
    let before = token.balance(&this);
    token.transfer(&depositor, &this, &amount_in);
    let escrowed = token.balance(&this) - before;

    let (reserve_in, reserve_out) = get_reserves(env, &pair, &token_in, &token_out)?;
    let fee_bps = PairClient::new(env, &pair).get_current_fee_bps();
    let quoted_amount_out = quote_swap_output(env, escrowed, reserve_in, reserve_out, fee_bps)?;
    if quoted_amount_out <= 0 {
        return Err(RouterError::InsufficientOutputAmount);
    }
    if quoted_amount_out < min_amount_out {
        return Err(RouterError::SlippageExceeded);
    }

    let swap = PendingSwap {
        id: next_swap_id(env),
        recipient: recipient.unwrap_or_else(|| depositor.clone()),
        depositor,
        token_in,
        token_out,
        amount_in: escrowed,
        min_amount_out,
        quoted_amount_out,
        active: true,
        confirmed: false,
    };
    write_swap(env, &swap);
    RouterEvents::swap_initiated(env, &swap);

    Ok(swap.id)
}

/// Settles a pending swap against current reserves. Returns the amount paid
/// to the recipient.
pub fn confirm(env: &Env, swap_id: u64) -> Result<i128, RouterError> {
    let mut swap = load_active(env, swap_id)?;
    swap.depositor.require_auth();

    swap.active = false;
    swap.confirmed = true;
    write_swap(env, &swap);

    let factory = factory(env)?;
    let pair = get_pair_address(env, &factory, &swap.token_in, &swap.token_out)?;
    let (reserve_in, reserve_out) = get_reserves(env, &pair, &swap.token_in, &swap.token_out)?;

    let token = TokenClient::new(env, &swap.token_in);
    token.transfer(&env.current_contract_address(), &pair, &swap.amount_in);
    let received = token.balance(&pair) - reserve_in;

    let pair_client = PairClient::new(env, &pair);
    let amount_out = quote_swap_output(
        env,
        received,
        reserve_in,
        reserve_out,
        pair_client.get_current_fee_bps(),
    )?;
    if amount_out < swap.min_amount_out {
        return Err(RouterError::SlippageExceeded);
    }
    if amount_out <= 0 {
        return Err(RouterError::InsufficientOutputAmount);
    }

    let (amount_0_out, amount_1_out) = pair_outputs(&swap.token_in, &swap.token_out, amount_out)?;
    pair_client.swap(&amount_0_out, &amount_1_out, &swap.recipient);

    RouterEvents::swap_confirmed(env, &swap, amount_out);
    Ok(amount_out)
}

/// Returns the escrowed input to the depositor.
pub fn cancel(env: &Env, swap_id: u64) -> Result<(), RouterError> {
    let mut swap = load_active(env, swap_id)?;
    swap.depositor.require_auth();

    swap.active = false;
    swap.confirmed = false;
    write_swap(env, &swap);

    TokenClient::new(env, &swap.token_in).transfer(
        &env.current_contract_address(),
        &swap.depositor,
        &swap.amount_in,
    );

    RouterEvents::swap_cancelled(env, &swap);
    Ok(())
}
