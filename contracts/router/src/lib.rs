#![no_std]

//! Router for liquidity, instant path swaps and escrowed swaps.
//!
//! Liquidity and instant swaps follow the usual constant-product router
//! shape: pull tokens from the caller into the pair, then invoke the pair.
//! Escrowed swaps split a trade into `initiate_swap` (input held by the
//! router, quote snapshotted) and a later `confirm_swap` or `cancel_swap`.

mod errors;
mod escrow;
mod events;
mod helpers;
mod liquidity;
mod path_swap;
mod storage;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

pub use errors::RouterError;
pub use storage::PendingSwap;

use escrowswap_math::quote_liquidity;
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};
use storage::{has_factory, read_swap, set_factory};

#[contract]
pub struct Router;

#[contractimpl]
impl Router {
    pub fn initialize(env: Env, factory: Address) -> Result<(), RouterError> {
        if has_factory(&env) {
            return Err(RouterError::AlreadyInitialized);
        }
        set_factory(&env, &factory);
        Ok(())
    }

    pub fn factory(env: Env) -> Result<Address, RouterError> {
        helpers::factory(&env)
    }

    // ---------- Liquidity ----------

    /// Deposits into the `token_a`/`token_b` pool, creating it on first use.
    /// `to` pays both tokens and receives the shares.
    #[allow(clippy::too_many_arguments)]
    pub fn add_liquidity(
        env: Env,
        token_a: Address,
        token_b: Address,
        amount_a_desired: i128,
        amount_b_desired: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        to: Address,
        deadline: u64,
    ) -> Result<(i128, i128, i128), RouterError> {
        liquidity::add_liquidity(
            &env,
            token_a,
            token_b,
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
            to,
            deadline,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn remove_liquidity(
        env: Env,
        token_a: Address,
        token_b: Address,
        liquidity: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        to: Address,
        deadline: u64,
    ) -> Result<(i128, i128), RouterError> {
        liquidity::remove_liquidity(
            &env,
            token_a,
            token_b,
            liquidity,
            amount_a_min,
            amount_b_min,
            to,
            deadline,
        )
    }

    // ---------- Escrowed swaps ----------

    /// Moves `amount_in` of `token_in` from `depositor` into escrow and
    /// records a pending swap. Output goes to `recipient`, or back to the
    /// depositor when `None`.
    pub fn initiate_swap(
        env: Env,
        depositor: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        min_amount_out: i128,
        recipient: Option<Address>,
    ) -> Result<u64, RouterError> {
        escrow::initiate(
            &env,
            depositor,
            token_in,
            token_out,
            amount_in,
            min_amount_out,
            recipient,
        )
    }

    pub fn confirm_swap(env: Env, swap_id: u64) -> Result<i128, RouterError> {
        escrow::confirm(&env, swap_id)
    }

    pub fn cancel_swap(env: Env, swap_id: u64) -> Result<(), RouterError> {
        escrow::cancel(&env, swap_id)
    }

    pub fn swap(env: Env, swap_id: u64) -> Result<PendingSwap, RouterError> {
        read_swap(&env, swap_id).ok_or(RouterError::SwapNotFound)
    }

    /// Number of swaps ever initiated; also the latest id.
    pub fn swap_count(env: Env) -> u64 {
        storage::swap_count(&env)
    }

    // ---------- Instant swaps ----------

    pub fn swap_exact_tokens_for_tokens(
        env: Env,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<i128>, RouterError> {
        path_swap::exact_tokens_for_tokens(&env, amount_in, amount_out_min, path, to, deadline)
    }

    pub fn swap_tokens_for_exact_tokens(
        env: Env,
        amount_out: i128,
        amount_in_max: i128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<i128>, RouterError> {
        path_swap::tokens_for_exact_tokens(&env, amount_out, amount_in_max, path, to, deadline)
    }

    // ---------- Quotes ----------

    pub fn get_amounts_out(
        env: Env,
        amount_in: i128,
        path: Vec<Address>,
    ) -> Result<Vec<i128>, RouterError> {
        let factory = helpers::factory(&env)?;
        helpers::get_amounts_out(&env, &factory, amount_in, &path)
    }

    pub fn get_amounts_in(
        env: Env,
        amount_out: i128,
        path: Vec<Address>,
    ) -> Result<Vec<i128>, RouterError> {
        let factory = helpers::factory(&env)?;
        helpers::get_amounts_in(&env, &factory, amount_out, &path)
    }

    pub fn quote(
        env: Env,
        amount_a: i128,
        reserve_a: i128,
        reserve_b: i128,
    ) -> Result<i128, RouterError> {
        Ok(quote_liquidity(&env, amount_a, reserve_a, reserve_b)?)
    }
}
