#![no_std]

//! Constant-product pair.
//!
//! Holds the two reserves of one canonical token pair and exposes the
//! low-level `mint` / `burn` / `swap` primitives. Each primitive measures
//! what it was actually given by comparing live token balances against the
//! cached reserves, so callers transfer tokens (or shares) in first and then
//! invoke the pair. Nothing here trusts a nominal amount, which keeps
//! fee-on-transfer tokens from inflating reserves.

mod clients;
mod errors;
mod events;
mod oracle;
mod protocol_fee;
mod reentrancy;
mod storage;

#[cfg(test)]
extern crate std; // soroban-sdk testutils require std; pair is no_std so we must opt-in explicitly.

#[cfg(test)]
mod test;

pub use errors::PairError;

use clients::LpTokenClient;
use escrowswap_math::{
    checked_mul, minted_shares, product, withdrawn_amount, BPS_DENOMINATOR, FEE_BPS,
    MINIMUM_LIQUIDITY,
};
use events::PairEvents;
use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env, String, U256};
use storage::{get_pair_state, set_pair_state, PairStorage};

/// The all-zero Stellar account. Nobody can sign for it, so shares minted
/// here are locked for good.
const LOCKED_LIQUIDITY_HOLDER: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

fn load_state(env: &Env) -> Result<PairStorage, PairError> {
    get_pair_state(env).ok_or(PairError::NotInitialized)
}

fn balances(env: &Env, state: &PairStorage) -> (i128, i128) {
    let this = env.current_contract_address();
    (
        TokenClient::new(env, &state.token_0).balance(&this),
        TokenClient::new(env, &state.token_1).balance(&this),
    )
}

/// Portion of `balance` that arrived on top of what the pair expected to
/// hold after paying out `amount_out`.
fn amount_received(balance: i128, reserve: i128, amount_out: i128) -> i128 {
    let expected = reserve - amount_out;
    if balance > expected {
        balance - expected
    } else {
        0
    }
}

/// `balance * 10000 - amount_in * fee_bps` in `U256`: the balance with the
/// swap fee on this side's input set aside.
fn fee_adjusted_balance(env: &Env, balance: i128, amount_in: i128) -> Result<U256, PairError> {
    let gross = product(env, balance, BPS_DENOMINATOR)?;
    let fee = product(env, amount_in, FEE_BPS as i128)?;
    if fee > gross {
        return Err(PairError::InvariantViolation);
    }
    Ok(gross.sub(&fee))
}

/// Fails with `InvariantViolation` unless the fee-adjusted post-trade
/// product is at least the pre-trade product.
fn check_invariant(
    env: &Env,
    state: &PairStorage,
    balance_0: i128,
    balance_1: i128,
    amount_0_in: i128,
    amount_1_in: i128,
) -> Result<(), PairError> {
    let adjusted_0 = fee_adjusted_balance(env, balance_0, amount_0_in)?;
    let adjusted_1 = fee_adjusted_balance(env, balance_1, amount_1_in)?;

    let scale = U256::from_u128(env, (BPS_DENOMINATOR * BPS_DENOMINATOR) as u128);
    let k_before = checked_mul(env, &product(env, state.reserve_0, state.reserve_1)?, &scale)?;
    let k_after = checked_mul(env, &adjusted_0, &adjusted_1)?;
    if k_after < k_before {
        return Err(PairError::InvariantViolation);
    }
    Ok(())
}

/// Writes new reserves and advances the price oracle. Callers only reach
/// this after every check of the operation has passed.
fn update(env: &Env, state: &mut PairStorage, balance_0: i128, balance_1: i128) {
    let now = env.ledger().timestamp();
    let elapsed = now.saturating_sub(state.block_timestamp_last);
    oracle::update_cumulative_prices(
        env,
        state.reserve_0,
        state.reserve_1,
        elapsed,
        &mut state.price_0_cumulative_last,
        &mut state.price_1_cumulative_last,
    );

    state.reserve_0 = balance_0;
    state.reserve_1 = balance_1;
    state.block_timestamp_last = now;
    PairEvents::sync(env, balance_0, balance_1);
}

#[contract]
pub struct Pair;

#[contractimpl]
impl Pair {
    /// Called once by the factory right after deployment. Tokens are stored
    /// in ascending address order regardless of argument order.
    pub fn initialize(
        env: Env,
        factory: Address,
        token_a: Address,
        token_b: Address,
        lp_token: Address,
    ) -> Result<(), PairError> {
        if get_pair_state(&env).is_some() {
            return Err(PairError::AlreadyInitialized);
        }
        if token_a == token_b {
            return Err(PairError::IdenticalTokens);
        }
        factory.require_auth();

        let (token_0, token_1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        set_pair_state(
            &env,
            &PairStorage {
                factory,
                token_0,
                token_1,
                lp_token,
                reserve_0: 0,
                reserve_1: 0,
                block_timestamp_last: 0,
                price_0_cumulative_last: 0,
                price_1_cumulative_last: 0,
                k_last: U256::from_u32(&env, 0),
            },
        );
        Ok(())
    }

    /// Mints shares to `to` for whatever the pair holds above its reserves.
    pub fn mint(env: Env, to: Address) -> Result<i128, PairError> {
        let mut state = load_state(&env)?;
        reentrancy::acquire(&env)?;

        let (balance_0, balance_1) = balances(&env, &state);
        let amount_0 = balance_0
            .checked_sub(state.reserve_0)
            .ok_or(PairError::ArithmeticOverflow)?;
        let amount_1 = balance_1
            .checked_sub(state.reserve_1)
            .ok_or(PairError::ArithmeticOverflow)?;

        let lp = LpTokenClient::new(&env, &state.lp_token);
        let fee_on = protocol_fee::mint_fee(&env, &mut state, &lp)?;
        let total_shares = lp.total_supply();

        let shares = minted_shares(
            &env,
            amount_0,
            amount_1,
            state.reserve_0,
            state.reserve_1,
            total_shares,
        )?;
        if shares <= 0 {
            return Err(PairError::InsufficientLiquidityMinted);
        }

        if total_shares == 0 {
            let holder = Address::from_string(&String::from_str(&env, LOCKED_LIQUIDITY_HOLDER));
            lp.mint(&holder, &MINIMUM_LIQUIDITY);
        }
        lp.mint(&to, &shares);

        update(&env, &mut state, balance_0, balance_1);
        if fee_on {
            state.k_last = product(&env, state.reserve_0, state.reserve_1)?;
        }
        set_pair_state(&env, &state);
        reentrancy::release(&env);

        PairEvents::mint(&env, &to, amount_0, amount_1, shares);
        Ok(shares)
    }

    /// Burns every share the pair itself holds and pays the pro-rata
    /// amounts of both tokens to `to`.
    pub fn burn(env: Env, to: Address) -> Result<(i128, i128), PairError> {
        let mut state = load_state(&env)?;
        reentrancy::acquire(&env)?;

        let this = env.current_contract_address();
        let (balance_0, balance_1) = balances(&env, &state);
        let lp = LpTokenClient::new(&env, &state.lp_token);
        let shares = lp.balance(&this);

        let fee_on = protocol_fee::mint_fee(&env, &mut state, &lp)?;
        let total_shares = lp.total_supply();

        let amount_0 = withdrawn_amount(&env, shares, balance_0, total_shares)?;
        let amount_1 = withdrawn_amount(&env, shares, balance_1, total_shares)?;
        if amount_0 <= 0 || amount_1 <= 0 {
            return Err(PairError::InsufficientLiquidityBurned);
        }

        lp.burn(&this, &shares);
        TokenClient::new(&env, &state.token_0).transfer(&this, &to, &amount_0);
        TokenClient::new(&env, &state.token_1).transfer(&this, &to, &amount_1);

        let (balance_0, balance_1) = balances(&env, &state);
        update(&env, &mut state, balance_0, balance_1);
        if fee_on {
            state.k_last = product(&env, state.reserve_0, state.reserve_1)?;
        }
        set_pair_state(&env, &state);
        reentrancy::release(&env);

        PairEvents::burn(&env, &to, amount_0, amount_1, shares);
        Ok((amount_0, amount_1))
    }

    /// Pays out the requested amounts to `to`, then requires that whatever
    /// input the pair has received keeps the fee-adjusted invariant.
    ///
    /// The outputs leave before the input is measured, so a caller may fund
    /// the input from the proceeds. Reserves are only written once the
    /// invariant holds.
    pub fn swap(
        env: Env,
        amount_0_out: i128,
        amount_1_out: i128,
        to: Address,
    ) -> Result<(), PairError> {
        if amount_0_out < 0 || amount_1_out < 0 || (amount_0_out == 0 && amount_1_out == 0) {
            return Err(PairError::InsufficientOutputAmount);
        }

        let mut state = load_state(&env)?;
        if amount_0_out >= state.reserve_0 || amount_1_out >= state.reserve_1 {
            return Err(PairError::InsufficientLiquidity);
        }
        if to == state.token_0 || to == state.token_1 {
            return Err(PairError::InvalidTo);
        }

        reentrancy::acquire(&env)?;

        let this = env.current_contract_address();
        if amount_0_out > 0 {
            TokenClient::new(&env, &state.token_0).transfer(&this, &to, &amount_0_out);
        }
        if amount_1_out > 0 {
            TokenClient::new(&env, &state.token_1).transfer(&this, &to, &amount_1_out);
        }

        let (balance_0, balance_1) = balances(&env, &state);
        let amount_0_in = amount_received(balance_0, state.reserve_0, amount_0_out);
        let amount_1_in = amount_received(balance_1, state.reserve_1, amount_1_out);
        if amount_0_in == 0 && amount_1_in == 0 {
            return Err(PairError::InsufficientInput);
        }

        check_invariant(&env, &state, balance_0, balance_1, amount_0_in, amount_1_in)?;

        update(&env, &mut state, balance_0, balance_1);
        set_pair_state(&env, &state);
        reentrancy::release(&env);

        PairEvents::swap(
            &env,
            &to,
            amount_0_in,
            amount_1_in,
            amount_0_out,
            amount_1_out,
            FEE_BPS,
        );
        Ok(())
    }

    /// Sends any balance above the reserves to `to`.
    pub fn skim(env: Env, to: Address) -> Result<(), PairError> {
        let state = load_state(&env)?;
        reentrancy::acquire(&env)?;

        let this = env.current_contract_address();
        let (balance_0, balance_1) = balances(&env, &state);
        if balance_0 > state.reserve_0 {
            TokenClient::new(&env, &state.token_0).transfer(&this, &to, &(balance_0 - state.reserve_0));
        }
        if balance_1 > state.reserve_1 {
            TokenClient::new(&env, &state.token_1).transfer(&this, &to, &(balance_1 - state.reserve_1));
        }

        reentrancy::release(&env);
        Ok(())
    }

    /// Forces reserves to match actual balances.
    pub fn sync(env: Env) -> Result<(), PairError> {
        let mut state = load_state(&env)?;
        reentrancy::acquire(&env)?;

        let (balance_0, balance_1) = balances(&env, &state);
        update(&env, &mut state, balance_0, balance_1);
        set_pair_state(&env, &state);

        reentrancy::release(&env);
        Ok(())
    }

    pub fn get_reserves(env: Env) -> Result<(i128, i128, u64), PairError> {
        let state = load_state(&env)?;
        Ok((state.reserve_0, state.reserve_1, state.block_timestamp_last))
    }

    pub fn price_cumulative_last(env: Env) -> Result<(i128, i128), PairError> {
        let state = load_state(&env)?;
        Ok((state.price_0_cumulative_last, state.price_1_cumulative_last))
    }

    pub fn k_last(env: Env) -> Result<U256, PairError> {
        Ok(load_state(&env)?.k_last)
    }

    pub fn token_0(env: Env) -> Result<Address, PairError> {
        Ok(load_state(&env)?.token_0)
    }

    pub fn token_1(env: Env) -> Result<Address, PairError> {
        Ok(load_state(&env)?.token_1)
    }

    pub fn factory(env: Env) -> Result<Address, PairError> {
        Ok(load_state(&env)?.factory)
    }

    pub fn lp_token(env: Env) -> Result<Address, PairError> {
        Ok(load_state(&env)?.lp_token)
    }

    pub fn get_current_fee_bps(_env: Env) -> u32 {
        FEE_BPS
    }

    pub fn minimum_liquidity(_env: Env) -> i128 {
        MINIMUM_LIQUIDITY
    }
}
