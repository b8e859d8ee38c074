#![no_std]

//! Deflating token used to exercise fee-on-transfer handling.
//!
//! Every transfer debits the nominal amount from the sender, burns
//! `tax_bps` of it, and credits the remainder to the receiver.

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, Address, Env, String,
};

#[cfg(test)]
extern crate std;


const BPS_DENOMINATOR: i128 = 10_000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TaxTokenError {
    AlreadyInitialized = 500,
    NotInitialized = 501,
    InsufficientBalance = 502,
    InsufficientAllowance = 503,
    NegativeAmount = 504,
    ArithmeticOverflow = 505,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    TaxBps,
    TotalSupply,
    Balance(Address),
    Allowance(Address, Address),
}

fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::Balance(id.clone()), &amount);
}

fn read_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

fn tax_on(env: &Env, amount: i128) -> Result<i128, TaxTokenError> {
    let tax_bps: u32 = env
        .storage()
        .instance()
        .get(&DataKey::TaxBps)
        .ok_or(TaxTokenError::NotInitialized)?;
    amount
        .checked_mul(tax_bps as i128)
        .map(|v| v / BPS_DENOMINATOR)
        .ok_or(TaxTokenError::ArithmeticOverflow)
}

fn move_taxed(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TaxTokenError> {
    if amount < 0 {
        return Err(TaxTokenError::NegativeAmount);
    }
    let from_balance = read_balance(env, from);
    if from_balance < amount {
        return Err(TaxTokenError::InsufficientBalance);
    }
    let tax = tax_on(env, amount)?;

    write_balance(env, from, from_balance - amount);
    write_balance(env, to, read_balance(env, to) + amount - tax);
    env.storage()
        .instance()
        .set(&DataKey::TotalSupply, &(read_total_supply(env) - tax));
    Ok(())
}

#[contract]
pub struct MockTaxToken;

#[contractimpl]
impl MockTaxToken {
    pub fn initialize(env: Env, admin: Address, tax_bps: u32) -> Result<(), TaxTokenError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(TaxTokenError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::TaxBps, &tax_bps);
        Ok(())
    }

    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), TaxTokenError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(TaxTokenError::NotInitialized)?;
        admin.require_auth();
        if amount < 0 {
            return Err(TaxTokenError::NegativeAmount);
        }
        write_balance(&env, &to, read_balance(&env, &to) + amount);
        env.storage()
            .instance()
            .set(&DataKey::TotalSupply, &(read_total_supply(&env) + amount));
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TaxTokenError> {
        from.require_auth();
        move_taxed(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TaxTokenError> {
        spender.require_auth();
        let key = DataKey::Allowance(from.clone(), spender);
        let allowance: i128 = env.storage().instance().get(&key).unwrap_or(0);
        if allowance < amount {
            return Err(TaxTokenError::InsufficientAllowance);
        }
        env.storage().instance().set(&key, &(allowance - amount));
        move_taxed(&env, &from, &to, amount)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        _expiration_ledger: u32,
    ) -> Result<(), TaxTokenError> {
        from.require_auth();
        if amount < 0 {
            return Err(TaxTokenError::NegativeAmount);
        }
        env.storage()
            .instance()
            .set(&DataKey::Allowance(from, spender), &amount);
        Ok(())
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::Allowance(from, spender))
            .unwrap_or(0)
    }

    pub fn tax_bps(env: Env) -> u32 {
        env.storage().instance().get(&DataKey::TaxBps).unwrap_or(0)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn decimals(_env: Env) -> u32 {
        7
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, "Deflating Token")
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, "DEFL")
    }
}
