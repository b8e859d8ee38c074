use soroban_sdk::{contracttype, Address, Env};

use crate::errors::LpTokenError;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 60 * DAY_IN_LEDGERS;
pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Default)]
pub struct AllowanceEntry {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
pub enum LpTokenKey {
    Balance(Address),
    Allowance(Address, Address),
    TotalSupply,
    Admin,
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&LpTokenKey::Admin)
}

pub fn read_admin(env: &Env) -> Result<Address, LpTokenError> {
    env.storage()
        .instance()
        .get(&LpTokenKey::Admin)
        .ok_or(LpTokenError::NotInitialized)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&LpTokenKey::Admin, admin);
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&LpTokenKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&LpTokenKey::TotalSupply, &supply);
}

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = LpTokenKey::Balance(id.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            env.storage().persistent().extend_ttl(
                &key,
                BALANCE_LIFETIME_THRESHOLD,
                BALANCE_BUMP_AMOUNT,
            );
            balance
        }
        None => 0,
    }
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = LpTokenKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(env: &Env, id: &Address, amount: i128) -> Result<(), LpTokenError> {
    let balance = read_balance(env, id)
        .checked_add(amount)
        .ok_or(LpTokenError::ArithmeticOverflow)?;
    write_balance(env, id, balance);
    Ok(())
}

pub fn spend_balance(env: &Env, id: &Address, amount: i128) -> Result<(), LpTokenError> {
    let balance = read_balance(env, id);
    if balance < amount {
        return Err(LpTokenError::InsufficientBalance);
    }
    write_balance(env, id, balance - amount);
    Ok(())
}

/// Reads an allowance; an expired entry reads as zero.
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceEntry {
    let key = LpTokenKey::Allowance(from.clone(), spender.clone());
    match env.storage().temporary().get::<_, AllowanceEntry>(&key) {
        Some(entry) if entry.expiration_ledger >= env.ledger().sequence() => entry,
        Some(entry) => AllowanceEntry {
            amount: 0,
            expiration_ledger: entry.expiration_ledger,
        },
        None => AllowanceEntry::default(),
    }
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), LpTokenError> {
    let current = env.ledger().sequence();
    if amount > 0 && expiration_ledger < current {
        return Err(LpTokenError::InvalidExpiration);
    }

    let key = LpTokenKey::Allowance(from.clone(), spender.clone());
    env.storage().temporary().set(
        &key,
        &AllowanceEntry {
            amount,
            expiration_ledger,
        },
    );

    if amount > 0 {
        let live_for = expiration_ledger - current;
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), LpTokenError> {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(LpTokenError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }
    Ok(())
}
