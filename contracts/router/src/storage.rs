use soroban_sdk::{contracttype, Address, Env};

const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const SWAP_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const SWAP_LIFETIME_THRESHOLD: u32 = SWAP_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
pub enum DataKey {
    Factory,
    SwapCount,
    Swap(u64),
}

/// An escrowed swap.
///
/// `active` is true only while pending. Confirmation and cancellation both
/// clear it and are told apart by `confirmed`. Records are never deleted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingSwap {
    pub id: u64,
    pub depositor: Address,
    pub recipient: Address,
    pub token_in: Address,
    pub token_out: Address,
    /// Amount the router actually holds in escrow.
    pub amount_in: i128,
    pub min_amount_out: i128,
    /// Output quoted against the reserves at initiation.
    pub quoted_amount_out: i128,
    pub active: bool,
    pub confirmed: bool,
}

pub fn set_factory(env: &Env, factory: &Address) {
    env.storage().instance().set(&DataKey::Factory, factory);
    extend_instance_ttl(env);
}

pub fn get_factory(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Factory)
}

pub fn has_factory(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Factory)
}

pub fn swap_count(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::SwapCount).unwrap_or(0)
}

/// Hands out the next swap id. Ids start at 1 and are never reused.
pub fn next_swap_id(env: &Env) -> u64 {
    let id = swap_count(env) + 1;
    env.storage().instance().set(&DataKey::SwapCount, &id);
    extend_instance_ttl(env);
    id
}

pub fn read_swap(env: &Env, id: u64) -> Option<PendingSwap> {
    let key = DataKey::Swap(id);
    let swap = env.storage().persistent().get(&key);
    if swap.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, SWAP_LIFETIME_THRESHOLD, SWAP_BUMP_AMOUNT);
    }
    swap
}

pub fn write_swap(env: &Env, swap: &PendingSwap) {
    let key = DataKey::Swap(swap.id);
    env.storage().persistent().set(&key, swap);
    env.storage()
        .persistent()
        .extend_ttl(&key, SWAP_LIFETIME_THRESHOLD, SWAP_BUMP_AMOUNT);
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
