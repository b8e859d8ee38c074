use soroban_sdk::{contracttype, Address, BytesN, Env};

const DAY_IN_LEDGERS: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const PAIR_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PAIR_LIFETIME_THRESHOLD: u32 = PAIR_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug)]
pub struct FactoryStorage {
    pub pair_wasm_hash: BytesN<32>,
    pub lp_token_wasm_hash: BytesN<32>,
    pub pair_count: u32,
    pub fee_to: Option<Address>,
    pub fee_to_setter: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Factory,
    Pair(Address, Address),
    PairAt(u32),
}

pub fn get_factory_storage(env: &Env) -> Option<FactoryStorage> {
    env.storage().instance().get(&DataKey::Factory)
}

pub fn set_factory_storage(env: &Env, storage: &FactoryStorage) {
    env.storage().instance().set(&DataKey::Factory, storage);
    extend_instance_ttl(env);
}

pub fn has_factory_storage(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Factory)
}

pub fn get_pair(env: &Env, token_a: Address, token_b: Address) -> Option<Address> {
    let key = DataKey::Pair(token_a, token_b);
    let pair = env.storage().persistent().get(&key);
    if pair.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PAIR_LIFETIME_THRESHOLD, PAIR_BUMP_AMOUNT);
    }
    pair
}

pub fn set_pair(env: &Env, token_a: Address, token_b: Address, pair: &Address) {
    let key = DataKey::Pair(token_a, token_b);
    env.storage().persistent().set(&key, pair);
    env.storage()
        .persistent()
        .extend_ttl(&key, PAIR_LIFETIME_THRESHOLD, PAIR_BUMP_AMOUNT);
}

pub fn get_pair_at(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::PairAt(index))
}

pub fn push_pair(env: &Env, index: u32, pair: &Address) {
    let key = DataKey::PairAt(index);
    env.storage().persistent().set(&key, pair);
    env.storage()
        .persistent()
        .extend_ttl(&key, PAIR_LIFETIME_THRESHOLD, PAIR_BUMP_AMOUNT);
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
