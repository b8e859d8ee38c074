#![cfg_attr(not(test), no_std)]

//! Pair registry.
//!
//! Deploys one pair (plus its LP token) per unordered token pair at a
//! deterministic address, keeps the pair list enumerable, and holds the
//! protocol-fee recipient that every pair consults.

#[cfg(test)]
extern crate std;

mod errors;
mod events;
mod storage;

#[cfg(test)]
mod test;

pub use errors::FactoryError;

use events::FactoryEvents;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{
    contract, contractclient, contractimpl, Address, Bytes, BytesN, Env, String,
};
use storage::FactoryStorage;

const LP_TOKEN_DECIMALS: u32 = 7;
const LP_TOKEN_NAME: &str = "EscrowSwap LP";
const LP_TOKEN_SYMBOL: &str = "ESLP";

#[contractclient(name = "PairClient")]
pub trait PairInterface {
    fn initialize(
        env: Env,
        factory: Address,
        token_a: Address,
        token_b: Address,
        lp_token: Address,
    );
}

#[contractclient(name = "LpTokenClient")]
pub trait LpTokenInterface {
    fn initialize(env: Env, admin: Address, decimals: u32, name: String, symbol: String);
}

fn sort_tokens(token_a: Address, token_b: Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    }
}

fn load(env: &Env) -> Result<FactoryStorage, FactoryError> {
    storage::get_factory_storage(env).ok_or(FactoryError::NotInitialized)
}

#[contract]
pub struct Factory;

#[contractimpl]
impl Factory {
    pub fn initialize(
        env: Env,
        fee_to_setter: Address,
        pair_wasm_hash: BytesN<32>,
        lp_token_wasm_hash: BytesN<32>,
    ) -> Result<(), FactoryError> {
        if storage::has_factory_storage(&env) {
            return Err(FactoryError::AlreadyInitialized);
        }

        storage::set_factory_storage(
            &env,
            &FactoryStorage {
                pair_wasm_hash,
                lp_token_wasm_hash,
                pair_count: 0,
                fee_to: None,
                fee_to_setter,
            },
        );
        Ok(())
    }

    /// Deploys and initializes the pair for `token_a`/`token_b` together
    /// with its LP token. Either argument order yields the same pair.
    pub fn create_pair(
        env: Env,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address, FactoryError> {
        if token_a == token_b {
            return Err(FactoryError::IdenticalTokens);
        }
        let (token_0, token_1) = sort_tokens(token_a, token_b);

        let mut factory_storage = load(&env)?;
        if storage::get_pair(&env, token_0.clone(), token_1.clone()).is_some() {
            return Err(FactoryError::PairExists);
        }

        // 1. Deploy pair, salted by the sorted token addresses
        let mut salt_data = Bytes::new(&env);
        salt_data.append(&token_0.clone().to_xdr(&env));
        salt_data.append(&token_1.clone().to_xdr(&env));
        let salt = env.crypto().sha256(&salt_data);

        let pair_address = env
            .deployer()
            .with_current_contract(salt)
            .deploy(factory_storage.pair_wasm_hash.clone());

        // 2. Deploy LP token, salted by the pair address
        let mut lp_salt_data = Bytes::new(&env);
        lp_salt_data.append(&pair_address.clone().to_xdr(&env));
        let lp_salt = env.crypto().sha256(&lp_salt_data);

        let lp_token_address = env
            .deployer()
            .with_current_contract(lp_salt)
            .deploy(factory_storage.lp_token_wasm_hash.clone());

        // 3. Wire them together; the pair administers its share token
        LpTokenClient::new(&env, &lp_token_address).initialize(
            &pair_address,
            &LP_TOKEN_DECIMALS,
            &String::from_str(&env, LP_TOKEN_NAME),
            &String::from_str(&env, LP_TOKEN_SYMBOL),
        );
        PairClient::new(&env, &pair_address).initialize(
            &env.current_contract_address(),
            &token_0,
            &token_1,
            &lp_token_address,
        );

        // 4. Register under both orderings and append to the list
        storage::set_pair(&env, token_0.clone(), token_1.clone(), &pair_address);
        storage::set_pair(&env, token_1.clone(), token_0.clone(), &pair_address);

        let pair_index = factory_storage.pair_count;
        storage::push_pair(&env, pair_index, &pair_address);
        factory_storage.pair_count += 1;
        storage::set_factory_storage(&env, &factory_storage);

        FactoryEvents::pair_created(&env, &token_0, &token_1, &pair_address, pair_index);

        Ok(pair_address)
    }

    pub fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address> {
        storage::get_pair(&env, token_a, token_b)
    }

    /// Pair created `index`-th, starting from 0.
    pub fn all_pairs(env: Env, index: u32) -> Option<Address> {
        storage::get_pair_at(&env, index)
    }

    pub fn all_pairs_length(env: Env) -> u32 {
        storage::get_factory_storage(&env)
            .map(|s| s.pair_count)
            .unwrap_or(0)
    }

    /// Recipient of protocol-fee shares; `None` turns the fee off.
    pub fn fee_to(env: Env) -> Option<Address> {
        storage::get_factory_storage(&env).and_then(|s| s.fee_to)
    }

    pub fn fee_to_setter(env: Env) -> Result<Address, FactoryError> {
        Ok(load(&env)?.fee_to_setter)
    }

    pub fn set_fee_to(
        env: Env,
        caller: Address,
        fee_to: Option<Address>,
    ) -> Result<(), FactoryError> {
        caller.require_auth();
        let mut factory_storage = load(&env)?;
        if caller != factory_storage.fee_to_setter {
            return Err(FactoryError::Unauthorized);
        }

        factory_storage.fee_to = fee_to;
        storage::set_factory_storage(&env, &factory_storage);
        FactoryEvents::fee_to_changed(&env, &factory_storage.fee_to);
        Ok(())
    }

    pub fn set_fee_to_setter(
        env: Env,
        caller: Address,
        new_setter: Address,
    ) -> Result<(), FactoryError> {
        caller.require_auth();
        let mut factory_storage = load(&env)?;
        if caller != factory_storage.fee_to_setter {
            return Err(FactoryError::Unauthorized);
        }

        factory_storage.fee_to_setter = new_setter;
        storage::set_factory_storage(&env, &factory_storage);
        FactoryEvents::fee_to_setter_changed(&env, &factory_storage.fee_to_setter);
        Ok(())
    }
}
