#![cfg(test)]

// ---------------------------------------------------------------------------
// Router test suite
//
// Pairs and LP tokens are registered natively and handed to a stub registry
// that answers `get_pair` / `create_pair` / `fee_to` the way the factory
// does. `stage_pair` prepares the pair that the next `create_pair` for that
// token pair will return.
// ---------------------------------------------------------------------------


use escrowswap_lp_token::{LpToken, LpTokenClient};
use escrowswap_mock_tax_token::{MockTaxToken, MockTaxTokenClient};
use escrowswap_pair::{Pair, PairClient};
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Ledger as _},
    token::{StellarAssetClient, TokenClient},
    Address, Env, String,
};

use crate::{Router, RouterClient};

/// 1 token at 7 decimals.
pub const S: i128 = 10_000_000;

#[contracttype]
enum RegistryKey {
    Pair(Address, Address),
    Staged(Address, Address),
}

#[contract]
pub struct MockRegistry;

#[contractimpl]
impl MockRegistry {
    pub fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address> {
        env.storage()
            .instance()
            .get(&RegistryKey::Pair(token_a, token_b))
    }

    pub fn create_pair(env: Env, token_a: Address, token_b: Address) -> Address {
        let pair: Address = env
            .storage()
            .instance()
            .get(&RegistryKey::Staged(token_a.clone(), token_b.clone()))
            .expect("no pair staged for these tokens");
        Self::register(env, token_a, token_b, pair.clone());
        pair
    }

    pub fn register(env: Env, token_a: Address, token_b: Address, pair: Address) {
        let storage = env.storage().instance();
        storage.set(&RegistryKey::Pair(token_a.clone(), token_b.clone()), &pair);
        storage.set(&RegistryKey::Pair(token_b, token_a), &pair);
    }

    pub fn stage_pair(env: Env, token_a: Address, token_b: Address, pair: Address) {
        let storage = env.storage().instance();
        storage.set(&RegistryKey::Staged(token_a.clone(), token_b.clone()), &pair);
        storage.set(&RegistryKey::Staged(token_b, token_a), &pair);
    }

    pub fn fee_to(_env: Env) -> Option<Address> {
        None
    }
}

pub struct RouterTest {
    pub env: Env,
    pub router: RouterClient<'static>,
    pub registry: MockRegistryClient<'static>,
    pub user: Address,
}

impl RouterTest {
    pub fn setup() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.budget().reset_unlimited();
        env.ledger().set_timestamp(1_000);

        let registry = MockRegistryClient::new(&env, &env.register_contract(None, MockRegistry));
        let router = RouterClient::new(&env, &env.register_contract(None, Router));
        router.initialize(&registry.address);
        let user = Address::generate(&env);

        RouterTest {
            env,
            router,
            registry,
            user,
        }
    }

    pub fn create_token(&self) -> Address {
        self.env
            .register_stellar_asset_contract_v2(Address::generate(&self.env))
            .address()
    }

    pub fn create_tax_token(&self, tax_bps: u32) -> Address {
        let id = self.env.register_contract(None, MockTaxToken);
        MockTaxTokenClient::new(&self.env, &id).initialize(&Address::generate(&self.env), &tax_bps);
        id
    }

    /// Builds a pair with its LP token and stages it in the registry.
    pub fn stage_pair(&self, token_a: &Address, token_b: &Address) -> Address {
        let pair = PairClient::new(&self.env, &self.env.register_contract(None, Pair));
        let lp = LpTokenClient::new(&self.env, &self.env.register_contract(None, LpToken));
        lp.initialize(
            &pair.address,
            &7,
            &String::from_str(&self.env, "EscrowSwap LP"),
            &String::from_str(&self.env, "ESLP"),
        );
        pair.initialize(&self.registry.address, token_a, token_b, &lp.address);
        self.registry.stage_pair(token_a, token_b, &pair.address);
        pair.address
    }

    /// Two fresh tokens with a staged, still empty pair.
    pub fn token_pair(&self) -> (Address, Address) {
        let token_a = self.create_token();
        let token_b = self.create_token();
        self.stage_pair(&token_a, &token_b);
        (token_a, token_b)
    }

    /// Both the asset contract and the tax token expose an admin
    /// `mint(to, amount)`.
    pub fn fund(&self, token: &Address, to: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, token).mint(to, &amount);
    }

    pub fn balance(&self, token: &Address, id: &Address) -> i128 {
        TokenClient::new(&self.env, token).balance(id)
    }

    pub fn deadline(&self) -> u64 {
        self.env.ledger().timestamp() + 100
    }

    /// Funds `provider` and adds liquidity through the router.
    pub fn add_liquidity_as(
        &self,
        provider: &Address,
        token_a: &Address,
        token_b: &Address,
        amount_a: i128,
        amount_b: i128,
    ) -> (i128, i128, i128) {
        self.fund(token_a, provider, amount_a);
        self.fund(token_b, provider, amount_b);
        self.router.add_liquidity(
            token_a,
            token_b,
            &amount_a,
            &amount_b,
            &0,
            &0,
            provider,
            &self.deadline(),
        )
    }

    pub fn add_liquidity(
        &self,
        token_a: &Address,
        token_b: &Address,
        amount_a: i128,
        amount_b: i128,
    ) -> (i128, i128, i128) {
        let provider = Address::generate(&self.env);
        self.add_liquidity_as(&provider, token_a, token_b, amount_a, amount_b)
    }

    pub fn pair(&self, token_a: &Address, token_b: &Address) -> PairClient<'static> {
        let address = self
            .registry
            .get_pair(token_a, token_b)
            .expect("pair not registered");
        PairClient::new(&self.env, &address)
    }

    pub fn lp(&self, token_a: &Address, token_b: &Address) -> LpTokenClient<'static> {
        LpTokenClient::new(&self.env, &self.pair(token_a, token_b).lp_token())
    }

    /// Reserves ordered as `(reserve_a, reserve_b)`.
    pub fn reserves(&self, token_a: &Address, token_b: &Address) -> (i128, i128) {
        let pair = self.pair(token_a, token_b);
        let (reserve_0, reserve_1, _) = pair.get_reserves();
        if *token_a == pair.token_0() {
            (reserve_0, reserve_1)
        } else {
            (reserve_1, reserve_0)
        }
    }
}
