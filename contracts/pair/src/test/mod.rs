#![cfg(test)]

// ---------------------------------------------------------------------------
// Pair test suite
//
// Every test runs against a natively registered Pair wired to a real LP
// token and a stub registry that only answers `fee_to`. Tokens are Stellar
// asset contracts unless a test needs the deflating mock.
// ---------------------------------------------------------------------------


use escrowswap_lp_token::{LpToken, LpTokenClient};
use escrowswap_mock_tax_token::{MockTaxToken, MockTaxTokenClient};
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Env, String,
};

use crate::{Pair, PairClient};

/// 1 token at 7 decimals.
pub const S: i128 = 10_000_000;

// ---------------------------------------------------------------------------
// Stub registry: the pair only ever asks its factory for `fee_to`.
// ---------------------------------------------------------------------------

#[contracttype]
enum RegistryKey {
    FeeTo,
}

#[contract]
pub struct MockRegistry;

#[contractimpl]
impl MockRegistry {
    pub fn fee_to(env: Env) -> Option<Address> {
        env.storage().instance().get(&RegistryKey::FeeTo)
    }

    pub fn set_fee_to(env: Env, fee_to: Option<Address>) {
        match fee_to {
            Some(addr) => env.storage().instance().set(&RegistryKey::FeeTo, &addr),
            None => env.storage().instance().remove(&RegistryKey::FeeTo),
        }
    }
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

pub fn create_token(env: &Env) -> Address {
    env.register_stellar_asset_contract_v2(Address::generate(env))
        .address()
}

pub fn create_tax_token(env: &Env, tax_bps: u32) -> Address {
    let id = env.register_contract(None, MockTaxToken);
    MockTaxTokenClient::new(env, &id).initialize(&Address::generate(env), &tax_bps);
    id
}

pub struct PairTest {
    pub env: Env,
    pub pair: PairClient<'static>,
    pub lp: LpTokenClient<'static>,
    pub registry: MockRegistryClient<'static>,
    pub token_0: Address,
    pub token_1: Address,
    pub user: Address,
}

impl PairTest {
    pub fn setup() -> Self {
        let env = Env::default();
        let token_a = create_token(&env);
        let token_b = create_token(&env);
        Self::with_tokens(env, token_a, token_b)
    }

    pub fn with_tokens(env: Env, token_a: Address, token_b: Address) -> Self {
        env.mock_all_auths();
        env.budget().reset_unlimited();

        let registry = MockRegistryClient::new(&env, &env.register_contract(None, MockRegistry));
        let pair = PairClient::new(&env, &env.register_contract(None, Pair));
        let lp = LpTokenClient::new(&env, &env.register_contract(None, LpToken));
        lp.initialize(
            &pair.address,
            &7,
            &String::from_str(&env, "EscrowSwap LP"),
            &String::from_str(&env, "ESLP"),
        );
        pair.initialize(&registry.address, &token_a, &token_b, &lp.address);

        let token_0 = pair.token_0();
        let token_1 = pair.token_1();
        let user = Address::generate(&env);

        PairTest {
            env,
            pair,
            lp,
            registry,
            token_0,
            token_1,
            user,
        }
    }

    /// Both the asset contract and the tax token expose an admin
    /// `mint(to, amount)`.
    pub fn fund(&self, token: &Address, to: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, token).mint(to, &amount);
    }

    pub fn balance(&self, token: &Address, id: &Address) -> i128 {
        TokenClient::new(&self.env, token).balance(id)
    }

    /// Sends `amount` of `token` from the user straight to the pair.
    pub fn send(&self, token: &Address, amount: i128) {
        TokenClient::new(&self.env, token).transfer(&self.user, &self.pair.address, &amount);
    }

    /// Funds the user, sends both amounts to the pair and mints to the user.
    pub fn deposit(&self, amount_0: i128, amount_1: i128) -> i128 {
        self.fund(&self.token_0, &self.user, amount_0);
        self.fund(&self.token_1, &self.user, amount_1);
        self.send(&self.token_0, amount_0);
        self.send(&self.token_1, amount_1);
        self.pair.mint(&self.user)
    }

    /// Returns `shares` of the user's LP tokens to the pair and burns them.
    pub fn withdraw(&self, shares: i128) -> (i128, i128) {
        self.lp.transfer(&self.user, &self.pair.address, &shares);
        self.pair.burn(&self.user)
    }

    pub fn reserves(&self) -> (i128, i128) {
        let (reserve_0, reserve_1, _) = self.pair.get_reserves();
        (reserve_0, reserve_1)
    }
}
