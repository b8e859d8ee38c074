use soroban_sdk::{symbol_short, Address, Env};

pub struct PairEvents;

impl PairEvents {
    /// Emits a `swap` event after a successful swap.
    ///
    /// Topics: `("swap", to)`
    /// Data:   `(amount_0_in, amount_1_in, amount_0_out, amount_1_out, fee_bps)`
    ///
    /// Input amounts are what the pair actually received, which for a
    /// fee-on-transfer token is less than what the sender sent.
    pub fn swap(
        env: &Env,
        to: &Address,
        amount_0_in: i128,
        amount_1_in: i128,
        amount_0_out: i128,
        amount_1_out: i128,
        fee_bps: u32,
    ) {
        env.events().publish(
            (symbol_short!("swap"), to),
            (amount_0_in, amount_1_in, amount_0_out, amount_1_out, fee_bps),
        );
    }

    pub fn mint(env: &Env, to: &Address, amount_0: i128, amount_1: i128, shares: i128) {
        env.events()
            .publish((symbol_short!("mint"), to), (amount_0, amount_1, shares));
    }

    pub fn burn(env: &Env, to: &Address, amount_0: i128, amount_1: i128, shares: i128) {
        env.events()
            .publish((symbol_short!("burn"), to), (amount_0, amount_1, shares));
    }

    pub fn sync(env: &Env, reserve_0: i128, reserve_1: i128) {
        env.events()
            .publish((symbol_short!("sync"),), (reserve_0, reserve_1));
    }

    /// Shares minted to the factory's fee recipient.
    pub fn fee_mint(env: &Env, fee_to: &Address, shares: i128) {
        env.events()
            .publish((symbol_short!("fee_mint"), fee_to), shares);
    }
}
