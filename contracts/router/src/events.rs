use soroban_sdk::{symbol_short, Env};

use crate::storage::PendingSwap;

pub struct RouterEvents;

impl RouterEvents {
    /// Topics: `("swap_init", depositor)`
    /// Data:   `(swap_id, token_in, token_out, amount_in, quoted_amount_out)`
    pub fn swap_initiated(env: &Env, swap: &PendingSwap) {
        env.events().publish(
            (symbol_short!("swap_init"), swap.depositor.clone()),
            (
                swap.id,
                swap.token_in.clone(),
                swap.token_out.clone(),
                swap.amount_in,
                swap.quoted_amount_out,
            ),
        );
    }

    /// Topics: `("swap_conf", depositor)`
    /// Data:   `(swap_id, recipient, amount_out)`
    pub fn swap_confirmed(env: &Env, swap: &PendingSwap, amount_out: i128) {
        env.events().publish(
            (symbol_short!("swap_conf"), swap.depositor.clone()),
            (swap.id, swap.recipient.clone(), amount_out),
        );
    }

    /// Topics: `("swap_canc", depositor)`
    /// Data:   `(swap_id, amount_in)`
    pub fn swap_cancelled(env: &Env, swap: &PendingSwap) {
        env.events().publish(
            (symbol_short!("swap_canc"), swap.depositor.clone()),
            (swap.id, swap.amount_in),
        );
    }
}
