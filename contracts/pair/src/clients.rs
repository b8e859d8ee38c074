use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "FactoryClient")]
pub trait FactoryInterface {
    fn fee_to(env: Env) -> Option<Address>;
}

/// The subset of the LP token the pair drives as its admin.
#[contractclient(name = "LpTokenClient")]
pub trait LpTokenInterface {
    fn mint(env: Env, to: Address, amount: i128);
    fn burn(env: Env, from: Address, amount: i128);
    fn balance(env: Env, id: Address) -> i128;
    fn total_supply(env: Env) -> i128;
}
