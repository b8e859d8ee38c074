#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    Address, Env, String,
};

use crate::{errors::LpTokenError, LpToken, LpTokenClient};

fn setup<'a>() -> (Env, LpTokenClient<'a>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let token_id = env.register_contract(None, LpToken);
    let client = LpTokenClient::new(&env, &token_id);
    let admin = Address::generate(&env);

    client.initialize(
        &admin,
        &7,
        &String::from_str(&env, "EscrowSwap LP"),
        &String::from_str(&env, "ESLP"),
    );

    (env, client, admin)
}

// ---------- Initialization ----------

#[test]
fn test_initialize_stores_metadata() {
    let (env, client, admin) = setup();

    assert_eq!(client.decimals(), 7);
    assert_eq!(client.name(), String::from_str(&env, "EscrowSwap LP"));
    assert_eq!(client.symbol(), String::from_str(&env, "ESLP"));
    assert_eq!(client.admin(), admin);
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_double_initialize_fails() {
    let (env, client, admin) = setup();

    let result = client.try_initialize(
        &admin,
        &7,
        &String::from_str(&env, "Other"),
        &String::from_str(&env, "OTH"),
    );
    assert_eq!(result, Err(Ok(LpTokenError::AlreadyInitialized)));
}

#[test]
fn test_mint_before_initialize_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let client = LpTokenClient::new(&env, &env.register_contract(None, LpToken));
    let user = Address::generate(&env);

    assert_eq!(client.try_mint(&user, &100), Err(Ok(LpTokenError::NotInitialized)));
}

// ---------- Mint / burn ----------

#[test]
fn test_mint_credits_balance_and_supply() {
    let (env, client, _admin) = setup();
    let user = Address::generate(&env);

    client.mint(&user, &1_000);
    client.mint(&user, &500);

    assert_eq!(client.balance(&user), 1_500);
    assert_eq!(client.total_supply(), 1_500);
}

#[test]
fn test_burn_reduces_balance_and_supply() {
    let (env, client, _admin) = setup();
    let user = Address::generate(&env);

    client.mint(&user, &1_000);
    client.burn(&user, &400);

    assert_eq!(client.balance(&user), 600);
    assert_eq!(client.total_supply(), 600);
}

#[test]
fn test_burn_more_than_balance_fails() {
    let (env, client, _admin) = setup();
    let user = Address::generate(&env);

    client.mint(&user, &100);
    assert_eq!(client.try_burn(&user, &101), Err(Ok(LpTokenError::InsufficientBalance)));
    assert_eq!(client.balance(&user), 100);
}

#[test]
fn test_negative_amounts_rejected() {
    let (env, client, _admin) = setup();
    let user = Address::generate(&env);
    let other = Address::generate(&env);

    assert_eq!(client.try_mint(&user, &-1), Err(Ok(LpTokenError::NegativeAmount)));
    assert_eq!(
        client.try_transfer(&user, &other, &-1),
        Err(Ok(LpTokenError::NegativeAmount))
    );
}

// ---------- Transfers ----------

#[test]
fn test_transfer_moves_balance() {
    let (env, client, _admin) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&alice, &1_000);
    client.transfer(&alice, &bob, &300);

    assert_eq!(client.balance(&alice), 700);
    assert_eq!(client.balance(&bob), 300);
    assert_eq!(client.total_supply(), 1_000);
}

#[test]
fn test_transfer_insufficient_balance_fails() {
    let (env, client, _admin) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&alice, &10);
    assert_eq!(
        client.try_transfer(&alice, &bob, &11),
        Err(Ok(LpTokenError::InsufficientBalance))
    );
}

// ---------- Allowances ----------

#[test]
fn test_transfer_from_spends_allowance() {
    let (env, client, _admin) = setup();
    env.ledger().set_sequence_number(100);
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);
    let to = Address::generate(&env);

    client.mint(&owner, &1_000);
    client.approve(&owner, &spender, &600, &200);
    assert_eq!(client.allowance(&owner, &spender), 600);

    client.transfer_from(&spender, &owner, &to, &250);

    assert_eq!(client.allowance(&owner, &spender), 350);
    assert_eq!(client.balance(&owner), 750);
    assert_eq!(client.balance(&to), 250);
}

#[test]
fn test_transfer_from_beyond_allowance_fails() {
    let (env, client, _admin) = setup();
    env.ledger().set_sequence_number(100);
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);

    client.mint(&owner, &1_000);
    client.approve(&owner, &spender, &100, &200);

    assert_eq!(
        client.try_transfer_from(&spender, &owner, &spender, &101),
        Err(Ok(LpTokenError::InsufficientAllowance))
    );
}

#[test]
fn test_approve_with_past_expiration_fails() {
    let (env, client, _admin) = setup();
    env.ledger().set_sequence_number(100);
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);

    assert_eq!(
        client.try_approve(&owner, &spender, &100, &99),
        Err(Ok(LpTokenError::InvalidExpiration))
    );
    // Clearing an allowance is allowed with any expiration.
    client.approve(&owner, &spender, &0, &0);
    assert_eq!(client.allowance(&owner, &spender), 0);
}

#[test]
fn test_burn_from_spends_allowance() {
    let (env, client, _admin) = setup();
    env.ledger().set_sequence_number(100);
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);

    client.mint(&owner, &1_000);
    client.approve(&owner, &spender, &400, &500);
    client.burn_from(&spender, &owner, &400);

    assert_eq!(client.balance(&owner), 600);
    assert_eq!(client.total_supply(), 600);
    assert_eq!(client.allowance(&owner, &spender), 0);
}
