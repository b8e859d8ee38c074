#![cfg(test)]

use soroban_sdk::Env;

mod factory_tests {
    use super::*;
    use crate::{storage, Factory, FactoryClient, FactoryError};
    use soroban_sdk::{
        symbol_short,
        testutils::{Address as _, Events as _},
        Address, BytesN, IntoVal, Val, Vec,
    };

    // Pair and LP token bytecode are never deployed in these tests; the
    // hashes only need to round-trip through storage.
    fn wasm_hash(env: &Env, seed: u8) -> BytesN<32> {
        BytesN::from_array(env, &[seed; 32])
    }

    fn setup_env<'a>() -> (Env, FactoryClient<'a>, Address, Address, Address) {
        let env = Env::default();
        env.mock_all_auths();
        let factory_address = env.register_contract(None, Factory);
        let client = FactoryClient::new(&env, &factory_address);

        let fee_to_setter = Address::generate(&env);
        client.initialize(&fee_to_setter, &wasm_hash(&env, 1), &wasm_hash(&env, 2));

        let token_a = Address::generate(&env);
        let token_b = Address::generate(&env);

        (env, client, token_a, token_b, fee_to_setter)
    }

    // ---------- Initialization ----------

    #[test]
    fn test_initialize_happy_path() {
        let (_env, client, _, _, fee_to_setter) = setup_env();

        assert!(client.fee_to().is_none());
        assert_eq!(client.fee_to_setter(), fee_to_setter);
        assert_eq!(client.all_pairs_length(), 0);
    }

    #[test]
    fn test_initialize_double_init_fails() {
        let (env, client, _, _, _) = setup_env();

        let result = client.try_initialize(
            &Address::generate(&env),
            &wasm_hash(&env, 3),
            &wasm_hash(&env, 4),
        );
        assert_eq!(result, Err(Ok(FactoryError::AlreadyInitialized)));
    }

    #[test]
    fn test_uninitialized_reads() {
        let env = Env::default();
        let client = FactoryClient::new(&env, &env.register_contract(None, Factory));

        assert!(client.fee_to().is_none());
        assert_eq!(client.all_pairs_length(), 0);
        assert_eq!(client.try_fee_to_setter(), Err(Ok(FactoryError::NotInitialized)));
    }

    // ---------- Pair registry ----------

    #[test]
    fn test_create_pair_identical_tokens_fails() {
        let (_env, client, token_a, _, _) = setup_env();

        let result = client.try_create_pair(&token_a, &token_a);
        assert_eq!(result, Err(Ok(FactoryError::IdenticalTokens)));
    }

    #[test]
    fn test_create_pair_before_initialize_fails() {
        let env = Env::default();
        let client = FactoryClient::new(&env, &env.register_contract(None, Factory));

        let result = client.try_create_pair(&Address::generate(&env), &Address::generate(&env));
        assert_eq!(result, Err(Ok(FactoryError::NotInitialized)));
    }

    #[test]
    fn test_create_pair_existing_fails_in_either_order() {
        let (env, client, token_a, token_b, _) = setup_env();
        let pair = Address::generate(&env);

        env.as_contract(&client.address, || {
            storage::set_pair(&env, token_a.clone(), token_b.clone(), &pair);
            storage::set_pair(&env, token_b.clone(), token_a.clone(), &pair);
        });

        assert_eq!(
            client.try_create_pair(&token_a, &token_b),
            Err(Ok(FactoryError::PairExists))
        );
        assert_eq!(
            client.try_create_pair(&token_b, &token_a),
            Err(Ok(FactoryError::PairExists))
        );
    }

    #[test]
    fn test_get_pair_none_for_missing() {
        let (_env, client, token_a, token_b, _) = setup_env();

        assert!(client.get_pair(&token_a, &token_b).is_none());
        assert!(client.all_pairs(&0).is_none());
    }

    #[test]
    fn test_get_pair_is_order_independent() {
        let (env, client, token_a, token_b, _) = setup_env();
        let pair = Address::generate(&env);

        env.as_contract(&client.address, || {
            storage::set_pair(&env, token_a.clone(), token_b.clone(), &pair);
            storage::set_pair(&env, token_b.clone(), token_a.clone(), &pair);
            storage::push_pair(&env, 0, &pair);
        });

        assert_eq!(client.get_pair(&token_a, &token_b), Some(pair.clone()));
        assert_eq!(client.get_pair(&token_b, &token_a), Some(pair.clone()));
        assert_eq!(client.all_pairs(&0), Some(pair));
    }

    // ---------- Fee recipient ----------

    #[test]
    fn test_set_fee_to_by_setter() {
        let (env, client, _, _, fee_to_setter) = setup_env();
        let fee_to = Address::generate(&env);

        client.set_fee_to(&fee_to_setter, &Some(fee_to.clone()));
        assert_eq!(client.fee_to(), Some(fee_to));

        let (contract, topics, _) = env.events().all().last().unwrap();
        let expected: Vec<Val> = (symbol_short!("fee_to"),).into_val(&env);
        assert_eq!(contract, client.address);
        assert_eq!(topics, expected);

        client.set_fee_to(&fee_to_setter, &None);
        assert!(client.fee_to().is_none());
    }

    #[test]
    fn test_set_fee_to_by_stranger_fails() {
        let (env, client, _, _, _) = setup_env();
        let stranger = Address::generate(&env);

        let result = client.try_set_fee_to(&stranger, &Some(stranger.clone()));
        assert_eq!(result, Err(Ok(FactoryError::Unauthorized)));
        assert!(client.fee_to().is_none());
    }

    #[test]
    fn test_hand_over_fee_to_setter() {
        let (env, client, _, _, fee_to_setter) = setup_env();
        let next = Address::generate(&env);

        client.set_fee_to_setter(&fee_to_setter, &next);
        assert_eq!(client.fee_to_setter(), next);

        // The previous setter lost its rights.
        assert_eq!(
            client.try_set_fee_to(&fee_to_setter, &None),
            Err(Ok(FactoryError::Unauthorized))
        );
        client.set_fee_to(&next, &Some(next.clone()));
        assert_eq!(client.fee_to(), Some(next));
    }
}
