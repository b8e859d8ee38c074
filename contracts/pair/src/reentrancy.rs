use soroban_sdk::Env;

use crate::{
    errors::PairError,
    storage::{get_reentrancy_guard, set_reentrancy_guard, ReentrancyGuard},
};

/// Takes the pair lock. Fails with `Locked` if an operation is already in
/// flight.
///
/// Every reserve-mutating entry point holds the lock from before its first
/// token transfer until after reserves are written, so a token callback
/// cannot observe or move reserves mid-operation. A failed invocation is
/// rolled back by the host, which clears the lock with it.
pub fn acquire(env: &Env) -> Result<(), PairError> {
    if get_reentrancy_guard(env).locked {
        return Err(PairError::Locked);
    }
    set_reentrancy_guard(env, &ReentrancyGuard { locked: true });
    Ok(())
}

/// Releases the lock on the success path.
pub fn release(env: &Env) {
    set_reentrancy_guard(env, &ReentrancyGuard { locked: false });
}
