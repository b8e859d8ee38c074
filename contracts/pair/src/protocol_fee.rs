use escrowswap_math::{product, protocol_fee_shares, sqrt};
use soroban_sdk::{Env, U256};

use crate::{
    clients::{FactoryClient, LpTokenClient},
    errors::PairError,
    events::PairEvents,
    storage::PairStorage,
};

/// Mints the protocol's share of invariant growth since `k_last` to the
/// factory's fee recipient.
///
/// Must run before the share supply is read for a mint or burn, against the
/// reserves as they stood before that operation. Returns whether the fee
/// switch is on; the caller then checkpoints `k_last` from the new reserves.
/// Turning the switch off clears the checkpoint so that switching it back on
/// never charges for growth that happened while it was off.
pub fn mint_fee(
    env: &Env,
    state: &mut PairStorage,
    lp: &LpTokenClient,
) -> Result<bool, PairError> {
    let zero = U256::from_u32(env, 0);

    let Some(fee_to) = FactoryClient::new(env, &state.factory).fee_to() else {
        if state.k_last != zero {
            state.k_last = zero;
        }
        return Ok(false);
    };

    if state.k_last != zero {
        let root_k = sqrt(env, &product(env, state.reserve_0, state.reserve_1)?);
        let root_k_last = sqrt(env, &state.k_last);
        let shares = protocol_fee_shares(env, lp.total_supply(), &root_k, &root_k_last)?;
        if shares > 0 {
            lp.mint(&fee_to, &shares);
            PairEvents::fee_mint(env, &fee_to, shares);
        }
    }
    Ok(true)
}
