// Copyright 2025 Forecasting Technologies LTD.
//
// This file is part of Zeitgeist.
//
// Zeitgeist is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at
// your option) any later version.
//
// Zeitgeist is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Zeitgeist. If not, see <https://www.gnu.org/licenses/>.

use crate::types::{Coin, PoolAsset, PoolParams};
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// Request to create a weighted pool.
///
/// Addresses are carried in their textual form and parsed during admission, so that malformed
/// addresses are rejected with an error instead of failing to decode.
#[derive(Clone, Decode, Encode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct CreateBalancerPoolRequest<Balance, Moment> {
    pub sender: Vec<u8>,
    pub pool_params: PoolParams<Moment>,
    /// Order is irrelevant; the pool stores its assets sorted by denomination.
    pub pool_assets: Vec<PoolAsset<Balance>>,
    /// Empty, `governance`, an address, or an address followed by `,` and a lock duration such
    /// as `24h` or `1h30m`.
    pub future_pool_governor: Vec<u8>,
}

impl<Balance, Moment> CreateBalancerPoolRequest<Balance, Moment> {
    pub fn new(
        sender: Vec<u8>,
        pool_params: PoolParams<Moment>,
        pool_assets: Vec<PoolAsset<Balance>>,
        future_pool_governor: Vec<u8>,
    ) -> Self {
        CreateBalancerPoolRequest { sender, pool_params, pool_assets, future_pool_governor }
    }

    /// The larger of the number of assets and the number of target weights. Both lists are
    /// decoded and iterated before validation rejects a mismatch.
    pub fn max_asset_count(&self) -> usize {
        let target_count = self
            .pool_params
            .smooth_weight_change_params
            .as_ref()
            .map_or(0, |params| params.target_pool_weights.len());
        self.pool_assets.len().max(target_count)
    }
}

/// Request to move the liquidity backing `shares_to_migrate` into a full-range concentrated
/// liquidity position. The migration fails if less than `token_out_mins` is withdrawn.
#[derive(Clone, Decode, Encode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct MigrateSharesRequest<Balance> {
    pub sender: Vec<u8>,
    pub shares_to_migrate: Coin<Balance>,
    pub token_out_mins: Vec<Coin<Balance>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Denom, DenomWeight, SmoothWeightChangeParams};
    use sp_runtime::FixedU128;

    fn denom(s: &str) -> Denom {
        Denom::truncate_from(s.as_bytes().to_vec())
    }

    fn request(
        asset_count: usize,
        target_count: Option<usize>,
    ) -> CreateBalancerPoolRequest<u128, u64> {
        let pool_assets =
            (0..asset_count).map(|i| PoolAsset::new(denom(&format!("token{i}")), 1, 1)).collect();
        let mut pool_params = PoolParams::new(FixedU128::from_u32(0), FixedU128::from_u32(0));
        if let Some(target_count) = target_count {
            pool_params = pool_params.with_smooth_weight_change(SmoothWeightChangeParams {
                start_time: None,
                duration: 1,
                target_pool_weights: (0..target_count)
                    .map(|i| DenomWeight { denom: denom(&format!("token{i}")), weight: 1 })
                    .collect(),
            });
        }
        CreateBalancerPoolRequest::new(vec![], pool_params, pool_assets, vec![])
    }

    #[test]
    fn max_asset_count_covers_target_weights() {
        assert_eq!(request(3, None).max_asset_count(), 3);
        assert_eq!(request(3, Some(2)).max_asset_count(), 3);
        assert_eq!(request(2, Some(40)).max_asset_count(), 40);
    }
}
