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

use crate::{
    constants::MAX_POOL_ASSETS,
    types::{pool_share_denom, Coin, Denom, PoolAsset, PoolGovernor, PoolId, WeightSchedule},
};
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{traits::ConstU32, BoundedVec, FixedU128, RuntimeDebug};

pub type PoolAssets<Balance> = BoundedVec<PoolAsset<Balance>, ConstU32<MAX_POOL_ASSETS>>;

/// A weighted constant-product pool.
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct BalancerPool<AccountId, Balance, Moment> {
    pub id: PoolId,
    /// Account which holds the reserves of the pool.
    pub account_id: AccountId,
    /// Sorted by denomination; denominations are unique.
    pub assets: PoolAssets<Balance>,
    pub total_weight: u128,
    pub swap_fee: FixedU128,
    pub exit_fee: FixedU128,
    pub weight_schedule: Option<WeightSchedule<Moment>>,
    pub governor: PoolGovernor<AccountId>,
    pub created_at: Moment,
}

impl<AccountId, Balance, Moment> BalancerPool<AccountId, Balance, Moment>
where
    Balance: Clone,
{
    pub fn denoms(&self) -> Vec<Denom> {
        self.assets.iter().map(|asset| asset.token.denom.clone()).collect()
    }

    /// Reserves in the order of `assets`.
    pub fn reserves(&self) -> Vec<Coin<Balance>> {
        self.assets.iter().map(|asset| asset.token.clone()).collect()
    }

    pub fn weight_of(&self, denom: &[u8]) -> Option<u128> {
        self.assets.iter().find(|asset| asset.denom() == denom).map(|asset| asset.weight)
    }

    pub fn share_denom(&self) -> Denom {
        pool_share_denom(self.id)
    }
}
