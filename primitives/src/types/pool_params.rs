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

use crate::{constants::MAX_POOL_ASSETS, types::DenomWeight};
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{
    traits::{CheckedAdd, ConstU32},
    BoundedVec, FixedU128, RuntimeDebug,
};

/// Parameters of a weighted pool as specified by its creator. Only meaningful together with the
/// list of assets they're submitted with.
#[derive(Clone, Decode, Encode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct PoolParams<Moment> {
    /// Fraction of every swap which is kept by the pool.
    pub swap_fee: FixedU128,
    /// Fraction of withdrawn liquidity which is kept by the pool.
    pub exit_fee: FixedU128,
    pub smooth_weight_change_params: Option<SmoothWeightChangeParams<Moment>>,
}

impl<Moment> PoolParams<Moment> {
    pub fn new(swap_fee: FixedU128, exit_fee: FixedU128) -> Self {
        PoolParams { swap_fee, exit_fee, smooth_weight_change_params: None }
    }

    pub fn with_smooth_weight_change(
        mut self,
        smooth_weight_change_params: SmoothWeightChangeParams<Moment>,
    ) -> Self {
        self.smooth_weight_change_params = Some(smooth_weight_change_params);
        self
    }
}

/// Linear transition of the pool weights to `target_pool_weights`, starting at `start_time` and
/// lasting for `duration` milliseconds. If `start_time` is `None`, the schedule starts when the
/// pool is created.
#[derive(Clone, Decode, Encode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct SmoothWeightChangeParams<Moment> {
    pub start_time: Option<Moment>,
    pub duration: Moment,
    pub target_pool_weights: Vec<DenomWeight>,
}

pub type ScheduleWeights = BoundedVec<DenomWeight, ConstU32<MAX_POOL_ASSETS>>;

/// The admitted form of [`SmoothWeightChangeParams`] as stored with the pool. Both weight lists
/// are sorted by denomination.
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct WeightSchedule<Moment> {
    pub start_time: Moment,
    pub duration: Moment,
    pub initial_pool_weights: ScheduleWeights,
    pub target_pool_weights: ScheduleWeights,
}

impl<Moment> WeightSchedule<Moment>
where
    Moment: CheckedAdd + Copy,
{
    /// Returns `None` if the end of the schedule isn't representable.
    pub fn end_time(&self) -> Option<Moment> {
        self.start_time.checked_add(&self.duration)
    }
}
