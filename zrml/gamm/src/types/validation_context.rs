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

use crate::{validation::validate_future_governor, Config, Error, MomentOf};
use core::marker::PhantomData;
use frame_support::traits::{Get, Time};
use gamm_primitives::{traits::AddressCodec, types::PoolGovernor};
use sp_runtime::{DispatchError, FixedU128};

/// Bounds which pool creation requests are validated against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PoolLimits {
    pub min_assets: u16,
    pub max_assets: u16,
    /// Exclusive.
    pub max_weight: u128,
    /// Exclusive.
    pub max_swap_fee: FixedU128,
    /// Exclusive.
    pub max_exit_fee: FixedU128,
}

impl PoolLimits {
    pub fn of<T: Config>() -> Self {
        PoolLimits {
            min_assets: T::MinAssets::get(),
            max_assets: T::MaxAssets::get(),
            max_weight: T::MaxWeight::get(),
            max_swap_fee: T::MaxSwapFee::get(),
            max_exit_fee: T::MaxExitFee::get(),
        }
    }
}

/// Everything outside of a request which is required to validate it: the chain time, the
/// configured limits and the codecs of the runtime.
pub struct ValidationContext<T: Config> {
    now: MomentOf<T>,
    limits: PoolLimits,
    _marker: PhantomData<T>,
}

impl<T: Config> ValidationContext<T> {
    /// Context at the current chain time with the limits of the runtime.
    pub fn new() -> Self {
        Self::at(T::Timestamp::now())
    }

    pub fn at(now: MomentOf<T>) -> Self {
        ValidationContext { now, limits: PoolLimits::of::<T>(), _marker: PhantomData }
    }

    pub fn with_limits(mut self, limits: PoolLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn now(&self) -> MomentOf<T> {
        self.now
    }

    pub fn limits(&self) -> &PoolLimits {
        &self.limits
    }

    pub fn parse_address(&self, address: &[u8]) -> Result<T::AccountId, DispatchError> {
        T::AddressCodec::parse(address).map_err(|err| Error::<T>::InvalidAddress(err).into())
    }

    pub fn parse_governor(
        &self,
        descriptor: &[u8],
    ) -> Result<PoolGovernor<T::AccountId>, DispatchError> {
        validate_future_governor::<T::GovernorParser>(descriptor)
            .map_err(|err| Error::<T>::InvalidGovernor(err).into())
    }
}

impl<T: Config> Default for ValidationContext<T> {
    fn default() -> Self {
        Self::new()
    }
}
