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
    traits::{PoolCreationRequest, SignedRequest},
    types::ValidationContext,
    validation::{validate_pool_assets, validate_pool_params},
    BalanceOf, CoinOf, Config, CreateBalancerPoolRequestOf, Error, MomentOf, Pallet,
    PoolParamsError, PoolOf,
};
use alloc::vec::Vec;
use frame_support::ensure;
use gamm_primitives::{
    math::checked_ops_res::CheckedAddRes,
    traits::LiquidityLedger,
    types::{
        BalancerPool, DenomWeight, PoolAsset, PoolAssets, PoolId, SmoothWeightChangeParams,
        WeightSchedule,
    },
};
use sp_runtime::{traits::CheckedAdd, DispatchError, DispatchResult};

impl<T: Config> SignedRequest<T> for CreateBalancerPoolRequestOf<T> {
    const TYPE: &'static [u8] = b"create_balancer_pool";

    fn sender(&self) -> &[u8] {
        &self.sender
    }

    fn validate_basic(&self, ctx: &ValidationContext<T>) -> DispatchResult {
        ctx.parse_address(&self.sender)?;
        validate_pool_assets(&self.pool_assets, ctx.limits())
            .map_err(Error::<T>::InvalidAssetSet)?;
        validate_pool_params(&self.pool_params, &self.pool_assets, ctx.limits())
            .map_err(Error::<T>::InvalidPoolParams)?;
        ctx.parse_governor(&self.future_pool_governor)?;
        Ok(())
    }
}

impl<T: Config> PoolCreationRequest<T> for CreateBalancerPoolRequestOf<T> {
    fn pool_creator(&self, ctx: &ValidationContext<T>) -> Result<T::AccountId, DispatchError> {
        ctx.parse_address(&self.sender)
    }

    fn initial_liquidity(&self) -> Result<Vec<CoinOf<T>>, DispatchError> {
        let coins = self.pool_assets.iter().map(|asset| asset.token.clone()).collect();
        T::Ledger::sorted_liquidity(coins).ok_or(Error::<T>::EmptyLiquidity.into())
    }

    fn create_pool(
        &self,
        ctx: &ValidationContext<T>,
        pool_id: PoolId,
    ) -> Result<PoolOf<T>, DispatchError> {
        let governor = ctx.parse_governor(&self.future_pool_governor)?;

        let mut assets = self.pool_assets.clone();
        assets.sort_by(|a, b| a.denom().cmp(b.denom()));
        let total_weight =
            assets.iter().try_fold(0u128, |acc, asset| acc.checked_add_res(&asset.weight))?;
        let weight_schedule = self
            .pool_params
            .smooth_weight_change_params
            .as_ref()
            .map(|params| weight_schedule::<T>(params, &assets, ctx.now()))
            .transpose()?;
        let assets = PoolAssets::<BalanceOf<T>>::try_from(assets)
            .map_err(|_| Error::<T>::InvalidPoolParams(PoolParamsError::TooManyAssets))?;

        Ok(BalancerPool {
            id: pool_id,
            account_id: Pallet::<T>::pool_account_id(&pool_id),
            assets,
            total_weight,
            swap_fee: self.pool_params.swap_fee,
            exit_fee: self.pool_params.exit_fee,
            weight_schedule,
            governor,
            created_at: ctx.now(),
        })
    }
}

// `assets` must be sorted by denomination. A schedule without start time starts at `now`.
fn weight_schedule<T: Config>(
    params: &SmoothWeightChangeParams<MomentOf<T>>,
    assets: &[PoolAsset<BalanceOf<T>>],
    now: MomentOf<T>,
) -> Result<WeightSchedule<MomentOf<T>>, DispatchError> {
    let start_time = params.start_time.unwrap_or(now);
    ensure!(
        start_time.checked_add(&params.duration).is_some(),
        Error::<T>::InvalidPoolParams(PoolParamsError::ScheduleOverflow)
    );

    let initial_pool_weights: Vec<DenomWeight> = assets.iter().map(DenomWeight::from).collect();
    let mut target_pool_weights = params.target_pool_weights.clone();
    target_pool_weights.sort_by(|a, b| a.denom.as_slice().cmp(b.denom.as_slice()));

    let too_many_assets = || Error::<T>::InvalidPoolParams(PoolParamsError::TooManyAssets);
    Ok(WeightSchedule {
        start_time,
        duration: params.duration,
        initial_pool_weights: initial_pool_weights.try_into().map_err(|_| too_many_assets())?,
        target_pool_weights: target_pool_weights.try_into().map_err(|_| too_many_assets())?,
    })
}
