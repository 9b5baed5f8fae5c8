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

//! Stateless checks run on every pool creation request before anything is written. Each
//! validator only looks at its arguments, so running it twice yields the same result.

use crate::{types::PoolLimits, AssetSetError, PoolParamsError};
use alloc::{collections::BTreeSet, vec::Vec};
use frame_support::ensure;
use gamm_primitives::{
    traits::GovernorParser,
    types::{is_valid_denom, GovernorError, PoolAsset, PoolGovernor, PoolParams},
};
use sp_runtime::traits::{AtLeast32Bit, CheckedAdd, Zero};

fn is_valid_weight(weight: u128, max_weight: u128) -> bool {
    weight > 0 && weight < max_weight
}

/// Checks that `assets` is non-empty, that every asset has a well-formed denomination, a
/// positive amount and a weight in `1..max_weight`, and that no denomination is repeated.
pub fn validate_pool_assets<Balance>(
    assets: &[PoolAsset<Balance>],
    limits: &PoolLimits,
) -> Result<(), AssetSetError>
where
    Balance: Zero,
{
    ensure!(!assets.is_empty(), AssetSetError::Empty);
    let mut seen = BTreeSet::new();
    for asset in assets {
        ensure!(asset.weight > 0, AssetSetError::ZeroWeight);
        ensure!(asset.weight < limits.max_weight, AssetSetError::WeightTooLarge);
        ensure!(is_valid_denom(asset.denom()), AssetSetError::InvalidDenom);
        ensure!(!asset.token.amount.is_zero(), AssetSetError::ZeroAmount);
        ensure!(seen.insert(asset.denom()), AssetSetError::DuplicateDenom);
    }
    Ok(())
}

/// Checks `params` against the `assets` they were submitted with.
///
/// Both fees must be below their maximum and the number of assets must lie within the
/// configured range. A weight schedule must last for a positive, representable duration and
/// assign a valid weight to exactly the denominations of `assets`.
pub fn validate_pool_params<Balance, Moment>(
    params: &PoolParams<Moment>,
    assets: &[PoolAsset<Balance>],
    limits: &PoolLimits,
) -> Result<(), PoolParamsError>
where
    Moment: AtLeast32Bit + Copy,
{
    ensure!(params.swap_fee < limits.max_swap_fee, PoolParamsError::SwapFeeTooLarge);
    ensure!(params.exit_fee < limits.max_exit_fee, PoolParamsError::ExitFeeTooLarge);

    let asset_count = assets.len();
    ensure!(asset_count >= usize::from(limits.min_assets), PoolParamsError::TooFewAssets);
    ensure!(asset_count <= usize::from(limits.max_assets), PoolParamsError::TooManyAssets);

    let Some(schedule) = &params.smooth_weight_change_params else {
        return Ok(());
    };
    ensure!(!schedule.duration.is_zero(), PoolParamsError::ZeroScheduleDuration);
    if let Some(start_time) = schedule.start_time {
        ensure!(
            start_time.checked_add(&schedule.duration).is_some(),
            PoolParamsError::ScheduleOverflow
        );
    }
    ensure!(
        schedule.target_pool_weights.len() == asset_count,
        PoolParamsError::TargetWeightCountMismatch
    );
    for target in &schedule.target_pool_weights {
        ensure!(
            is_valid_weight(target.weight, limits.max_weight),
            PoolParamsError::InvalidTargetWeight
        );
    }
    let mut target_denoms: Vec<&[u8]> =
        schedule.target_pool_weights.iter().map(|target| target.denom.as_slice()).collect();
    let mut denoms: Vec<&[u8]> = assets.iter().map(PoolAsset::denom).collect();
    target_denoms.sort_unstable();
    denoms.sort_unstable();
    ensure!(target_denoms == denoms, PoolParamsError::TargetDenomMismatch);

    Ok(())
}

/// Parses the future governor `descriptor` with `Parser`.
pub fn validate_future_governor<Parser>(
    descriptor: &[u8],
) -> Result<PoolGovernor<Parser::AccountId>, GovernorError>
where
    Parser: GovernorParser,
{
    Parser::parse(descriptor)
}
