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

#![cfg(all(feature = "mock", test))]

mod liquidity_ledger;
mod signed_request;

use crate::{mock::*, traits::*, types::*, *};
use frame_support::{assert_noop, assert_ok};
use gamm_primitives::types::{
    pool_share_denom, AddressError, Balance, Coin, CreateBalancerPoolRequest, DenomWeight,
    GovernorError, MigrateSharesRequest, Moment, PoolAsset, PoolGovernor, PoolId, PoolParams,
    SmoothWeightChangeParams,
};
use orml_traits::MultiCurrency;
use sp_core::crypto::{Ss58AddressFormat, Ss58Codec};
use sp_runtime::FixedU128;

const _1: Balance = gamm_primitives::constants::BASE;
const _10: Balance = 10 * _1;
const _100: Balance = 100 * _1;

const NOW: Moment = 1_700_000_000_000;

fn asset(d: &str, amount: Balance, weight: u128) -> PoolAsset<Balance> {
    PoolAsset::new(denom(d), amount, weight)
}

fn swap_fee(numerator: u128, denominator: u128) -> FixedU128 {
    FixedU128::from_rational(numerator, denominator)
}

fn default_params() -> PoolParams<Moment> {
    PoolParams::new(swap_fee(3, 1_000), FixedU128::from_u32(0))
}

fn create_request(
    sender: &AccountId,
    pool_assets: Vec<PoolAsset<Balance>>,
) -> CreateBalancerPoolRequestOf<Runtime> {
    CreateBalancerPoolRequest::new(address_of(sender), default_params(), pool_assets, vec![])
}

fn two_assets() -> Vec<PoolAsset<Balance>> {
    vec![asset("uosmo", _10, 1), asset("uatom", _10, 1)]
}

/// The first `n` known denominations with equal amounts and weights.
fn n_assets(n: usize) -> Vec<PoolAsset<Balance>> {
    DENOMS.iter().take(n).map(|d| asset(d, _1, 1)).collect()
}

fn create_pool(who: AccountId, pool_assets: Vec<PoolAsset<Balance>>) -> PoolId {
    let pool_id = PoolCount::<Runtime>::get();
    assert_ok!(Gamm::create_balancer_pool(
        RuntimeOrigin::signed(who.clone()),
        create_request(&who, pool_assets)
    ));
    pool_id
}

fn migrate_request(sender: Vec<u8>, shares: Coin<Balance>) -> MigrateSharesRequestOf<Runtime> {
    MigrateSharesRequest { sender, shares_to_migrate: shares, token_out_mins: vec![] }
}

fn foreign_address(account: &AccountId) -> Vec<u8> {
    account.to_ss58check_with_version(Ss58AddressFormat::custom(73)).into_bytes()
}

fn free_balance(d: &str, who: &AccountId) -> Balance {
    Tokens::free_balance(currency_of(d), who)
}
