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

use super::*;
use gamm_primitives::traits::LiquidityLedger;
use sp_runtime::{DispatchError, TokenError};

type Ledger = <Runtime as Config>::Ledger;

fn coins(list: &[(&str, Balance)]) -> Vec<Coin<Balance>> {
    list.iter().map(|(d, amount)| Coin::new(denom(d), *amount)).collect()
}

#[test]
fn sorted_liquidity_returns_none_if_empty() {
    assert_eq!(Ledger::sorted_liquidity(vec![]), None);
}

#[test]
fn sorted_liquidity_sorts_by_denom() {
    let liquidity = coins(&[("uosmo", 1), ("uatom", 2), ("uion", 3)]);
    assert_eq!(
        Ledger::sorted_liquidity(liquidity),
        Some(coins(&[("uatom", 2), ("uion", 3), ("uosmo", 1)]))
    );
}

#[test]
fn deposit_liquidity_moves_every_coin() {
    ExtBuilder::default().build().execute_with(|| {
        let pool_account = Gamm::pool_account_id(&0);
        assert_ok!(Ledger::deposit_liquidity(
            &ALICE,
            &pool_account,
            &coins(&[("uatom", _1), ("uosmo", _10)])
        ));
        assert_eq!(free_balance("uatom", &pool_account), _1);
        assert_eq!(free_balance("uosmo", &pool_account), _10);
        assert_eq!(free_balance("uosmo", &ALICE), INITIAL_BALANCE - _10);
    });
}

#[test]
fn deposit_liquidity_fails_on_unknown_denom() {
    ExtBuilder::default().build().execute_with(|| {
        assert_eq!(
            Ledger::deposit_liquidity(&ALICE, &BOB, &coins(&[("ufoo", _1)])),
            Err(DispatchError::Token(TokenError::UnknownAsset))
        );
    });
}
