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

use crate::types::{sort_coins, Coin, Denom};
use alloc::{fmt::Debug, vec::Vec};
use core::marker::PhantomData;
use frame_support::{
    dispatch::DispatchResult,
    pallet_prelude::{MaybeSerializeDeserialize, Member},
    Parameter,
};
use orml_traits::MultiCurrency;
use parity_scale_codec::MaxEncodedLen;
use sp_runtime::{
    traits::{AtLeast32BitUnsigned, TryConvert},
    DispatchError, TokenError,
};

/// Movement of the liquidity which backs a new pool.
pub trait LiquidityLedger {
    type AccountId;
    type Balance: AtLeast32BitUnsigned
        + Copy
        + Debug
        + Default
        + MaxEncodedLen
        + MaybeSerializeDeserialize
        + Member
        + Parameter;

    /// Returns `coins` sorted by denomination, or `None` if `coins` is empty.
    fn sorted_liquidity(coins: Vec<Coin<Self::Balance>>) -> Option<Vec<Coin<Self::Balance>>>;

    /// Transfers `liquidity` from `who` to `pool_account`. Not transactional; the caller is
    /// expected to roll back on error.
    fn deposit_liquidity(
        who: &Self::AccountId,
        pool_account: &Self::AccountId,
        liquidity: &[Coin<Self::Balance>],
    ) -> DispatchResult;
}

/// Ledger backed by an ORML multi-currency implementation. Denominations are mapped to currency
/// ids using `DenomToCurrency`; unknown denominations are rejected.
pub struct MultiCurrencyLedger<AccountId, Currencies, DenomToCurrency>(
    PhantomData<(AccountId, Currencies, DenomToCurrency)>,
);

impl<AccountId, Currencies, DenomToCurrency> LiquidityLedger
    for MultiCurrencyLedger<AccountId, Currencies, DenomToCurrency>
where
    Currencies: MultiCurrency<AccountId>,
    Currencies::Balance: MaybeSerializeDeserialize + Member + Parameter,
    DenomToCurrency: TryConvert<Denom, Currencies::CurrencyId>,
{
    type AccountId = AccountId;
    type Balance = Currencies::Balance;

    fn sorted_liquidity(mut coins: Vec<Coin<Self::Balance>>) -> Option<Vec<Coin<Self::Balance>>> {
        if coins.is_empty() {
            return None;
        }
        sort_coins(&mut coins);
        Some(coins)
    }

    fn deposit_liquidity(
        who: &AccountId,
        pool_account: &AccountId,
        liquidity: &[Coin<Self::Balance>],
    ) -> DispatchResult {
        for coin in liquidity {
            let currency_id = DenomToCurrency::try_convert(coin.denom.clone())
                .map_err(|_| DispatchError::Token(TokenError::UnknownAsset))?;
            Currencies::transfer(currency_id, who, pool_account, coin.amount)?;
        }
        Ok(())
    }
}
