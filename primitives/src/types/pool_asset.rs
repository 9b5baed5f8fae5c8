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

use crate::types::{Coin, Denom};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// A token deposited into a weighted pool together with its relative weight.
#[cfg_attr(feature = "std", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct PoolAsset<Balance> {
    pub token: Coin<Balance>,
    pub weight: u128,
}

impl<Balance> PoolAsset<Balance> {
    pub fn new(denom: Denom, amount: Balance, weight: u128) -> Self {
        PoolAsset { token: Coin::new(denom, amount), weight }
    }

    pub fn denom(&self) -> &[u8] {
        self.token.denom.as_slice()
    }
}

/// Weight of a denomination, without an amount attached. Used for weight schedules.
#[cfg_attr(feature = "std", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct DenomWeight {
    pub denom: Denom,
    pub weight: u128,
}

impl<Balance> From<&PoolAsset<Balance>> for DenomWeight {
    fn from(asset: &PoolAsset<Balance>) -> Self {
        DenomWeight { denom: asset.token.denom.clone(), weight: asset.weight }
    }
}
