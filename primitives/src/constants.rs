// Copyright 2021-2025 Forecasting Technologies LTD.
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

#![allow(
    // Constants parameters inside `parameter_types!` already check
    // arithmetic operations at compile time
    clippy::arithmetic_side_effects
)]

#[cfg(feature = "mock")]
pub mod mock;

use frame_support::{parameter_types, PalletId};
use sp_runtime::FixedU128;

// Definitions for time
pub const MILLISECS_PER_BLOCK: u32 = 12000;

// Definitions for currency
pub const BASE: u128 = 10_000_000_000;

/// Longest denomination accepted by the ledger.
pub const MAX_DENOM_LEN: u32 = 128;

/// Hard upper bound on the number of assets stored in a pool. The configurable maximum of a
/// runtime must not exceed this value.
pub const MAX_POOL_ASSETS: u32 = 16;

/// Descriptor which hands control over a pool to on-chain governance.
pub const GOVERNANCE_GOVERNOR: &[u8] = b"governance";

/// Prefix of the denomination of pool shares. The pool id follows in decimal.
pub const POOL_SHARE_DENOM_PREFIX: &[u8] = b"gamm/pool/";

// Gamm
parameter_types! {
    pub const GammPalletId: PalletId = PalletId(*b"zge/gamm");
    pub const MinPoolAssets: u16 = 2;
    pub const MaxPoolAssets: u16 = 8;
    // Exclusive. Weights are integers in `1..MaxUserSpecifiedWeight`.
    pub const MaxUserSpecifiedWeight: u128 = 1 << 20;
    // Exclusive. Fees are fractions in `[0, 1)`.
    pub MaxSwapFee: FixedU128 = FixedU128::from_u32(1);
    pub MaxExitFee: FixedU128 = FixedU128::from_u32(1);
}
