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

use crate::types::MigrateSharesRequest;
use frame_support::{pallet_prelude::Member, Parameter};
use sp_runtime::DispatchError;

/// Engine which turns pool shares into a concentrated liquidity position.
pub trait SharesMigrationApi {
    type AccountId;
    type Balance;
    type PositionId: Member + Parameter;

    /// Migrates the shares described by `request` on behalf of `who` and returns the id of the
    /// new position. Implementations must leave no trace on error.
    fn migrate_shares(
        who: &Self::AccountId,
        request: &MigrateSharesRequest<Self::Balance>,
    ) -> Result<Self::PositionId, DispatchError>;
}
