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

use crate::{traits::SignedRequest, types::ValidationContext, Config, MigrateSharesRequestOf};
use sp_runtime::DispatchResult;

impl<T: Config> SignedRequest<T> for MigrateSharesRequestOf<T> {
    const TYPE: &'static [u8] = b"migrate_shares";

    fn sender(&self) -> &[u8] {
        &self.sender
    }

    /// Only the sender is checked; the shares and minimum amounts are validated by the
    /// migration engine.
    fn validate_basic(&self, ctx: &ValidationContext<T>) -> DispatchResult {
        ctx.parse_address(&self.sender)?;
        Ok(())
    }
}
