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

use crate::{traits::SignedRequest, types::ValidationContext, CoinOf, Config, PoolOf};
use alloc::vec::Vec;
use gamm_primitives::types::PoolId;
use sp_runtime::DispatchError;

/// A request which turns into a new pool once admitted.
pub trait PoolCreationRequest<T: Config>: SignedRequest<T> {
    /// The account which funds the pool.
    fn pool_creator(&self, ctx: &ValidationContext<T>) -> Result<T::AccountId, DispatchError>;

    /// The amounts the creator owes to the new pool, sorted by denomination. Fails with
    /// `EmptyLiquidity` if there are none.
    fn initial_liquidity(&self) -> Result<Vec<CoinOf<T>>, DispatchError>;

    /// Builds the pool with id `pool_id` at the time of `ctx`. The request is assumed to have
    /// passed `validate_basic`.
    fn create_pool(
        &self,
        ctx: &ValidationContext<T>,
        pool_id: PoolId,
    ) -> Result<PoolOf<T>, DispatchError>;
}
