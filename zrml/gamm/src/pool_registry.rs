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

use crate::{traits::PoolRegistry, Config, Error, Pallet, PoolCount, PoolOf, Pools};
use frame_support::ensure;
use gamm_primitives::{math::checked_ops_res::CheckedIncRes, types::PoolId};
use sp_runtime::DispatchError;

impl<T> PoolRegistry for Pallet<T>
where
    T: Config,
{
    type PoolId = PoolId;
    type Pool = PoolOf<T>;

    fn next_pool_id() -> PoolId {
        PoolCount::<T>::get()
    }

    fn register(pool: Self::Pool) -> Result<PoolId, DispatchError> {
        let pool_id = pool.id;
        ensure!(pool_id == Self::next_pool_id(), Error::<T>::PoolAlreadyExists);
        ensure!(!Pools::<T>::contains_key(pool_id), Error::<T>::PoolAlreadyExists);
        let pool_count = pool_id.checked_inc_res()?;
        Pools::<T>::insert(pool_id, pool);
        PoolCount::<T>::set(pool_count);
        Ok(pool_id)
    }

    fn get(pool_id: PoolId) -> Result<Self::Pool, DispatchError> {
        Pools::<T>::get(pool_id).ok_or(Error::<T>::PoolNotFound.into())
    }
}
