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

//! Weights for zrml_gamm
//!
//! Hand-written estimates until benchmarks exist. Every asset of a new pool costs a read and a
//! write on both the sender's and the pool's token account.

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::Weight};

/// Trait containing the required functions for weight retrieval within
/// zrml_gamm
pub trait WeightInfoZeitgeist {
    fn create_balancer_pool(a: u32) -> Weight;
    fn migrate_shares(o: u32) -> Weight;
}

/// Weight functions for zrml_gamm
pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoZeitgeist for WeightInfo<T> {
    /// Storage: `Gamm::PoolCount` (r:1 w:1)
    /// Storage: `Gamm::Pools` (r:1 w:1)
    /// Storage: `Timestamp::Now` (r:1 w:0)
    /// Storage: `Tokens::Accounts` (r:2*a w:2*a)
    /// The range of component `a` is `[2, 8]`.
    fn create_balancer_pool(a: u32) -> Weight {
        Weight::from_parts(48_000_000, 3_600)
            .saturating_add(Weight::from_parts(21_000_000, 2_600).saturating_mul(a.into()))
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(a.into())))
            .saturating_add(T::DbWeight::get().writes(2))
            .saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(a.into())))
    }
    /// Storage: `Timestamp::Now` (r:1 w:0)
    /// The range of component `o` is `[0, 8]`.
    fn migrate_shares(o: u32) -> Weight {
        Weight::from_parts(35_000_000, 1_500)
            .saturating_add(Weight::from_parts(1_200_000, 0).saturating_mul(o.into()))
            .saturating_add(T::DbWeight::get().reads(1))
    }
}
