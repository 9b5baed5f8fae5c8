// Copyright 2023-2025 Forecasting Technologies LTD.
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

//! Checked arithmetic which reports failures as `DispatchError::Arithmetic`.

use frame_support::dispatch::DispatchError;
use sp_arithmetic::{
    traits::{CheckedAdd, One},
    ArithmeticError,
};

pub trait CheckedAddRes
where
    Self: Sized,
{
    fn checked_add_res(&self, other: &Self) -> Result<Self, DispatchError>;
}

/// Increment by one, used for monotonic counters like the pool count.
pub trait CheckedIncRes
where
    Self: Sized,
{
    fn checked_inc_res(&self) -> Result<Self, DispatchError>;
}

impl<T> CheckedAddRes for T
where
    T: CheckedAdd,
{
    #[inline]
    fn checked_add_res(&self, other: &Self) -> Result<Self, DispatchError> {
        self.checked_add(other).ok_or(DispatchError::Arithmetic(ArithmeticError::Overflow))
    }
}

impl<T> CheckedIncRes for T
where
    T: CheckedAdd + One,
{
    #[inline]
    fn checked_inc_res(&self) -> Result<Self, DispatchError> {
        self.checked_add_res(&T::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0u128, 1u128, Ok(1); "zero")]
    #[test_case(u128::MAX - 1, 1u128, Ok(u128::MAX); "max")]
    #[test_case(
        u128::MAX,
        1u128,
        Err(DispatchError::Arithmetic(ArithmeticError::Overflow));
        "overflow"
    )]
    fn checked_add_res_works(lhs: u128, rhs: u128, expected: Result<u128, DispatchError>) {
        assert_eq!(lhs.checked_add_res(&rhs), expected);
    }

    #[test]
    fn checked_inc_res_stops_at_max() {
        assert_eq!(7u128.checked_inc_res(), Ok(8));
        assert!(u128::MAX.checked_inc_res().is_err());
    }
}
