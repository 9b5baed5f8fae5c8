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

use frame_support::PalletError;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

#[derive(Clone, Copy, Decode, Encode, Eq, PalletError, PartialEq, RuntimeDebug, TypeInfo)]
pub enum AddressError {
    /// No address was specified.
    Empty,
    /// The address isn't valid UTF-8.
    NotUtf8,
    /// The address couldn't be decoded.
    Malformed,
    /// The address belongs to a different network.
    WrongNetwork,
}

#[derive(Clone, Copy, Decode, Encode, Eq, PalletError, PartialEq, RuntimeDebug, TypeInfo)]
pub enum GovernorError {
    /// The descriptor isn't valid UTF-8.
    NotUtf8,
    /// The descriptor has more than one lock-duration suffix.
    TooManySegments,
    /// The descriptor doesn't contain a valid address.
    InvalidAddress,
    /// The lock-duration suffix couldn't be parsed.
    InvalidDuration,
}
