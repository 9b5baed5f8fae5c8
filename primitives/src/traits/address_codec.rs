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

use crate::types::AddressError;
use alloc::vec::Vec;
use core::marker::PhantomData;
use frame_support::ensure;
use sp_core::crypto::{Ss58AddressFormat, Ss58Codec};
use sp_runtime::traits::Get;

/// Conversion between the textual and the native form of account addresses.
pub trait AddressCodec {
    type AccountId;

    /// Parses `address`, failing if it's empty, malformed or meant for another network.
    fn parse(address: &[u8]) -> Result<Self::AccountId, AddressError>;

    fn encode(account: &Self::AccountId) -> Vec<u8>;
}

/// SS58 addresses of the network identified by `Prefix`.
pub struct Ss58AddressCodec<AccountId, Prefix>(PhantomData<(AccountId, Prefix)>);

impl<AccountId, Prefix> AddressCodec for Ss58AddressCodec<AccountId, Prefix>
where
    AccountId: Ss58Codec,
    Prefix: Get<u16>,
{
    type AccountId = AccountId;

    fn parse(address: &[u8]) -> Result<AccountId, AddressError> {
        ensure!(!address.is_empty(), AddressError::Empty);
        let address = core::str::from_utf8(address).map_err(|_| AddressError::NotUtf8)?;
        let (account, format) =
            AccountId::from_ss58check_with_version(address).map_err(|_| AddressError::Malformed)?;
        ensure!(u16::from(format) == Prefix::get(), AddressError::WrongNetwork);
        Ok(account)
    }

    fn encode(account: &AccountId) -> Vec<u8> {
        account.to_ss58check_with_version(Ss58AddressFormat::custom(Prefix::get())).into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frame_support::parameter_types;
    use sp_core::crypto::AccountId32;
    use test_case::test_case;

    parameter_types! {
        const Prefix: u16 = 42;
    }

    type Codec = Ss58AddressCodec<AccountId32, Prefix>;

    #[test]
    fn parse_inverts_encode() {
        let account = AccountId32::new([7u8; 32]);
        let address = Codec::encode(&account);
        assert_eq!(Codec::parse(&address), Ok(account));
    }

    #[test]
    fn parse_fails_on_foreign_network() {
        let account = AccountId32::new([7u8; 32]);
        let address = account.to_ss58check_with_version(Ss58AddressFormat::custom(73));
        assert_eq!(Codec::parse(address.as_bytes()), Err(AddressError::WrongNetwork));
    }

    #[test]
    fn parse_fails_on_corrupted_checksum() {
        let mut address = Codec::encode(&AccountId32::new([7u8; 32]));
        let last = address.len() - 1;
        address[last] = if address[last] == b'a' { b'b' } else { b'a' };
        assert_eq!(Codec::parse(&address), Err(AddressError::Malformed));
    }

    #[test_case(b"", AddressError::Empty; "empty")]
    #[test_case(b"\xff\xfe", AddressError::NotUtf8; "not utf8")]
    #[test_case(b"not-a-valid-grammar!!", AddressError::Malformed; "garbage")]
    #[test_case(b"osmo1fqlr98d45v5ysqgp6h56kpujcj4cvsjnjq9nck", AddressError::Malformed; "bech32")]
    fn parse_fails(address: &[u8], expected: AddressError) {
        assert_eq!(Codec::parse(address), Err(expected));
    }
}
