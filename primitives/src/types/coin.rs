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

use crate::{
    constants::POOL_SHARE_DENOM_PREFIX,
    types::{Denom, PoolId},
};
use alloc::format;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// An amount of a single token.
#[cfg_attr(feature = "std", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct Coin<Balance> {
    pub denom: Denom,
    pub amount: Balance,
}

impl<Balance> Coin<Balance> {
    pub fn new(denom: Denom, amount: Balance) -> Self {
        Coin { denom, amount }
    }
}

/// Checks that `denom` matches `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`.
pub fn is_valid_denom(denom: &[u8]) -> bool {
    let Some((first, rest)) = denom.split_first() else {
        return false;
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }
    if rest.len() < 2 || rest.len() > 127 {
        return false;
    }
    rest.iter().all(|c| c.is_ascii_alphanumeric() || matches!(c, b'/' | b':' | b'.' | b'_' | b'-'))
}

/// Sorts `coins` by denomination in byte order.
pub fn sort_coins<Balance>(coins: &mut [Coin<Balance>]) {
    coins.sort_by(|a, b| a.denom.as_slice().cmp(b.denom.as_slice()));
}

/// Denomination of the shares of the pool with id `pool_id`.
pub fn pool_share_denom(pool_id: PoolId) -> Denom {
    let mut denom = POOL_SHARE_DENOM_PREFIX.to_vec();
    denom.extend_from_slice(format!("{pool_id}").as_bytes());
    Denom::truncate_from(denom)
}

/// Inverse of [`pool_share_denom`]. Returns `None` if `denom` doesn't name pool shares.
pub fn parse_pool_share_denom(denom: &[u8]) -> Option<PoolId> {
    let digits = denom.strip_prefix(POOL_SHARE_DENOM_PREFIX)?;
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    // Leading zeros would give two denominations for the same pool.
    if digits.len() > 1 && digits[0] == b'0' {
        return None;
    }
    core::str::from_utf8(digits).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn denom(s: &str) -> Denom {
        Denom::truncate_from(s.as_bytes().to_vec())
    }

    fn denoms_of<Balance>(coins: &[Coin<Balance>]) -> Vec<&[u8]> {
        coins.iter().map(|coin| coin.denom.as_slice()).collect()
    }

    #[test_case("uosmo", true)]
    #[test_case("gamm/pool/1", true)]
    #[test_case("ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2", true)]
    #[test_case("a.b", true)]
    #[test_case("ab", false; "too short")]
    #[test_case("1atom", false; "leading digit")]
    #[test_case("uatom!", false; "forbidden character")]
    #[test_case("", false; "empty")]
    fn is_valid_denom_works(denom: &str, expected: bool) {
        assert_eq!(is_valid_denom(denom.as_bytes()), expected);
    }

    #[test]
    fn is_valid_denom_rejects_overlong_denoms() {
        let mut denom = b"u".to_vec();
        denom.extend(core::iter::repeat(b'a').take(127));
        assert!(is_valid_denom(&denom));
        denom.push(b'a');
        assert!(!is_valid_denom(&denom));
    }

    #[test]
    fn sort_coins_orders_by_denom() {
        let mut coins = vec![
            Coin::new(denom("uosmo"), 1u128),
            Coin::new(denom("uatom"), 2),
            Coin::new(denom("uion"), 3),
        ];
        sort_coins(&mut coins);
        assert_eq!(denoms_of(&coins), vec![&b"uatom"[..], b"uion", b"uosmo"]);
    }

    #[test_case(0)]
    #[test_case(7)]
    #[test_case(u128::MAX)]
    fn pool_share_denom_is_parsed_back(pool_id: PoolId) {
        let denom = pool_share_denom(pool_id);
        assert!(is_valid_denom(&denom));
        assert_eq!(parse_pool_share_denom(&denom), Some(pool_id));
    }

    #[test_case("uosmo"; "foreign token")]
    #[test_case("gamm/pool/"; "missing id")]
    #[test_case("gamm/pool/01"; "leading zero")]
    #[test_case("gamm/pool/1a"; "trailing garbage")]
    #[test_case("gamm/pool/340282366920938463463374607431768211456"; "overflow")]
    fn parse_pool_share_denom_rejects(denom: &str) {
        assert_eq!(parse_pool_share_denom(denom.as_bytes()), None);
    }
}
