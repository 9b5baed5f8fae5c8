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
    constants::GOVERNANCE_GOVERNOR,
    traits::AddressCodec,
    types::{GovernorError, PoolGovernor},
};
use core::marker::PhantomData;
use frame_support::ensure;

/// Parser for the future governor descriptor of a pool creation request.
pub trait GovernorParser {
    type AccountId;

    fn parse(descriptor: &[u8]) -> Result<PoolGovernor<Self::AccountId>, GovernorError>;
}

/// Accepts the following descriptors:
///
/// - the empty string, which leaves the governor unset;
/// - `governance`;
/// - an address as understood by `Codec`;
/// - an address followed by `,` and a lock duration, e.g. `<address>,168h`.
///
/// Lock durations are sequences of integers with unit `h`, `m`, `s` or `ms`, like `1h30m`. A
/// duration of `0` needs no unit.
pub struct FutureGovernorParser<Codec>(PhantomData<Codec>);

impl<Codec> GovernorParser for FutureGovernorParser<Codec>
where
    Codec: AddressCodec,
{
    type AccountId = Codec::AccountId;

    fn parse(descriptor: &[u8]) -> Result<PoolGovernor<Self::AccountId>, GovernorError> {
        if descriptor.is_empty() {
            return Ok(PoolGovernor::Unset);
        }
        if descriptor == GOVERNANCE_GOVERNOR {
            return Ok(PoolGovernor::Governance);
        }
        ensure!(core::str::from_utf8(descriptor).is_ok(), GovernorError::NotUtf8);
        let mut segments = descriptor.splitn(3, |&c| c == b',');
        let address = segments.next().unwrap_or_default();
        let lock = segments.next();
        ensure!(segments.next().is_none(), GovernorError::TooManySegments);
        let account = Codec::parse(address).map_err(|_| GovernorError::InvalidAddress)?;
        match lock {
            None => Ok(PoolGovernor::Account(account)),
            Some(lock) => {
                let lock_duration = parse_lock_duration(lock)?;
                Ok(PoolGovernor::TimeLocked { account, lock_duration })
            }
        }
    }
}

/// Parses a duration like `1h30m` into milliseconds.
///
/// Accepts a stricter subset of Go's `time.ParseDuration`: only non-negative integers with unit
/// `h`, `m`, `s` or `ms`. Signs, fractions and the units `us` and `ns` are rejected.
pub fn parse_lock_duration(duration: &[u8]) -> Result<u64, GovernorError> {
    if duration == b"0" {
        return Ok(0);
    }
    ensure!(!duration.is_empty(), GovernorError::InvalidDuration);
    let mut total: u64 = 0;
    let mut rest = duration;
    while !rest.is_empty() {
        let digit_count = rest.iter().take_while(|c| c.is_ascii_digit()).count();
        ensure!(digit_count > 0, GovernorError::InvalidDuration);
        let (digits, tail) = rest.split_at(digit_count);
        let value = digits
            .iter()
            .try_fold(0u64, |acc, &c| acc.checked_mul(10)?.checked_add(u64::from(c - b'0')))
            .ok_or(GovernorError::InvalidDuration)?;
        let unit_len = tail.iter().take_while(|c| c.is_ascii_alphabetic()).count();
        let (unit, tail) = tail.split_at(unit_len);
        let millis_per_unit: u64 = match unit {
            b"ms" => 1,
            b"s" => 1_000,
            b"m" => 60_000,
            b"h" => 3_600_000,
            _ => return Err(GovernorError::InvalidDuration),
        };
        total = value
            .checked_mul(millis_per_unit)
            .and_then(|millis| total.checked_add(millis))
            .ok_or(GovernorError::InvalidDuration)?;
        rest = tail;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Ss58AddressCodec;
    use frame_support::parameter_types;
    use more_asserts::assert_lt;
    use sp_core::crypto::AccountId32;
    use test_case::test_case;

    parameter_types! {
        const Prefix: u16 = 42;
    }

    type Codec = Ss58AddressCodec<AccountId32, Prefix>;
    type Parser = FutureGovernorParser<Codec>;

    const ALICE: [u8; 32] = [1u8; 32];

    fn alice_address() -> Vec<u8> {
        Codec::encode(&AccountId32::new(ALICE))
    }

    fn with_suffix(suffix: &str) -> Vec<u8> {
        let mut descriptor = alice_address();
        descriptor.extend_from_slice(suffix.as_bytes());
        descriptor
    }

    #[test]
    fn parse_accepts_empty_descriptor() {
        assert_eq!(Parser::parse(b""), Ok(PoolGovernor::Unset));
    }

    #[test]
    fn parse_accepts_governance() {
        assert_eq!(Parser::parse(b"governance"), Ok(PoolGovernor::Governance));
    }

    #[test]
    fn parse_accepts_bare_address() {
        assert_eq!(
            Parser::parse(&alice_address()),
            Ok(PoolGovernor::Account(AccountId32::new(ALICE)))
        );
    }

    #[test_case(",168h", 168 * 3_600_000)]
    #[test_case(",1h30m", 5_400_000)]
    #[test_case(",90s", 90_000)]
    #[test_case(",250ms", 250)]
    #[test_case(",0", 0)]
    fn parse_accepts_time_locked_address(suffix: &str, lock_duration: u64) {
        assert_eq!(
            Parser::parse(&with_suffix(suffix)),
            Ok(PoolGovernor::TimeLocked { account: AccountId32::new(ALICE), lock_duration })
        );
    }

    #[test_case(b"not-a-valid-grammar!!", GovernorError::InvalidAddress; "garbage")]
    #[test_case(b"Governance", GovernorError::InvalidAddress; "case sensitive")]
    #[test_case(b"\xff", GovernorError::NotUtf8; "not utf8")]
    #[test_case(b",24h", GovernorError::InvalidAddress; "missing address")]
    fn parse_rejects(descriptor: &[u8], expected: GovernorError) {
        assert_eq!(Parser::parse(descriptor), Err(expected));
    }

    #[test_case(",", GovernorError::InvalidDuration; "empty duration")]
    #[test_case(",1.5h", GovernorError::InvalidDuration; "fraction")]
    #[test_case(",7d", GovernorError::InvalidDuration; "unknown unit")]
    #[test_case(",h", GovernorError::InvalidDuration; "missing number")]
    #[test_case(",10", GovernorError::InvalidDuration; "missing unit")]
    #[test_case(",-1h", GovernorError::InvalidDuration; "negative")]
    #[test_case(",24h,1h", GovernorError::TooManySegments; "two durations")]
    fn parse_rejects_suffix(suffix: &str, expected: GovernorError) {
        assert_eq!(Parser::parse(&with_suffix(suffix)), Err(expected));
    }

    #[test]
    fn parse_lock_duration_fails_on_overflow() {
        assert_eq!(
            parse_lock_duration(b"99999999999999999999ms"),
            Err(GovernorError::InvalidDuration)
        );
        assert_eq!(parse_lock_duration(b"5124095576031h"), Err(GovernorError::InvalidDuration));
        assert_eq!(parse_lock_duration(b"5124095576030h"), Ok(5_124_095_576_030 * 3_600_000));
    }

    #[test]
    fn parse_lock_duration_orders_units() {
        let units: Vec<u64> = ["999ms", "1s", "59s", "1m", "59m59s", "1h"]
            .iter()
            .map(|duration| parse_lock_duration(duration.as_bytes()).unwrap())
            .collect();
        for pair in units.windows(2) {
            assert_lt!(pair[0], pair[1]);
        }
    }
}
