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

use super::*;
use frame_support::traits::Hooks;
use parity_scale_codec::Encode;

fn sign_bytes<R: SignedRequest<Runtime>>(request: &R) -> Vec<u8> {
    request.sign_bytes()
}

#[test]
fn sign_bytes_is_deterministic() {
    let request = create_request(&ALICE, two_assets());
    assert_eq!(sign_bytes(&request), sign_bytes(&request.clone()));
    assert_eq!(sign_bytes(&request), (&b"create_balancer_pool"[..], &request).encode());
}

#[test]
fn sign_bytes_depends_on_the_request() {
    let request = create_request(&ALICE, two_assets());
    let mut other = request.clone();
    other.future_pool_governor = b"governance".to_vec();
    assert_ne!(sign_bytes(&request), sign_bytes(&other));
}

#[test]
fn sign_bytes_is_tagged_with_the_request_type() {
    let create = create_request(&ALICE, two_assets());
    let migrate = migrate_request(address_of(&ALICE), Coin::new(denom("gamm/pool/0"), _1));
    let tag_of = |bytes: Vec<u8>, len: usize| bytes[1..=len].to_vec();
    assert_eq!(tag_of(sign_bytes(&create), 20), b"create_balancer_pool".to_vec());
    assert_eq!(tag_of(sign_bytes(&migrate), 14), b"migrate_shares".to_vec());
}

#[test]
fn signers_returns_the_sender() {
    ExtBuilder::default().build().execute_with(|| {
        let ctx = ValidationContext::<Runtime>::new();
        let create = create_request(&BOB, two_assets());
        assert_eq!(create.signers(&ctx), Ok(vec![BOB]));
        let migrate = migrate_request(address_of(&ALICE), Coin::new(denom("gamm/pool/0"), _1));
        assert_eq!(migrate.signers(&ctx), Ok(vec![ALICE]));
    });
}

#[test]
fn signers_fails_on_invalid_sender() {
    ExtBuilder::default().build().execute_with(|| {
        let ctx = ValidationContext::<Runtime>::new();
        let mut request = create_request(&ALICE, two_assets());
        request.sender = b"osmo1fqlr98d45v5ysqgp6h56kpujcj4cvsjnjq9nck".to_vec();
        assert_eq!(
            request.signers(&ctx),
            Err(Error::<Runtime>::InvalidAddress(AddressError::Malformed).into())
        );
        request.sender = foreign_address(&ALICE);
        assert_eq!(
            request.signers(&ctx),
            Err(Error::<Runtime>::InvalidAddress(AddressError::WrongNetwork).into())
        );
    });
}

#[test]
fn validate_basic_is_idempotent() {
    ExtBuilder::default().build().execute_with(|| {
        let ctx = ValidationContext::<Runtime>::new();
        let valid = create_request(&ALICE, two_assets());
        let invalid = create_request(&ALICE, vec![asset("uosmo", _1, 1)]);
        for request in [valid, invalid] {
            assert_eq!(request.validate_basic(&ctx), request.validate_basic(&ctx));
        }
        assert_ok!(create_request(&ALICE, two_assets()).validate_basic(&ctx));
    });
}

#[test]
fn validate_basic_respects_context_limits() {
    ExtBuilder::default().build().execute_with(|| {
        let limits = PoolLimits { max_assets: 3, ..PoolLimits::of::<Runtime>() };
        let ctx = ValidationContext::<Runtime>::at(NOW).with_limits(limits);
        assert_eq!(ctx.now(), NOW);
        assert_ok!(create_request(&ALICE, n_assets(3)).validate_basic(&ctx));
        assert_eq!(
            create_request(&ALICE, n_assets(4)).validate_basic(&ctx),
            Err(Error::<Runtime>::InvalidPoolParams(PoolParamsError::TooManyAssets).into())
        );
    });
}

#[test]
fn integrity_test_passes_with_mock_config() {
    ExtBuilder::default().build().execute_with(|| {
        <Gamm as Hooks<u64>>::integrity_test();
    });
}
