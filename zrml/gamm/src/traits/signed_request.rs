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

use crate::{types::ValidationContext, Config};
use alloc::{vec, vec::Vec};
use parity_scale_codec::Encode;
use sp_runtime::{DispatchError, DispatchResult};

/// A request which is authorized by the signature of its sender.
pub trait SignedRequest<T: Config>: Encode {
    /// Tag which separates the canonical bytes of different kinds of requests.
    const TYPE: &'static [u8];

    /// The sender address as submitted.
    fn sender(&self) -> &[u8];

    /// Stateless validation of the request. Fails with the error of the first failing check.
    fn validate_basic(&self, ctx: &ValidationContext<T>) -> DispatchResult;

    /// The deterministic byte representation which signers commit to.
    fn sign_bytes(&self) -> Vec<u8> {
        (Self::TYPE, self).encode()
    }

    /// Returns the accounts required to sign the request, which is exactly the sender. Fails
    /// with `InvalidAddress` if the sender can't be parsed.
    fn signers(&self, ctx: &ValidationContext<T>) -> Result<Vec<T::AccountId>, DispatchError> {
        Ok(vec![ctx.parse_address(self.sender())?])
    }
}
