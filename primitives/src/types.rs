// Copyright 2022-2025 Forecasting Technologies LTD.
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

mod balancer_pool;
mod coin;
mod errors;
mod governor;
mod pool_asset;
mod pool_params;
mod requests;
mod type_aliases;

pub use balancer_pool::*;
pub use coin::*;
pub use errors::*;
pub use governor::*;
pub use pool_asset::*;
pub use pool_params::*;
pub use requests::*;
pub use type_aliases::*;
