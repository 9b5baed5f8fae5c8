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

#![cfg(feature = "mock")]

use crate as zrml_gamm;
use core::cell::RefCell;
use frame_support::{construct_runtime, traits::Everything};
use frame_system::mocking::MockBlock;
use gamm_primitives::{
    constants::{
        mock::{
            BlockHashCount, ExistentialDeposits, MaxAssets, MaxLocks, MaxReserves, MaxWeight,
            MinAssets, MinimumPeriod, Ss58Prefix,
        },
        GammPalletId, MaxExitFee, MaxSwapFee, BASE,
    },
    traits::{
        AddressCodec, FutureGovernorParser, MultiCurrencyLedger, SharesMigrationApi,
        Ss58AddressCodec,
    },
    types::{
        parse_pool_share_denom, AccountId, Amount, Balance, CurrencyId, Denom, Hash,
        MigrateSharesRequest, Moment,
    },
};
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup, TryConvert},
    BuildStorage, DispatchError,
};

pub const ALICE: AccountId = AccountId::new([1u8; 32]);
pub const BOB: AccountId = AccountId::new([2u8; 32]);
pub const CHARLIE: AccountId = AccountId::new([3u8; 32]);
pub const INITIAL_BALANCE: Balance = 1_000 * BASE;

/// Currency ids of pool shares are offset by this value.
pub const POOL_SHARE_CURRENCY_OFFSET: CurrencyId = 1_000;

/// Denominations known to the ledger, with their currency id being their index.
pub const DENOMS: [&str; 10] =
    ["uatom", "uosmo", "uion", "ustars", "ujuno", "uakt", "uregen", "uscrt", "ucre", "uumee"];

pub type AddressCodecOf = Ss58AddressCodec<AccountId, Ss58Prefix>;

pub struct DenomRegistry;

impl TryConvert<Denom, CurrencyId> for DenomRegistry {
    fn try_convert(denom: Denom) -> Result<CurrencyId, Denom> {
        if let Some(index) = DENOMS.iter().position(|known| known.as_bytes() == denom.as_slice())
        {
            return Ok(index as CurrencyId);
        }
        match parse_pool_share_denom(&denom).and_then(|pool_id| CurrencyId::try_from(pool_id).ok())
        {
            Some(pool_id) => Ok(POOL_SHARE_CURRENCY_OFFSET.saturating_add(pool_id)),
            None => Err(denom),
        }
    }
}

thread_local! {
    pub static MIGRATIONS: RefCell<Vec<(AccountId, MigrateSharesRequest<Balance>)>> =
        const { RefCell::new(Vec::new()) };
}

/// Records every successful migration. Fails unless the shares belong to an existing pool and
/// the amount is positive.
pub struct MockMigrationEngine;

impl SharesMigrationApi for MockMigrationEngine {
    type AccountId = AccountId;
    type Balance = Balance;
    type PositionId = u64;

    fn migrate_shares(
        who: &AccountId,
        request: &MigrateSharesRequest<Balance>,
    ) -> Result<u64, DispatchError> {
        let pool_id = parse_pool_share_denom(&request.shares_to_migrate.denom)
            .ok_or(DispatchError::Other("NotPoolShares"))?;
        let _ = Gamm::pool(pool_id)?;
        if request.shares_to_migrate.amount == 0 {
            return Err(DispatchError::Other("ZeroShares"));
        }
        MIGRATIONS.with(|migrations| {
            let mut migrations = migrations.borrow_mut();
            migrations.push((who.clone(), request.clone()));
            Ok(migrations.len() as u64)
        })
    }
}

pub fn migrations() -> Vec<(AccountId, MigrateSharesRequest<Balance>)> {
    MIGRATIONS.with(|migrations| migrations.borrow().clone())
}

pub fn address_of(account: &AccountId) -> Vec<u8> {
    AddressCodecOf::encode(account)
}

pub fn denom(s: &str) -> Denom {
    Denom::truncate_from(s.as_bytes().to_vec())
}

pub fn currency_of(s: &str) -> CurrencyId {
    DenomRegistry::try_convert(denom(s)).unwrap()
}

construct_runtime!(
    pub enum Runtime {
        Gamm: zrml_gamm,
        System: frame_system,
        Timestamp: pallet_timestamp,
        Tokens: orml_tokens,
    }
);

impl crate::Config for Runtime {
    type AddressCodec = AddressCodecOf;
    type GovernorParser = FutureGovernorParser<AddressCodecOf>;
    type Ledger = MultiCurrencyLedger<AccountId, Tokens, DenomRegistry>;
    type RuntimeEvent = RuntimeEvent;
    type SharesMigrator = MockMigrationEngine;
    type Timestamp = Timestamp;
    type MinAssets = MinAssets;
    type MaxAssets = MaxAssets;
    type MaxWeight = MaxWeight;
    type MaxSwapFee = MaxSwapFee;
    type MaxExitFee = MaxExitFee;
    type PalletId = GammPalletId;
    type WeightInfo = zrml_gamm::weights::WeightInfo<Runtime>;
}

impl frame_system::Config for Runtime {
    type AccountData = ();
    type AccountId = AccountId;
    type BaseCallFilter = Everything;
    type Block = MockBlock<Runtime>;
    type BlockHashCount = BlockHashCount;
    type BlockLength = ();
    type BlockWeights = ();
    type RuntimeCall = RuntimeCall;
    type RuntimeTask = RuntimeTask;
    type DbWeight = ();
    type RuntimeEvent = RuntimeEvent;
    type Hash = Hash;
    type Hashing = BlakeTwo256;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Nonce = u64;
    type MaxConsumers = frame_support::traits::ConstU32<16>;
    type MultiBlockMigrator = ();
    type OnKilledAccount = ();
    type OnNewAccount = ();
    type RuntimeOrigin = RuntimeOrigin;
    type PalletInfo = PalletInfo;
    type PreInherents = ();
    type PostInherents = ();
    type PostTransactions = ();
    type SingleBlockMigrations = ();
    type SS58Prefix = Ss58Prefix;
    type SystemWeightInfo = ();
    type Version = ();
    type OnSetCode = ();
}

impl orml_tokens::Config for Runtime {
    type Amount = Amount;
    type Balance = Balance;
    type CurrencyId = CurrencyId;
    type DustRemovalWhitelist = Everything;
    type RuntimeEvent = RuntimeEvent;
    type ExistentialDeposits = ExistentialDeposits;
    type MaxLocks = MaxLocks;
    type MaxReserves = MaxReserves;
    type CurrencyHooks = ();
    type ReserveIdentifier = [u8; 8];
    type WeightInfo = ();
}

impl pallet_timestamp::Config for Runtime {
    type MinimumPeriod = MinimumPeriod;
    type Moment = Moment;
    type OnTimestampSet = ();
    type WeightInfo = ();
}

pub struct ExtBuilder {
    balances: Vec<(AccountId, CurrencyId, Balance)>,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        let balances = [ALICE, BOB]
            .into_iter()
            .flat_map(|account| {
                (0..DENOMS.len())
                    .map(move |index| (account.clone(), index as CurrencyId, INITIAL_BALANCE))
            })
            .collect();
        Self { balances }
    }
}

impl ExtBuilder {
    pub fn build(self) -> sp_io::TestExternalities {
        let mut t = frame_system::GenesisConfig::<Runtime>::default().build_storage().unwrap();

        // see the logs in tests when using `RUST_LOG=debug cargo test -- --nocapture`
        let _ = env_logger::builder().is_test(true).try_init();

        orml_tokens::GenesisConfig::<Runtime> { balances: self.balances }
            .assimilate_storage(&mut t)
            .unwrap();

        let mut t: sp_io::TestExternalities = t.into();

        t.execute_with(|| {
            System::set_block_number(1);
            MIGRATIONS.with(|migrations| migrations.borrow_mut().clear());
        });

        t
    }
}
