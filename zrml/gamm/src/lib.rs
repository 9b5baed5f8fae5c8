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

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::type_complexity)]

extern crate alloc;

pub mod mock;
mod pool_registry;
mod requests;
mod tests;
pub mod traits;
pub mod types;
pub mod validation;
pub mod weights;

pub use pallet::*;

#[frame_support::pallet]
mod pallet {
    use crate::{
        traits::{PoolCreationRequest, PoolRegistry, SignedRequest},
        types::ValidationContext,
        weights::*,
    };
    use alloc::{vec, vec::Vec};
    use core::marker::PhantomData;
    use frame_support::{
        ensure,
        pallet_prelude::{Hooks, OptionQuery, StorageMap, StorageValue, ValueQuery},
        require_transactional,
        traits::{Get, IsType, StorageVersion, Time},
        transactional, PalletError, PalletId, Twox64Concat,
    };
    use frame_system::{
        ensure_signed,
        pallet_prelude::{BlockNumberFor, OriginFor},
    };
    use gamm_primitives::{
        constants::MAX_POOL_ASSETS,
        traits::{AddressCodec, GovernorParser, LiquidityLedger, SharesMigrationApi},
        types::{
            AddressError, BalancerPool, Coin, CreateBalancerPoolRequest, Denom, GovernorError,
            MigrateSharesRequest, PoolId,
        },
    };
    use parity_scale_codec::{Decode, Encode};
    use scale_info::TypeInfo;
    use sp_runtime::{
        traits::AccountIdConversion, DispatchError, DispatchResult, FixedU128, RuntimeDebug,
        SaturatedConversion,
    };

    pub(crate) const LOG_TARGET: &str = "runtime::zrml-gamm";

    /// The current storage version.
    const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    /// The smallest number of assets any runtime may allow in a pool.
    pub const MIN_POOL_ASSETS: u16 = 2;

    pub type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub type BalanceOf<T> = <<T as Config>::Ledger as LiquidityLedger>::Balance;
    pub type MomentOf<T> = <<T as Config>::Timestamp as Time>::Moment;
    pub type CoinOf<T> = Coin<BalanceOf<T>>;
    pub type PoolOf<T> = BalancerPool<AccountIdOf<T>, BalanceOf<T>, MomentOf<T>>;
    pub type CreateBalancerPoolRequestOf<T> =
        CreateBalancerPoolRequest<BalanceOf<T>, MomentOf<T>>;
    pub type MigrateSharesRequestOf<T> = MigrateSharesRequest<BalanceOf<T>>;
    pub(crate) type PositionIdOf<T> =
        <<T as Config>::SharesMigrator as SharesMigrationApi>::PositionId;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Converts the textual sender addresses of requests into accounts.
        type AddressCodec: AddressCodec<AccountId = Self::AccountId>;

        /// Interprets the future governor descriptor of pool creation requests.
        type GovernorParser: GovernorParser<AccountId = Self::AccountId>;

        /// Moves the initial liquidity of new pools.
        type Ledger: LiquidityLedger<AccountId = Self::AccountId>;

        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Engine which executes share migrations.
        type SharesMigrator: SharesMigrationApi<
                AccountId = Self::AccountId,
                Balance = BalanceOf<Self>,
            >;

        type Timestamp: Time;

        /// The minimum number of assets in a pool.
        #[pallet::constant]
        type MinAssets: Get<u16>;

        /// The maximum number of assets in a pool.
        #[pallet::constant]
        type MaxAssets: Get<u16>;

        /// Exclusive upper bound of asset weights.
        #[pallet::constant]
        type MaxWeight: Get<u128>;

        /// Exclusive upper bound of the swap fee.
        #[pallet::constant]
        type MaxSwapFee: Get<FixedU128>;

        /// Exclusive upper bound of the exit fee.
        #[pallet::constant]
        type MaxExitFee: Get<FixedU128>;

        /// Used to derive the accounts of the pools.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type WeightInfo: WeightInfoZeitgeist;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    #[pallet::storage]
    pub type Pools<T: Config> = StorageMap<_, Twox64Concat, PoolId, PoolOf<T>, OptionQuery>;

    /// Number of pools created so far; also the id of the next pool.
    #[pallet::storage]
    pub type PoolCount<T: Config> = StorageValue<_, PoolId, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        /// A weighted pool was created and funded with `initial_liquidity` by `who`.
        PoolCreated {
            who: AccountIdOf<T>,
            pool_id: PoolId,
            account_id: AccountIdOf<T>,
            share_denom: Denom,
            initial_liquidity: Vec<CoinOf<T>>,
        },
        /// Pool shares of `who` were migrated into the position `position_id`.
        SharesMigrated {
            who: AccountIdOf<T>,
            shares: CoinOf<T>,
            position_id: PositionIdOf<T>,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The sender address of the request is invalid.
        InvalidAddress(AddressError),
        /// The assets of the pool are malformed.
        InvalidAssetSet(AssetSetError),
        /// The pool parameters don't fit the assets of the pool.
        InvalidPoolParams(PoolParamsError),
        /// The future governor descriptor is invalid.
        InvalidGovernor(GovernorError),
        /// The pool wouldn't hold any liquidity.
        EmptyLiquidity,
        /// The request wasn't signed by its sender.
        SignerMismatch,
        /// The specified pool does not exist.
        PoolNotFound,
        /// A pool with the allocated id already exists.
        PoolAlreadyExists,
    }

    #[derive(Clone, Copy, Decode, Encode, Eq, PartialEq, PalletError, RuntimeDebug, TypeInfo)]
    pub enum AssetSetError {
        /// No assets were specified.
        Empty,
        /// A denomination is malformed.
        InvalidDenom,
        /// An asset has amount zero.
        ZeroAmount,
        /// An asset has weight zero.
        ZeroWeight,
        /// An asset weight is not below the maximum weight.
        WeightTooLarge,
        /// A denomination appears more than once.
        DuplicateDenom,
    }

    #[derive(Clone, Copy, Decode, Encode, Eq, PartialEq, PalletError, RuntimeDebug, TypeInfo)]
    pub enum PoolParamsError {
        /// The swap fee is not below the maximum swap fee.
        SwapFeeTooLarge,
        /// The exit fee is not below the maximum exit fee.
        ExitFeeTooLarge,
        /// There are less assets than required.
        TooFewAssets,
        /// There are more assets than allowed.
        TooManyAssets,
        /// The weight schedule ends when it starts.
        ZeroScheduleDuration,
        /// The end of the weight schedule is not representable.
        ScheduleOverflow,
        /// The weight schedule and the pool have a different number of assets.
        TargetWeightCountMismatch,
        /// The weight schedule and the pool have different denominations.
        TargetDenomMismatch,
        /// A target weight of the weight schedule is zero or too large.
        InvalidTargetWeight,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(T::MinAssets::get() >= MIN_POOL_ASSETS, "MinAssets must be at least 2");
            assert!(T::MinAssets::get() <= T::MaxAssets::get(), "MinAssets exceeds MaxAssets");
            assert!(
                u32::from(T::MaxAssets::get()) <= MAX_POOL_ASSETS,
                "MaxAssets exceeds the storage bound of pools"
            );
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create a weighted pool.
        ///
        /// The `request` must be sent by the origin. Its assets, pool parameters and future
        /// governor are validated; if any check fails, the call is rejected and nothing changes.
        /// Otherwise, the assets are transferred from the sender to the new pool's account and
        /// the pool is registered under a fresh id.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n)` where `n` is the number of assets in the pool or the number of
        /// target weights of the weight schedule, whichever is larger.
        #[pallet::call_index(0)]
        #[pallet::weight(
            T::WeightInfo::create_balancer_pool(request.max_asset_count().saturated_into())
        )]
        #[transactional]
        pub fn create_balancer_pool(
            origin: OriginFor<T>,
            request: CreateBalancerPoolRequestOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let _ = Self::do_create_balancer_pool(who, request)?;
            Ok(())
        }

        /// Migrate pool shares into a full-range concentrated liquidity position.
        ///
        /// Only the sender of the `request` is validated here. The migration itself is
        /// delegated to the configured engine. Errors of the engine are returned unchanged.
        ///
        /// # Weight
        ///
        /// Complexity: `O(o)` where `o` is the number of minimum amounts in `token_out_mins`.
        #[pallet::call_index(1)]
        #[pallet::weight(
            T::WeightInfo::migrate_shares(request.token_out_mins.len().saturated_into())
        )]
        #[transactional]
        pub fn migrate_shares(
            origin: OriginFor<T>,
            request: MigrateSharesRequestOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_migrate_shares(who, request)
        }
    }

    impl<T: Config> Pallet<T> {
        /// The account which holds the reserves of the pool `pool_id`.
        pub fn pool_account_id(pool_id: &PoolId) -> T::AccountId {
            T::PalletId::get().into_sub_account_truncating(*pool_id)
        }

        pub fn pool(pool_id: PoolId) -> Result<PoolOf<T>, DispatchError> {
            <Self as PoolRegistry>::get(pool_id)
        }

        #[require_transactional]
        pub(crate) fn do_create_balancer_pool(
            who: T::AccountId,
            request: CreateBalancerPoolRequestOf<T>,
        ) -> Result<PoolId, DispatchError> {
            let ctx = ValidationContext::<T>::new();
            request.validate_basic(&ctx).map_err(|err| {
                log::debug!(target: LOG_TARGET, "Rejected pool creation by {:?}: {:?}", who, err);
                err
            })?;
            Self::ensure_sole_signer(&request, &ctx, &who)?;

            let (pool, initial_liquidity) = Self::admit_pool(&request, &ctx)?;
            let creator = request.pool_creator(&ctx)?;
            T::Ledger::deposit_liquidity(&creator, &pool.account_id, &initial_liquidity)?;

            let account_id = pool.account_id.clone();
            let share_denom = pool.share_denom();
            let pool_id = <Self as PoolRegistry>::register(pool)?;

            Self::deposit_event(Event::PoolCreated {
                who: creator,
                pool_id,
                account_id,
                share_denom,
                initial_liquidity,
            });

            Ok(pool_id)
        }

        /// Turns a validated `request` into a pool and the liquidity the creator owes to it.
        /// Doesn't touch storage.
        pub(crate) fn admit_pool<R>(
            request: &R,
            ctx: &ValidationContext<T>,
        ) -> Result<(PoolOf<T>, Vec<CoinOf<T>>), DispatchError>
        where
            R: PoolCreationRequest<T>,
        {
            let initial_liquidity = request.initial_liquidity()?;
            let pool_id = <Self as PoolRegistry>::next_pool_id();
            let pool = request.create_pool(ctx, pool_id)?;
            Ok((pool, initial_liquidity))
        }

        #[require_transactional]
        pub(crate) fn do_migrate_shares(
            who: T::AccountId,
            request: MigrateSharesRequestOf<T>,
        ) -> DispatchResult {
            let ctx = ValidationContext::<T>::new();
            request.validate_basic(&ctx)?;
            Self::ensure_sole_signer(&request, &ctx, &who)?;

            let position_id =
                T::SharesMigrator::migrate_shares(&who, &request).map_err(|err| {
                    log::warn!(
                        target: LOG_TARGET,
                        "Migration of {:?} for {:?} failed: {:?}",
                        request.shares_to_migrate,
                        who,
                        err
                    );
                    err
                })?;

            Self::deposit_event(Event::SharesMigrated {
                who,
                shares: request.shares_to_migrate,
                position_id,
            });

            Ok(())
        }

        fn ensure_sole_signer<R>(
            request: &R,
            ctx: &ValidationContext<T>,
            who: &T::AccountId,
        ) -> DispatchResult
        where
            R: SignedRequest<T>,
        {
            ensure!(request.signers(ctx)? == vec![who.clone()], Error::<T>::SignerMismatch);
            Ok(())
        }
    }
}
