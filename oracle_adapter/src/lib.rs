#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod config;
pub mod oracle;
pub mod source;
pub mod storage;
pub mod validation;
pub mod views;

pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

/// TWAP oracle adapter for the lending risk engine.
///
/// Reads time-weighted prices from a single bound price source and normalizes
/// them to WAD. Every per-asset configuration is gated by a liquidity check of
/// the canonical oracle pool on the AMM engine.
#[multiversx_sc::contract]
pub trait OracleAdapter:
    config::ConfigModule
    + source::SourceModule
    + oracle::OracleModule
    + views::ViewsModule
    + validation::ValidationModule
    + storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Initializes the adapter.
    ///
    /// # Arguments
    /// - `amm_engine_address`: AMM engine queried for oracle pool liquidity.
    ///
    /// The price source is bound afterwards, once, through `setSource`.
    #[init]
    fn init(&self, amm_engine_address: &ManagedAddress) {
        require!(!amm_engine_address.is_zero(), ERROR_ADDRESS_IS_ZERO);
        self.amm_engine_address().set(amm_engine_address);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
