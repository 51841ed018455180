multiversx_sc::imports!();

use crate::storage;
use crate::validation;
use common_constants::PERIOD_PARAMETER;
use common_errors::*;
use common_structs::OracleConfig;

/// Configuration of per-asset TWAP feeds.
///
/// Configs are keyed by `(pool_id, asset)` and can only be replaced, never
/// removed. Every change is committed as the last step of the call and
/// followed by its audit event; a failed call leaves storage untouched.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage + validation::ValidationModule + common_events::EventsModule
{
    /// Registers or replaces the TWAP config of an asset.
    ///
    /// # Arguments
    /// - `pool_id`: Lending pool the asset belongs to.
    /// - `asset`: Asset being priced.
    /// - `config`: Quote token, quote decimals and TWAP period.
    ///
    /// # Errors
    /// - `ERROR_INVALID_QUOTE_TOKEN`, `ERROR_INVALID_QUOTE_DECIMALS`,
    ///   `ERROR_INVALID_PERIOD`: Malformed config, checked before any external call.
    /// - `ERROR_SOURCE_NOT_SET`: No price source bound yet.
    /// - `ERROR_ILLIQUID_POOL`: The canonical oracle pool has zero liquidity.
    #[only_owner]
    #[endpoint(setConfig)]
    fn set_config(
        &self,
        pool_id: u64,
        asset: EgldOrEsdtTokenIdentifier,
        config: OracleConfig<Self::Api>,
    ) {
        self.validate_oracle_config(&config);
        self.require_liquid_pool(&asset, &config.quote_token);

        self.oracle_config(pool_id, &asset).set(&config);
        self.config_set_event(pool_id, &asset, &config);
    }

    /// Updates a single field of an existing config.
    ///
    /// Only `period` is supported. The name and value are checked before the
    /// key is looked up. The oracle pool liquidity is not checked again, use
    /// `setConfig` to revalidate a feed.
    ///
    /// # Errors
    /// - `ERROR_UNKNOWN_PARAMETER`: Unsupported parameter name.
    /// - `ERROR_INVALID_PARAMETER_VALUE`: Zero period.
    /// - `ERROR_CONFIG_NOT_FOUND`: Nothing registered for the key.
    #[only_owner]
    #[endpoint(setParameter)]
    fn set_parameter(
        &self,
        pool_id: u64,
        asset: EgldOrEsdtTokenIdentifier,
        name: ManagedBuffer,
        value: u64,
    ) {
        require!(
            name == ManagedBuffer::from(PERIOD_PARAMETER),
            ERROR_UNKNOWN_PARAMETER
        );
        require!(value != 0, ERROR_INVALID_PARAMETER_VALUE);

        let mapper = self.oracle_config(pool_id, &asset);
        require!(!mapper.is_empty(), ERROR_CONFIG_NOT_FOUND);

        let draft = mapper.get().with_period(value);

        mapper.set(&draft);
        self.parameter_set_event(pool_id, &asset, &name, value);
    }
}
