multiversx_sc::imports!();

use common_errors::{
    ERROR_ILLIQUID_POOL, ERROR_INVALID_PERIOD, ERROR_INVALID_QUOTE_DECIMALS,
    ERROR_INVALID_QUOTE_TOKEN, ERROR_SOURCE_NOT_SET,
};
use common_proxies::proxy_amm_engine;
use common_structs::{OracleConfig, PoolKey};

use crate::storage;

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage {
    /// Structural checks of a submitted config, in order: quote token,
    /// quote decimals, period. No external calls happen here.
    fn validate_oracle_config(&self, config: &OracleConfig<Self::Api>) {
        require!(config.has_valid_quote_token(), ERROR_INVALID_QUOTE_TOKEN);
        require!(
            config.has_valid_quote_decimals(),
            ERROR_INVALID_QUOTE_DECIMALS
        );
        require!(config.has_valid_period(), ERROR_INVALID_PERIOD);
    }

    fn require_source(&self) -> ManagedAddress {
        let mapper = self.source_address();
        require!(!mapper.is_empty(), ERROR_SOURCE_NOT_SET);

        mapper.get()
    }

    /// Canonical oracle pool of `(asset, quote_token)`, extended by the bound source.
    fn oracle_pool_key(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        quote_token: &EgldOrEsdtTokenIdentifier,
    ) -> PoolKey<Self::Api> {
        let source = self.require_source();

        PoolKey::oracle_pool(asset, quote_token, &source)
    }

    fn get_pool_liquidity(&self, pool_key: &PoolKey<Self::Api>) -> BigUint {
        self.tx()
            .to(self.amm_engine_address().get())
            .typed(proxy_amm_engine::AmmEngineProxy)
            .get_pool_liquidity(pool_key.clone())
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    /// Fails when the oracle pool backing `(asset, quote_token)` has no liquidity,
    /// such a pool cannot produce a trustworthy TWAP.
    fn require_liquid_pool(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        quote_token: &EgldOrEsdtTokenIdentifier,
    ) {
        let pool_key = self.oracle_pool_key(asset, quote_token);
        let liquidity = self.get_pool_liquidity(&pool_key);

        require!(liquidity > BigUint::zero(), ERROR_ILLIQUID_POOL);
    }
}
