multiversx_sc::imports!();

use common_errors::ERROR_CONFIG_NOT_FOUND;
use common_proxies::proxy_twap_source;
use common_structs::OracleConfig;

use crate::{storage, validation};

#[multiversx_sc::module]
pub trait OracleModule:
    storage::Storage + validation::ValidationModule + common_math::SharedMathModule
{
    fn require_oracle_config(
        &self,
        pool_id: u64,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> OracleConfig<Self::Api> {
        let mapper = self.oracle_config(pool_id, asset);
        require!(!mapper.is_empty(), ERROR_CONFIG_NOT_FOUND);

        mapper.get()
    }

    /// Raw Q128 TWAP of `asset` in the configured quote token over the configured period.
    fn get_twap_price_x128(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        config: &OracleConfig<Self::Api>,
    ) -> BigUint {
        let source = self.require_source();

        self.tx()
            .to(source)
            .typed(proxy_twap_source::TwapSourceProxy)
            .get_time_weighted_price(asset.clone(), config.quote_token.clone(), config.period)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    /// WAD price of `asset` for the given lending pool.
    fn get_normalized_price(&self, pool_id: u64, asset: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let config = self.require_oracle_config(pool_id, asset);
        let price_x128 = self.get_twap_price_x128(asset, &config);

        self.normalize_twap_price(&price_x128, config.quote_decimals)
    }
}
