multiversx_sc::imports!();

use common_structs::{OracleConfig, PoolKey};

use crate::{oracle, storage, validation};

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + common_math::SharedMathModule
{
    /// Returns the WAD price of an asset and its validity flag.
    ///
    /// The flag is always true: there is a single price source and no
    /// staleness check, so it says nothing about freshness.
    #[view(price)]
    fn price(&self, pool_id: u64, asset: EgldOrEsdtTokenIdentifier) -> MultiValue2<BigUint, bool> {
        let price = self.get_normalized_price(pool_id, &asset);

        (price, true).into()
    }

    #[view(getOracleConfig)]
    fn get_oracle_config(
        &self,
        pool_id: u64,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> OracleConfig<Self::Api> {
        self.require_oracle_config(pool_id, &asset)
    }

    /// Canonical oracle pool of a token pair, argument order does not matter.
    #[view(getPoolKey)]
    fn get_pool_key(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        quote_token: EgldOrEsdtTokenIdentifier,
    ) -> PoolKey<Self::Api> {
        self.oracle_pool_key(&asset, &quote_token)
    }

    /// Current liquidity of the oracle pool backing a registered config.
    /// Useful to monitor feeds updated through `setParameter`, which skips the check.
    #[view(getPoolLiquidity)]
    fn get_config_pool_liquidity(&self, pool_id: u64, asset: EgldOrEsdtTokenIdentifier) -> BigUint {
        let config = self.require_oracle_config(pool_id, &asset);
        let pool_key = self.oracle_pool_key(&asset, &config.quote_token);

        self.get_pool_liquidity(&pool_key)
    }

    #[view(decimalOffset)]
    fn get_decimal_offset(&self, quote_decimals: u8) -> BigUint {
        self.decimal_offset(quote_decimals)
    }
}
