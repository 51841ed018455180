#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::{
    MAX_QUOTE_DECIMALS, MAX_TICK_SPACING, MIN_QUOTE_DECIMALS, ORACLE_POOL_FEE,
};

/// Per-asset TWAP configuration, stored under `(pool_id, asset)`.
///
/// - `quote_token`: asset the price is denominated in.
/// - `quote_decimals`: precision of the quote asset, `1..=18`.
/// - `period`: TWAP window in seconds.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq)]
pub struct OracleConfig<M: ManagedTypeApi> {
    pub quote_token: EgldOrEsdtTokenIdentifier<M>,
    pub quote_decimals: u8,
    pub period: u64,
}

impl<M: ManagedTypeApi> OracleConfig<M> {
    pub fn new(quote_token: EgldOrEsdtTokenIdentifier<M>, quote_decimals: u8, period: u64) -> Self {
        OracleConfig {
            quote_token,
            quote_decimals,
            period,
        }
    }

    pub fn has_valid_quote_token(&self) -> bool {
        self.quote_token.is_valid()
    }

    pub fn has_valid_quote_decimals(&self) -> bool {
        (MIN_QUOTE_DECIMALS..=MAX_QUOTE_DECIMALS).contains(&self.quote_decimals)
    }

    pub fn has_valid_period(&self) -> bool {
        self.period > 0
    }

    /// Copy of the config with only the TWAP window replaced.
    pub fn with_period(&self, period: u64) -> Self {
        OracleConfig {
            quote_token: self.quote_token.clone(),
            quote_decimals: self.quote_decimals,
            period,
        }
    }
}

/// Identifies a pool on the AMM engine. Pools are keyed by an unordered
/// token pair, so `token0` always sorts before `token1`.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq)]
pub struct PoolKey<M: ManagedTypeApi> {
    pub token0: EgldOrEsdtTokenIdentifier<M>,
    pub token1: EgldOrEsdtTokenIdentifier<M>,
    pub fee: u64,
    pub tick_spacing: u32,
    pub extension: ManagedAddress<M>,
}

impl<M: ManagedTypeApi> PoolKey<M> {
    /// Canonical oracle pool for a token pair: zero fee, maximum tick spacing
    /// and the price source as pool extension. Argument order does not matter.
    pub fn oracle_pool(
        token_a: &EgldOrEsdtTokenIdentifier<M>,
        token_b: &EgldOrEsdtTokenIdentifier<M>,
        extension: &ManagedAddress<M>,
    ) -> Self {
        let (token0, token1) = if token_sort_key(token_a) <= token_sort_key(token_b) {
            (token_a.clone(), token_b.clone())
        } else {
            (token_b.clone(), token_a.clone())
        };

        PoolKey {
            token0,
            token1,
            fee: ORACLE_POOL_FEE,
            tick_spacing: MAX_TICK_SPACING,
            extension: extension.clone(),
        }
    }
}

/// Big-endian numeric value of the identifier bytes, a total order over tokens.
pub fn token_sort_key<M: ManagedTypeApi>(token: &EgldOrEsdtTokenIdentifier<M>) -> BigUint<M> {
    BigUint::from_bytes_be_buffer(&token.clone().into_name())
}
