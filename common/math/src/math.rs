#![no_std]

use common_constants::{
    MAX_PRICE_BITS, MAX_QUOTE_DECIMALS, MIN_QUOTE_DECIMALS, Q128_BITS, WAD,
};
use common_errors::{ERROR_INVALID_QUOTE_DECIMALS, ERROR_PRICE_OVERFLOW};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait SharedMathModule {
    fn wad(&self) -> BigUint {
        BigUint::from(WAD)
    }

    /// Denominator of a Q128 fraction, 2^128.
    fn q128(&self) -> BigUint {
        BigUint::from(1u64) << Q128_BITS
    }

    /// Exclusive upper bound of a normalized price, 2^256.
    fn max_price_bound(&self) -> BigUint {
        BigUint::from(1u64) << MAX_PRICE_BITS
    }

    /// `WAD / 10^quote_decimals`. Exact for every accepted precision.
    fn decimal_offset(&self, quote_decimals: u8) -> BigUint {
        require!(
            (MIN_QUOTE_DECIMALS..=MAX_QUOTE_DECIMALS).contains(&quote_decimals),
            ERROR_INVALID_QUOTE_DECIMALS
        );

        self.wad() / BigUint::from(10u64).pow(quote_decimals as u32)
    }

    /// Converts a Q128 TWAP ratio into a WAD price.
    ///
    /// `price = price_x128 * WAD * decimal_offset / 2^128`, multiplied out in
    /// full before the single flooring division. The result must fit the
    /// 256-bit price domain of the risk engine.
    fn normalize_twap_price(&self, price_x128: &BigUint, quote_decimals: u8) -> BigUint {
        let decimal_offset = self.decimal_offset(quote_decimals);

        let numerator = price_x128 * &self.wad() * decimal_offset;
        let price = numerator / self.q128();

        require!(price < self.max_price_bound(), ERROR_PRICE_OVERFLOW);

        price
    }
}
