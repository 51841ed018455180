#![no_std]

use common_errors::ERROR_NO_PRICE_FOR_PERIOD;

multiversx_sc::imports!();

/// Stand-in for the TWAP price source. Prices are seeded per
/// `(base, quote, period)` so tests can observe which window was requested.
#[multiversx_sc::contract]
pub trait TwapMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setTimeWeightedPrice)]
    fn set_time_weighted_price(
        &self,
        base_token: EgldOrEsdtTokenIdentifier,
        quote_token: EgldOrEsdtTokenIdentifier,
        period: u64,
        price_x128: BigUint,
    ) {
        self.prices(&base_token, &quote_token, period)
            .set(price_x128);
    }

    #[view(getTimeWeightedPrice)]
    fn get_time_weighted_price(
        &self,
        base_token: EgldOrEsdtTokenIdentifier,
        quote_token: EgldOrEsdtTokenIdentifier,
        period: u64,
    ) -> BigUint {
        let mapper = self.prices(&base_token, &quote_token, period);
        require!(!mapper.is_empty(), ERROR_NO_PRICE_FOR_PERIOD);

        mapper.get()
    }

    #[storage_mapper("prices")]
    fn prices(
        &self,
        base_token: &EgldOrEsdtTokenIdentifier,
        quote_token: &EgldOrEsdtTokenIdentifier,
        period: u64,
    ) -> SingleValueMapper<BigUint>;
}
