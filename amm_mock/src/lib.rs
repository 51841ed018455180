#![no_std]

use common_structs::PoolKey;

multiversx_sc::imports!();

/// Stand-in for the AMM engine: answers pool liquidity queries from values
/// seeded by tests. Unknown pools report zero liquidity, like uninitialized
/// pools on the real engine.
#[multiversx_sc::contract]
pub trait AmmMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setPoolLiquidity)]
    fn set_pool_liquidity(&self, pool_key: PoolKey<Self::Api>, liquidity: BigUint) {
        self.pool_liquidity(&pool_key).set(liquidity);
    }

    #[view(getPoolLiquidity)]
    fn get_pool_liquidity(&self, pool_key: PoolKey<Self::Api>) -> BigUint {
        self.pool_liquidity(&pool_key).get()
    }

    #[storage_mapper("pool_liquidity")]
    fn pool_liquidity(&self, pool_key: &PoolKey<Self::Api>) -> SingleValueMapper<BigUint>;
}
