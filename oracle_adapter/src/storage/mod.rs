use common_structs::OracleConfig;
multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Get the AMM engine address
    /// This storage mapper holds the address of the AMM engine, used to check the liquidity of oracle pools.
    #[view(getAmmEngineAddress)]
    #[storage_mapper("amm_engine_address")]
    fn amm_engine_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Get the price source address
    /// Empty until `setSource` binds it; never overwritten afterwards.
    #[storage_mapper("source_address")]
    fn source_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Get the oracle config
    /// This storage mapper holds the TWAP configuration of an asset inside a lending pool.
    #[storage_mapper("oracle_config")]
    fn oracle_config(
        &self,
        pool_id: u64,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<OracleConfig<Self::Api>>;
}
