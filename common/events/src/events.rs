#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("source_set")]
    fn source_set_event(&self, #[indexed] source: &ManagedAddress);

    // Whole-record replacement through setConfig
    #[event("config_set")]
    fn config_set_event(
        &self,
        #[indexed] pool_id: u64,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        config: &OracleConfig<Self::Api>,
    );

    // Single-field update through setParameter
    #[event("parameter_set")]
    fn parameter_set_event(
        &self,
        #[indexed] pool_id: u64,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] name: &ManagedBuffer,
        value: u64,
    );
}
