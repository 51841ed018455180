multiversx_sc::imports!();

use crate::storage;
use common_errors::ERROR_ALREADY_INITIALIZED;

#[multiversx_sc::module]
pub trait SourceModule: storage::Storage + common_events::EventsModule {
    /// Binds the adapter to its TWAP price source.
    ///
    /// The binding is permanent: the source is also the extension of every
    /// oracle pool validated by `setConfig`.
    ///
    /// # Errors
    /// - `ERROR_ALREADY_INITIALIZED`: A source is already bound.
    #[only_owner]
    #[endpoint(setSource)]
    fn set_source(&self, source: ManagedAddress) {
        let mapper = self.source_address();
        require!(mapper.is_empty(), ERROR_ALREADY_INITIALIZED);

        mapper.set(&source);
        self.source_set_event(&source);
    }

    /// Returns the bound price source, nothing while uninitialized.
    #[view(getSourceAddress)]
    fn get_source_address(&self) -> OptionalValue<ManagedAddress> {
        let mapper = self.source_address();
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }
}
