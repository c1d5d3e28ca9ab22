/// Variable store: the fixture mapping of name to record, loaded from JSON.
pub mod errors;
pub mod load;
pub mod record;

pub use errors::StoreError;
pub use load::{StoreEntry, VariableStore, load_store, resolve_path};
pub use record::VariableData;
