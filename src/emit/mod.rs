/// Emit layer: record generation from a loaded store.
pub mod errors;
pub mod records;

pub use errors::EmitError;
pub use records::{EmitOptions, store_records};
