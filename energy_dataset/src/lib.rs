mod errors;
mod loader;
pub mod types;
pub use self::errors::Error;
pub use self::loader::{from_reader, load_records, parse_records};
pub use self::types::{Record, RecordField};
