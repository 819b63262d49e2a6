mod record;
pub use self::record::{Record, RecordField};
