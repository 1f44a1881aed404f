//! Debug and production views of a record.

use legible_core::ErrorRecord;
use legible_core::record::{MESSAGE, STATUS, TITLE};
use serde_json::{Map, Value};

/// Project a record for the caller.
///
/// Debug keeps everything. Otherwise only `title`, `status` (when the key is
/// present, whatever its value) and `message` are kept, in that order.
#[must_use]
pub fn project(record: ErrorRecord, debug: bool) -> ErrorRecord {
    if debug {
        return record;
    }

    let mut fields = record.into_fields();
    let mut reduced = Map::new();
    reduced.insert(
        TITLE.to_string(),
        fields.remove(TITLE).unwrap_or(Value::Null),
    );
    if let Some(status) = fields.remove(STATUS) {
        reduced.insert(STATUS.to_string(), status);
    }
    reduced.insert(
        MESSAGE.to_string(),
        fields.remove(MESSAGE).unwrap_or(Value::Null),
    );

    ErrorRecord::from_fields(reduced)
}
