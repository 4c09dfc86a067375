//! Naive CSV splitting of uploaded user files.
//!
//! # Design notes
//! - Lines are split on commas only: quoting is disabled on the reader, so a
//!   `"` is an ordinary byte and there is no escaping. This mirrors the
//!   upload convention the service documents, not RFC 4180.
//! - Column layout is positional: `column[0]` is ignored (the uploader's own
//!   id column), then `name`, `email`, `gender`. Columns past 3 are ignored.
//! - There is no header row and no schema validation beyond field count.

use crate::error::Error;
use crate::model::NewUser;

/// Parse an uploaded CSV file into a batch of unsaved users.
///
/// One record per line. The first line with fewer than 4 comma-separated
/// fields fails the parse with its 1-based line number; nothing from a file
/// that fails here gets persisted. Empty input is an empty batch.
///
/// # Errors
/// [`Error::MalformedRecord`] for a short line, [`Error::Csv`] if the reader
/// itself fails.
pub fn parse_users(data: &[u8]) -> Result<Vec<NewUser>, Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(data);

    let mut users = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        if rec.len() < 4 {
            return Err(Error::MalformedRecord {
                line: i + 1,
                fields: rec.len(),
            });
        }
        users.push(NewUser::new(&rec[1], &rec[2], &rec[3]));
    }
    Ok(users)
}
