// src/export/input.rs

use crate::errors::AppResult;
use crate::models::due_request::DueRequest;
use std::io::Read;

/// Read batch requests from CSV with a `submitted,hours` header.
///
/// Surrounding whitespace is trimmed from every field.
pub fn read_requests<R: Read>(reader: R) -> AppResult<Vec<DueRequest>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut requests = Vec::new();
    for row in rdr.deserialize() {
        requests.push(row?);
    }
    Ok(requests)
}
