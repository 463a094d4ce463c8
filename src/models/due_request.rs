use serde::Deserialize;

/// One row of a batch input file (`submitted,hours`).
///
/// Both columns are kept as text so that a malformed row is reported
/// on its own instead of failing the whole file.
#[derive(Debug, Clone, Deserialize)]
pub struct DueRequest {
    pub submitted: String,
    pub hours: String,
}

impl DueRequest {
    pub fn new(submitted: impl Into<String>, hours: impl Into<String>) -> Self {
        Self {
            submitted: submitted.into(),
            hours: hours.into(),
        }
    }
}
