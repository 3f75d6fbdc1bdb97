#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("response does not contain an account balance")]
    MissingAccountPoint,

    #[error("invalid account balance: {value:?}")]
    InvalidNumber { value: String },
}

/// Decode the balance response of an unfiltered status query, a single
/// `AccountPoint=<points>` line.
pub fn decode_account_point(body: &str) -> Result<i32, TransportError> {
    for line in body.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("AccountPoint=") {
            return value
                .parse::<i32>()
                .map_err(|_| TransportError::InvalidNumber {
                    value: value.to_owned(),
                });
        }
    }
    Err(TransportError::MissingAccountPoint)
}
