use url::form_urlencoded;

use crate::domain::{MessageId, MessageReceipt, RawPhoneNumber, StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    #[error("receipt query does not contain a message id")]
    MissingMessageId,

    #[error("receipt query does not contain a destination number")]
    MissingDestination,

    #[error("invalid status code: {value:?}")]
    InvalidStatusCode { value: String },
}

/// Parse a delivery receipt from the query string of a Mitake callback
/// request.
///
/// Mitake pushes receipts as a GET request against the `response` URL given
/// at send time, with the receipt fields encoded as query parameters. Pass
/// the raw query string (with or without the leading `?`); the path and the
/// rest of the request are not needed.
///
/// ```rust
/// use mitake::parse_message_receipt;
///
/// # fn main() -> Result<(), mitake::ReceiptError> {
/// let receipt = parse_message_receipt(
///     "msgid=8091234567&dstaddr=09001234567&statuscode=0&statusstr=DELIVRD",
/// )?;
/// assert_eq!(receipt.message_id.as_str(), "8091234567");
/// # Ok(())
/// # }
/// ```
pub fn parse_message_receipt(query: &str) -> Result<MessageReceipt, ReceiptError> {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut message_id = None;
    let mut destination = None;
    let mut deliver_time = None;
    let mut done_time = None;
    let mut status_code = None;
    let mut status_string = None;
    let mut status_flag = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let slot = match key.as_ref() {
            "msgid" => &mut message_id,
            "dstaddr" => &mut destination,
            "dlvtime" => &mut deliver_time,
            "donetime" => &mut done_time,
            "statuscode" => &mut status_code,
            "statusstr" => &mut status_string,
            "StatusFlag" => &mut status_flag,
            _ => continue,
        };
        // First occurrence wins.
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    let message_id = message_id
        .and_then(|raw| MessageId::new(raw).ok())
        .ok_or(ReceiptError::MissingMessageId)?;
    let destination = destination
        .and_then(|raw| RawPhoneNumber::new(raw).ok())
        .ok_or(ReceiptError::MissingDestination)?;
    let status_code = match status_code.filter(|raw| !raw.is_empty()) {
        Some(raw) => Some(parse_status_code(&raw)?),
        None => None,
    };

    Ok(MessageReceipt {
        message_id,
        destination,
        deliver_time,
        done_time,
        status_code,
        status_string,
        status_flag,
    })
}

fn parse_status_code(value: &str) -> Result<StatusCode, ReceiptError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => Ok(StatusCode::new(code)),
        _ => Err(ReceiptError::InvalidStatusCode {
            value: value.to_owned(),
        }),
    }
}
