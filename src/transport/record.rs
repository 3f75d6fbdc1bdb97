use crate::domain::{MessageId, MessageResponse, MessageResult, StatusCode};

/// Errors produced while parsing a bracket-record response body.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("response contains no records")]
    EmptyResponse,

    #[error("line outside of any record: {line:?}")]
    MissingRecordHeader { line: String },

    #[error("line is not a key=value pair: {line:?}")]
    InvalidKeyValuePair { line: String },

    #[error("invalid message id: {value:?}")]
    InvalidMessageId { value: String },

    #[error("invalid status code: {value:?}")]
    InvalidStatusCode { value: String },

    #[error("invalid numeric value for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Parse the bracket-record body returned by the send endpoints.
///
/// A record opens with a `[header]` line (the header carries the `clientid`
/// for batch sends, a sequence number otherwise) and continues with
/// `key=value` lines. `AccountPoint` is the account-level balance and can
/// appear inside any record; everything else belongs to the record it
/// appears in. Unknown keys are ignored, blank lines are skipped, and a bare
/// header is a valid empty record.
pub fn parse_message_response(body: &str) -> Result<MessageResponse, RecordError> {
    let mut response = MessageResponse::default();
    let mut current: Option<MessageResult> = None;

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if is_record_header(line) {
            if let Some(done) = current.take() {
                response.results.push(done);
            }
            current = Some(MessageResult::default());
            continue;
        }

        let Some(result) = current.as_mut() else {
            return Err(RecordError::MissingRecordHeader {
                line: line.to_owned(),
            });
        };

        let (key, value) = split_key_value(line)?;
        match key {
            "msgid" => {
                result.message_id =
                    Some(MessageId::new(value).map_err(|_| RecordError::InvalidMessageId {
                        value: value.to_owned(),
                    })?);
            }
            "statuscode" => {
                result.status_code = Some(parse_status_code(value)?);
            }
            "smsPoint" => {
                result.points = Some(parse_number("smsPoint", value)?);
            }
            "AccountPoint" => {
                response.account_point = Some(parse_number("AccountPoint", value)?);
            }
            "Duplicate" => {
                result.duplicate = value == "Y";
            }
            _ => {}
        }
    }

    match current {
        Some(done) => response.results.push(done),
        None => return Err(RecordError::EmptyResponse),
    }
    Ok(response)
}

/// A header is a full `[...]` line with non-empty content.
fn is_record_header(line: &str) -> bool {
    line.len() > 2 && line.starts_with('[') && line.ends_with(']')
}

fn split_key_value(line: &str) -> Result<(&str, &str), RecordError> {
    let parts: Vec<&str> = line.split('=').collect();
    match parts[..] {
        [key, value] => Ok((key, value)),
        _ => Err(RecordError::InvalidKeyValuePair {
            line: line.to_owned(),
        }),
    }
}

fn parse_status_code(value: &str) -> Result<StatusCode, RecordError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => Ok(StatusCode::new(code)),
        _ => Err(RecordError::InvalidStatusCode {
            value: value.to_owned(),
        }),
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<i32, RecordError> {
    value
        .parse::<i32>()
        .map_err(|_| RecordError::InvalidNumber {
            field,
            value: value.to_owned(),
        })
}
