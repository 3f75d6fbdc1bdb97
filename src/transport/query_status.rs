use crate::domain::{MessageId, MessageStatus, MessageStatusResponse, StatusCode, StatusQuery};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("response contains no status lines")]
    EmptyResponse,

    #[error("malformed status line: {line:?}")]
    InvalidStatusLine { line: String },

    #[error("invalid message id: {value:?}")]
    InvalidMessageId { value: String },

    #[error("invalid status code: {value:?}")]
    InvalidStatusCode { value: String },

    #[error("invalid numeric value for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

pub fn encode_status_query(request: &StatusQuery) -> Vec<(String, String)> {
    let mut params = vec![(
        MessageId::FIELD.to_owned(),
        request
            .ids()
            .iter()
            .map(MessageId::as_str)
            .collect::<Vec<_>>()
            .join(","),
    )];
    if !request.deducted_points_hidden() {
        params.push(("smsPointFlag".to_owned(), "1".to_owned()));
    }
    params
}

/// Decode the status-query response: one tab-separated line per message,
/// `msgid<TAB>statuscode<TAB>statustime` with a fourth deducted-points column
/// unless it was suppressed at query time.
pub fn decode_status_response(body: &str) -> Result<MessageStatusResponse, TransportError> {
    let mut statuses = Vec::new();

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 && fields.len() != 4 {
            return Err(TransportError::InvalidStatusLine {
                line: line.to_owned(),
            });
        }

        let message_id =
            MessageId::new(fields[0]).map_err(|_| TransportError::InvalidMessageId {
                value: fields[0].to_owned(),
            })?;
        let status_code = parse_status_code(fields[1])?;
        let points = match fields.get(3) {
            Some(raw) => Some(raw.parse::<i32>().map_err(|_| TransportError::InvalidNumber {
                field: "smsPoint",
                value: (*raw).to_owned(),
            })?),
            None => None,
        };

        statuses.push(MessageStatus {
            message_id,
            status_code,
            status_time: fields[2].to_owned(),
            points,
        });
    }

    if statuses.is_empty() {
        return Err(TransportError::EmptyResponse);
    }
    Ok(MessageStatusResponse { statuses })
}

fn parse_status_code(value: &str) -> Result<StatusCode, TransportError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => Ok(StatusCode::new(code)),
        _ => Err(TransportError::InvalidStatusCode {
            value: value.to_owned(),
        }),
    }
}
