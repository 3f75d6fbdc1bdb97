use crate::domain::{CancelScheduled, CanceledMessage, MessageId, StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("response contains no cancellation results")]
    EmptyResponse,

    #[error("line is not a msgid=statuscode pair: {line:?}")]
    InvalidLine { line: String },

    #[error("invalid message id: {value:?}")]
    InvalidMessageId { value: String },

    #[error("invalid status code: {value:?}")]
    InvalidStatusCode { value: String },
}

pub fn encode_cancel_query(request: &CancelScheduled) -> Vec<(String, String)> {
    vec![(
        MessageId::FIELD.to_owned(),
        request
            .ids()
            .iter()
            .map(MessageId::as_str)
            .collect::<Vec<_>>()
            .join(","),
    )]
}

/// Decode the cancellation response: one `msgid=statuscode` line per message.
/// The status reuses the delivery table, `9` for a canceled reservation and
/// `8` when the message was already past cancellation.
pub fn decode_cancel_response(body: &str) -> Result<Vec<CanceledMessage>, TransportError> {
    let mut canceled = Vec::new();

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split('=').collect();
        let (id, code) = match parts[..] {
            [id, code] => (id, code),
            _ => {
                return Err(TransportError::InvalidLine {
                    line: line.to_owned(),
                });
            }
        };

        let message_id = MessageId::new(id).map_err(|_| TransportError::InvalidMessageId {
            value: id.to_owned(),
        })?;
        let status_code = parse_status_code(code)?;
        canceled.push(CanceledMessage {
            message_id,
            status_code,
        });
    }

    if canceled.is_empty() {
        return Err(TransportError::EmptyResponse);
    }
    Ok(canceled)
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

#[cfg(test)]
mod tests {
    use crate::domain::KnownStatusCode;

    use super::*;

    #[test]
    fn encode_cancel_query_joins_ids() {
        let request = CancelScheduled::new(vec![
            MessageId::new("1010079522").unwrap(),
            MessageId::new("1010079523").unwrap(),
        ])
        .unwrap();

        assert_eq!(
            encode_cancel_query(&request),
            vec![("msgid".to_owned(), "1010079522,1010079523".to_owned())]
        );
    }

    #[test]
    fn decode_cancel_results() {
        let body = "1010079522=8\n1010079523=9";

        let canceled = decode_cancel_response(body).unwrap();
        assert_eq!(canceled.len(), 2);
        assert_eq!(canceled[0].message_id.as_str(), "1010079522");
        assert_eq!(
            canceled[0].status_code.known(),
            Some(KnownStatusCode::DeliveryTimedOut)
        );
        assert_eq!(canceled[1].message_id.as_str(), "1010079523");
        assert_eq!(
            canceled[1].status_code.known(),
            Some(KnownStatusCode::ReservationCanceled)
        );
    }

    #[test]
    fn decode_rejects_malformed_lines() {
        let err = decode_cancel_response("1010079522").unwrap_err();
        assert!(matches!(err, TransportError::InvalidLine { .. }));

        let err = decode_cancel_response("1010079522=9=9").unwrap_err();
        assert!(matches!(err, TransportError::InvalidLine { .. }));

        let err = decode_cancel_response("=9").unwrap_err();
        assert!(matches!(err, TransportError::InvalidMessageId { .. }));

        let err = decode_cancel_response("1010079522=99").unwrap_err();
        assert!(matches!(err, TransportError::InvalidStatusCode { .. }));
    }

    #[test]
    fn decode_rejects_empty_body() {
        assert!(matches!(
            decode_cancel_response("\n"),
            Err(TransportError::EmptyResponse)
        ));
    }
}
