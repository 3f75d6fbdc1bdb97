use crate::domain::{BatchName, CallbackUrl, ClientId, Message, RecipientName, SendOptions, Timestamp};

/// Query parameters shared by the batch and long-message send endpoints.
/// These endpoints take a raw record body, so the credentials and options
/// all travel in the URL; the charset announcement is `Encoding_PostIn` here.
pub fn encode_batch_query(options: &SendOptions) -> Vec<(String, String)> {
    let mut params = vec![(
        "Encoding_PostIn".to_owned(),
        options.encoding.as_str().to_owned(),
    )];
    if let Some(batch_name) = options.batch_name.as_ref() {
        params.push((BatchName::FIELD.to_owned(), batch_name.as_str().to_owned()));
    }
    if !options.hide_deducted_points {
        params.push(("smsPointFlag".to_owned(), "1".to_owned()));
    }
    params
}

/// Encode messages as the `$$`-delimited record body:
/// `clientid$$dstaddr$$dlvtime$$vldtime$$destname$$response$$smbody`, one
/// record per line, CRLF line endings. Absent optional fields stay empty.
pub fn encode_batch_body(messages: &[Message]) -> String {
    let mut body = String::new();
    for message in messages {
        let fields = [
            message.client_id.as_ref().map_or("", ClientId::as_str),
            message.destination.raw(),
            message.deliver_at.as_ref().map_or("", Timestamp::as_str),
            message.valid_until.as_ref().map_or("", Timestamp::as_str),
            message.recipient_name.as_ref().map_or("", RecipientName::as_str),
            message.callback_url.as_ref().map_or("", CallbackUrl::as_str),
            message.body.as_str(),
        ];
        body.push_str(&fields.join("$$"));
        body.push_str("\r\n");
    }
    body
}

#[cfg(test)]
mod tests {
    use crate::domain::{Encoding, MessageBody, RawPhoneNumber};

    use super::*;

    fn message(client_id: &str, body: &str) -> Message {
        let mut message = Message::new(
            RawPhoneNumber::new("0987654321").unwrap(),
            MessageBody::new(body).unwrap(),
        );
        message.client_id = Some(ClientId::new(client_id).unwrap());
        message
    }

    #[test]
    fn encode_batch_query_default_options() {
        assert_eq!(
            encode_batch_query(&SendOptions::default()),
            vec![
                ("Encoding_PostIn".to_owned(), "UTF-8".to_owned()),
                ("smsPointFlag".to_owned(), "1".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_batch_query_with_batch_name_and_hidden_points() {
        let options = SendOptions {
            encoding: Encoding::Big5,
            batch_name: Some(BatchName::new("batch1").unwrap()),
            hide_deducted_points: true,
        };

        assert_eq!(
            encode_batch_query(&options),
            vec![
                ("Encoding_PostIn".to_owned(), "BIG5".to_owned()),
                ("objectID".to_owned(), "batch1".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_batch_body_leaves_absent_fields_empty() {
        let body = encode_batch_body(&[message("0aab", "Test1"), message("1aab", "Test2")]);
        assert_eq!(
            body,
            "0aab$$0987654321$$$$$$$$$$Test1\r\n1aab$$0987654321$$$$$$$$$$Test2\r\n"
        );
    }

    #[test]
    fn encode_batch_body_with_all_fields() {
        let mut msg = message("0aab", "Test1");
        msg.deliver_at = Some(Timestamp::new("20170101010000").unwrap());
        msg.valid_until = Some(Timestamp::new("20170101012300").unwrap());
        msg.recipient_name = Some(RecipientName::new("Bob").unwrap());
        msg.callback_url = Some(CallbackUrl::new("https://example.com/callback").unwrap());

        let body = encode_batch_body(&[msg]);
        assert_eq!(
            body,
            "0aab$$0987654321$$20170101010000$$20170101012300$$Bob$$https://example.com/callback$$Test1\r\n"
        );
    }

    #[test]
    fn encode_batch_body_mixed_fields() {
        let mut second = message("1aab", "Test2");
        second.recipient_name = Some(RecipientName::new("Bob").unwrap());

        let mut first = message("0aab", "Test1");
        first.deliver_at = Some(Timestamp::new("20170101010000").unwrap());
        first.valid_until = Some(Timestamp::new("20170101012300").unwrap());
        first.recipient_name = Some(RecipientName::new("Bob").unwrap());
        first.callback_url = Some(CallbackUrl::new("https://example.com/callback").unwrap());

        let body = encode_batch_body(&[first, second]);
        assert_eq!(
            body,
            "0aab$$0987654321$$20170101010000$$20170101012300$$Bob$$https://example.com/callback$$Test1\r\n\
             1aab$$0987654321$$$$$$Bob$$$$Test2\r\n"
        );
    }

    #[test]
    fn encode_batch_body_of_nothing_is_empty() {
        assert_eq!(encode_batch_body(&[]), "");
    }
}
