use crate::domain::{
    BatchName, CallbackUrl, ClientId, MessageBody, RawPhoneNumber, RecipientName, SendMessage,
    SendOptions,
};

/// Query parameters for the single-send endpoint. The charset announcement
/// (`CharsetURL`) travels in the URL, everything else in the form body.
pub fn encode_send_query(options: &SendOptions) -> Vec<(String, String)> {
    vec![("CharsetURL".to_owned(), options.encoding.as_str().to_owned())]
}

pub fn encode_send_form(request: &SendMessage) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    let message = request.message();

    params.push((
        RawPhoneNumber::FIELD.to_owned(),
        message.destination.raw().to_owned(),
    ));
    if let Some(name) = message.recipient_name.as_ref() {
        params.push((RecipientName::FIELD.to_owned(), name.as_str().to_owned()));
    }
    if let Some(deliver_at) = message.deliver_at.as_ref() {
        params.push(("dlvtime".to_owned(), deliver_at.as_str().to_owned()));
    }
    if let Some(valid_until) = message.valid_until.as_ref() {
        params.push(("vldtime".to_owned(), valid_until.as_str().to_owned()));
    }
    params.push((
        MessageBody::FIELD.to_owned(),
        message.body.as_str().to_owned(),
    ));
    if let Some(callback) = message.callback_url.as_ref() {
        params.push((CallbackUrl::FIELD.to_owned(), callback.as_str().to_owned()));
    }
    if let Some(client_id) = message.client_id.as_ref() {
        params.push((ClientId::FIELD.to_owned(), client_id.as_str().to_owned()));
    }
    if let Some(batch_name) = request.options().batch_name.as_ref() {
        params.push((BatchName::FIELD.to_owned(), batch_name.as_str().to_owned()));
    }
    if !request.options().hide_deducted_points {
        params.push(("smsPointFlag".to_owned(), "1".to_owned()));
    }

    params
}
