use std::io;

use mitake::{
    ClientId, Credentials, Message, MessageBody, MitakeClient, RawPhoneNumber, SendBatch,
    SendOptions,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let username = std::env::var("MITAKE_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MITAKE_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("MITAKE_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MITAKE_PASSWORD environment variable is required",
        )
    })?;
    let phones = std::env::var("MITAKE_PHONES").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MITAKE_PHONES environment variable is required (comma-separated)",
        )
    })?;
    let text = std::env::var("MITAKE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the mitake example.".to_owned());

    let body = MessageBody::new(text)?;
    let mut messages = Vec::new();
    for (index, phone) in phones.split(',').enumerate() {
        let mut message = Message::new(RawPhoneNumber::new(phone)?, body.clone());
        message.client_id = Some(ClientId::new(format!("demo-{index}"))?);
        messages.push(message);
    }

    let client = MitakeClient::new(Credentials::new(username, password)?)?;
    let response = client
        .send_batch(SendBatch::new(messages, SendOptions::default())?)
        .await?;

    for result in &response.results {
        println!(
            "msgid: {:?}, status: {:?}, duplicate: {}",
            result.message_id, result.status_code, result.duplicate
        );
    }
    println!("balance: {:?}", response.account_point);

    Ok(())
}
