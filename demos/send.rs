use std::io;

use mitake::{
    Credentials, Message, MessageBody, MitakeClient, RawPhoneNumber, SendMessage, SendOptions,
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
    let phone = std::env::var("MITAKE_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MITAKE_PHONE environment variable is required",
        )
    })?;
    let text = std::env::var("MITAKE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the mitake example.".to_owned());

    let client = MitakeClient::new(Credentials::new(username, password)?)?;
    let message = Message::new(RawPhoneNumber::new(phone)?, MessageBody::new(text)?);

    let response = client
        .send(SendMessage::new(message, SendOptions::default()))
        .await?;
    for result in &response.results {
        println!(
            "msgid: {:?}, status: {:?}, points: {:?}",
            result.message_id, result.status_code, result.points
        );
    }
    println!("balance: {:?}", response.account_point);

    Ok(())
}
