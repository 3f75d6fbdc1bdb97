use std::io;

use mitake::{Credentials, MessageId, MitakeClient, StatusQuery};

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
    let msgids = std::env::var("MITAKE_MSGIDS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MITAKE_MSGIDS environment variable is required (comma-separated)",
        )
    })?;

    let mut ids = Vec::new();
    for id in msgids.split(',') {
        ids.push(MessageId::new(id)?);
    }

    let client = MitakeClient::new(Credentials::new(username, password)?)?;
    let response = client.query_status(StatusQuery::new(ids)?).await?;

    for status in &response.statuses {
        println!(
            "msgid: {}, status: {} ({}), time: {}",
            status.message_id.as_str(),
            status.status_code,
            status.status_code.description().unwrap_or("unknown"),
            status.status_time
        );
    }

    Ok(())
}
