//! Typed Rust client for the Mitake B2C SMS HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for the vendor's wire-format quirks, and a small client layer
//! orchestrating requests against `https://smsb2c.mitake.com.tw/`.
//!
//! ```rust,no_run
//! use mitake::{
//!     Credentials, Message, MessageBody, MitakeClient, RawPhoneNumber, SendMessage, SendOptions,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mitake::MitakeError> {
//!     let client = MitakeClient::new(Credentials::new("username", "password")?)?;
//!     let message = Message::new(
//!         RawPhoneNumber::new("0987654321")?,
//!         MessageBody::new("Hello, 世界")?,
//!     );
//!     let response = client.send(SendMessage::new(message, SendOptions::default())).await?;
//!     println!("account balance: {:?}", response.account_point);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, MitakeClient, MitakeClientBuilder, MitakeError};
pub use domain::{
    BATCH_MAX_MESSAGES, BatchName, CallbackUrl, CancelScheduled, CanceledMessage, ClientId,
    Encoding, KnownStatusCode, Message, MessageBody, MessageId, MessageReceipt, MessageResponse,
    MessageResult, MessageStatus, MessageStatusResponse, Password, PhoneNumber, RawPhoneNumber,
    RecipientName, SendBatch, SendLong, SendMessage, SendOptions, StatusCode, StatusQuery,
    Timestamp, Username, ValidationError,
};
pub use transport::{ReceiptError, parse_message_receipt};
