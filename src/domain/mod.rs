//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    BATCH_MAX_MESSAGES, CancelScheduled, Message, SendBatch, SendLong, SendMessage, SendOptions,
    StatusQuery,
};
pub use response::{
    CanceledMessage, MessageReceipt, MessageResponse, MessageResult, MessageStatus,
    MessageStatusResponse,
};
pub use validation::ValidationError;
pub use value::{
    BatchName, CallbackUrl, ClientId, Encoding, KnownStatusCode, MessageBody, MessageId, Password,
    PhoneNumber, RawPhoneNumber, RecipientName, StatusCode, Timestamp, Username,
};
