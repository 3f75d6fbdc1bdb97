use crate::domain::validation::ValidationError;
use crate::domain::value::{
    BatchName, CallbackUrl, ClientId, Encoding, MessageBody, MessageId, RawPhoneNumber,
    RecipientName, Timestamp,
};

pub const BATCH_MAX_MESSAGES: usize = 500;

/// One outgoing SMS: a destination, the text, and the optional per-message
/// attributes Mitake understands.
#[derive(Debug, Clone)]
pub struct Message {
    pub destination: RawPhoneNumber,
    pub body: MessageBody,
    /// Caller-assigned correlation id. Optional for single sends, required
    /// for batch and long sends.
    pub client_id: Option<ClientId>,
    /// Scheduled delivery time (`dlvtime`). Omitted means immediate.
    pub deliver_at: Option<Timestamp>,
    /// Validity deadline (`vldtime`) after which delivery is abandoned.
    pub valid_until: Option<Timestamp>,
    pub recipient_name: Option<RecipientName>,
    /// Per-message delivery-receipt callback URL.
    pub callback_url: Option<CallbackUrl>,
}

impl Message {
    /// Create a message with only the required fields set.
    pub fn new(destination: RawPhoneNumber, body: MessageBody) -> Self {
        Self {
            destination,
            body,
            client_id: None,
            deliver_at: None,
            valid_until: None,
            recipient_name: None,
            callback_url: None,
        }
    }
}

/// Options shared by the send operations.
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub encoding: Encoding,
    /// Batch label (`objectID`) shown in the vendor's delivery reports.
    pub batch_name: Option<BatchName>,
    /// Suppress the deducted-point field (`smsPoint`) in the response.
    pub hide_deducted_points: bool,
}

/// Single-message send (`SmSend`).
#[derive(Debug, Clone)]
pub struct SendMessage {
    message: Message,
    options: SendOptions,
}

impl SendMessage {
    pub fn new(message: Message, options: SendOptions) -> Self {
        Self { message, options }
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

/// Multi-message batch send (`SmBulkSend`).
///
/// Every message must carry a [`ClientId`]: the vendor echoes it back as the
/// record header that ties each result to its message.
#[derive(Debug, Clone)]
pub struct SendBatch {
    messages: Vec<Message>,
    options: SendOptions,
}

impl SendBatch {
    pub fn new(messages: Vec<Message>, options: SendOptions) -> Result<Self, ValidationError> {
        if messages.is_empty() {
            return Err(ValidationError::NoMessages);
        }
        if messages.len() > BATCH_MAX_MESSAGES {
            return Err(ValidationError::TooManyMessages {
                max: BATCH_MAX_MESSAGES,
                actual: messages.len(),
            });
        }
        for (index, message) in messages.iter().enumerate() {
            if message.client_id.is_none() {
                return Err(ValidationError::MissingClientId { index });
            }
        }
        Ok(Self { messages, options })
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

/// Long-message send (`SmLongSend`) for texts beyond the single-SMS limit.
///
/// Shares the batch wire format, so the same [`ClientId`] rule applies.
#[derive(Debug, Clone)]
pub struct SendLong {
    messages: Vec<Message>,
    options: SendOptions,
}

impl SendLong {
    /// Send a single long message.
    pub fn one(message: Message, options: SendOptions) -> Result<Self, ValidationError> {
        Self::new(vec![message], options)
    }

    pub fn new(messages: Vec<Message>, options: SendOptions) -> Result<Self, ValidationError> {
        if messages.is_empty() {
            return Err(ValidationError::NoMessages);
        }
        if messages.len() > BATCH_MAX_MESSAGES {
            return Err(ValidationError::TooManyMessages {
                max: BATCH_MAX_MESSAGES,
                actual: messages.len(),
            });
        }
        for (index, message) in messages.iter().enumerate() {
            if message.client_id.is_none() {
                return Err(ValidationError::MissingClientId { index });
            }
        }
        Ok(Self { messages, options })
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

/// Delivery-status query (`SmQuery`) for previously sent messages.
#[derive(Debug, Clone)]
pub struct StatusQuery {
    ids: Vec<MessageId>,
    hide_deducted_points: bool,
}

impl StatusQuery {
    pub fn new(ids: Vec<MessageId>) -> Result<Self, ValidationError> {
        if ids.is_empty() {
            return Err(ValidationError::NoMessageIds);
        }
        Ok(Self {
            ids,
            hide_deducted_points: false,
        })
    }

    /// Query a single message id.
    pub fn one(id: MessageId) -> Self {
        Self {
            ids: vec![id],
            hide_deducted_points: false,
        }
    }

    /// Suppress the deducted-point column (`smsPoint`) in the response.
    pub fn hide_deducted_points(mut self, hide: bool) -> Self {
        self.hide_deducted_points = hide;
        self
    }

    pub fn ids(&self) -> &[MessageId] {
        &self.ids
    }

    pub fn deducted_points_hidden(&self) -> bool {
        self.hide_deducted_points
    }
}

/// Cancellation (`SmCancel`) of scheduled, not-yet-delivered messages.
#[derive(Debug, Clone)]
pub struct CancelScheduled {
    ids: Vec<MessageId>,
}

impl CancelScheduled {
    pub fn new(ids: Vec<MessageId>) -> Result<Self, ValidationError> {
        if ids.is_empty() {
            return Err(ValidationError::NoMessageIds);
        }
        Ok(Self { ids })
    }

    /// Cancel a single message id.
    pub fn one(id: MessageId) -> Self {
        Self { ids: vec![id] }
    }

    pub fn ids(&self) -> &[MessageId] {
        &self.ids
    }
}
