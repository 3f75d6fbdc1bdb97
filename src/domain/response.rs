use serde::Serialize;

use crate::domain::value::{MessageId, RawPhoneNumber, StatusCode};

/// Outcome of one submitted message, one bracket record of a send response.
///
/// Every field is optional on the wire; a failed submission may come back
/// with only a `statuscode`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageResult {
    pub message_id: Option<MessageId>,
    pub status_code: Option<StatusCode>,
    /// Points deducted for this message (`smsPoint`).
    pub points: Option<i32>,
    /// Set when the vendor flagged the submission as a duplicate
    /// (`Duplicate=Y`).
    pub duplicate: bool,
}

/// Decoded send response: per-message results in submission order plus the
/// remaining account balance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageResponse {
    pub results: Vec<MessageResult>,
    /// Remaining account balance (`AccountPoint`) after the send.
    pub account_point: Option<i32>,
}

/// Delivery status of one queried message, one line of a status response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageStatus {
    pub message_id: MessageId,
    pub status_code: StatusCode,
    /// Vendor-reported status time in `YYYYMMDDHHMMSS` form, kept verbatim.
    pub status_time: String,
    /// Points deducted, present unless suppressed at query time.
    pub points: Option<i32>,
}

/// Decoded status-query response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageStatusResponse {
    pub statuses: Vec<MessageStatus>,
}

/// Outcome of one cancellation request.
///
/// The status code reuses the delivery table: `8` means the message was
/// already past cancellation, `9` confirms the reservation was canceled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanceledMessage {
    pub message_id: MessageId,
    pub status_code: StatusCode,
}

/// Delivery receipt pushed by Mitake to the callback URL.
///
/// Serializes with the vendor's field names so receipts can be stored or
/// forwarded as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageReceipt {
    #[serde(rename = "msgid")]
    pub message_id: MessageId,
    #[serde(rename = "dstaddr")]
    pub destination: RawPhoneNumber,
    /// Scheduled delivery time as reported back by the vendor.
    #[serde(rename = "dlvtime")]
    pub deliver_time: Option<String>,
    /// Time the final status was reached.
    #[serde(rename = "donetime")]
    pub done_time: Option<String>,
    #[serde(rename = "statuscode")]
    pub status_code: Option<StatusCode>,
    /// Free-form status string such as `DELIVRD`.
    #[serde(rename = "statusstr")]
    pub status_string: Option<String>,
    #[serde(rename = "StatusFlag")]
    pub status_flag: Option<String>,
}
