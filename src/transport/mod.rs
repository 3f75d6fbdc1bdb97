//! Transport layer: wire-format details of the Mitake endpoints
//! (form/query encoding and line-oriented response parsing).

mod account;
mod cancel;
mod query_status;
mod receipt;
mod record;
mod send;
mod send_batch;

pub use account::decode_account_point;
pub use cancel::{decode_cancel_response, encode_cancel_query};
pub use query_status::{decode_status_response, encode_status_query};
pub use receipt::{ReceiptError, parse_message_receipt};
pub use record::parse_message_response;
pub use send::{encode_send_form, encode_send_query};
pub use send_batch::{encode_batch_body, encode_batch_query};
