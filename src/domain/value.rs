use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Mitake account username.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Wire field name used by Mitake (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Mitake account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Wire field name used by Mitake (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Destination phone number as sent to Mitake (`dstaddr`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you
/// want parsing and normalization, go through [`PhoneNumber`] and convert it
/// into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Wire field name used by Mitake (`dstaddr`).
    pub const FIELD: &'static str = "dstaddr";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to Mitake.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for RawPhoneNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert a parsed phone number into the national digit form Mitake
    /// expects (`+886987654321` becomes `0987654321`).
    fn from(value: PhoneNumber) -> Self {
        let national = phonenumber::format(&value.parsed)
            .mode(phonenumber::Mode::National)
            .to_string();
        let digits: String = national.chars().filter(char::is_ascii_digit).collect();
        Self(digits)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form. Mitake
/// accounts serve Taiwanese numbers, so `country::Id::TW` is the usual
/// `default_region`.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Wire field name used by Mitake (`dstaddr`).
    pub const FIELD: &'static str = "dstaddr";

    /// Parse and normalize a phone number.
    ///
    /// `default_region` is used when the input does not contain an explicit
    /// country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`smbody`).
///
/// Invariants: non-empty after trimming, and free of raw line breaks. Mitake
/// represents a line break inside a message as ASCII `0x06`; raw `\n`/`\r`
/// would corrupt the `$$`-delimited batch wire format, so they are rejected
/// here. Use [`MessageBody::from_multiline`] to convert ordinary multi-line
/// text.
pub struct MessageBody(String);

impl MessageBody {
    /// Wire field name used by Mitake (`smbody`).
    pub const FIELD: &'static str = "smbody";

    /// The character Mitake uses to represent a line break inside a message.
    pub const LINE_BREAK: char = '\u{6}';

    /// Create validated message text. The value is preserved as provided.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if value.contains(['\n', '\r']) {
            return Err(ValidationError::RawLineBreak { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Create message text from multi-line input, replacing `\r\n`, `\n`,
    /// and `\r` with the vendor's [`LINE_BREAK`](Self::LINE_BREAK) character.
    pub fn from_multiline(value: impl Into<String>) -> Result<Self, ValidationError> {
        let encoded = value
            .into()
            .replace("\r\n", "\u{6}")
            .replace(['\n', '\r'], "\u{6}");
        Self::new(encoded)
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Caller-assigned correlation id (`clientid`).
///
/// Invariant: non-empty after trimming. Batch sends require one per message;
/// the vendor echoes it back as the bracket header of the matching response
/// record.
pub struct ClientId(String);

impl ClientId {
    /// Wire field name used by Mitake (`clientid`).
    pub const FIELD: &'static str = "clientid";

    /// Create a validated [`ClientId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated client id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Vendor-assigned message id (`msgid`) returned by send operations.
///
/// Invariant: non-empty after trimming. Single-send ids carry a leading `#`
/// (`#000000013`); the value is preserved exactly as received.
pub struct MessageId(String);

impl MessageId {
    /// Wire field name used by Mitake (`msgid`).
    pub const FIELD: &'static str = "msgid";

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated message id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for MessageId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Recipient display name (`destname`).
///
/// Invariant: non-empty after trimming.
pub struct RecipientName(String);

impl RecipientName {
    /// Wire field name used by Mitake (`destname`).
    pub const FIELD: &'static str = "destname";

    /// Create a validated [`RecipientName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery-receipt callback URL (`response`).
///
/// Invariant: an absolute `http` or `https` URL. Mitake calls this URL with
/// the receipt encoded as query parameters; see
/// [`parse_message_receipt`](crate::parse_message_receipt).
pub struct CallbackUrl(url::Url);

impl CallbackUrl {
    /// Wire field name used by Mitake (`response`).
    pub const FIELD: &'static str = "response";

    /// Create a validated [`CallbackUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let parsed = url::Url::parse(value.trim())
            .map_err(|_| ValidationError::InvalidCallbackUrl {
                input: value.clone(),
            })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidCallbackUrl { input: value });
        }
        Ok(Self(parsed))
    }

    /// The URL as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Borrow the parsed URL.
    pub fn url(&self) -> &url::Url {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Timestamp in the vendor's `YYYYMMDDHHMMSS` form.
///
/// Invariant: exactly 14 ASCII digits. The same format serves both the
/// scheduled delivery time (`dlvtime`) and the validity deadline (`vldtime`);
/// the wire field name is chosen where the request is encoded.
pub struct Timestamp(String);

impl Timestamp {
    /// Create a validated [`Timestamp`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.len() != 14 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidTimestamp { input: value });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the digits as sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Batch label (`objectID`) shown in the vendor's delivery reports.
///
/// Invariant: non-empty after trimming.
pub struct BatchName(String);

impl BatchName {
    /// Wire field name used by Mitake (`objectID`).
    pub const FIELD: &'static str = "objectID";

    /// Create a validated [`BatchName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated batch name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Character encoding of an outgoing request.
///
/// The current API revision defaults to UTF-8; older revisions spoke Big5,
/// and the vendor still accepts it when announced via `CharsetURL`
/// (single send) or `Encoding_PostIn` (batch and long send).
pub enum Encoding {
    #[default]
    Utf8,
    Big5,
}

impl Encoding {
    /// The charset label as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Big5 => "BIG5",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Mitake status code: a single vendor-defined character.
///
/// The character is preserved as-is even when it is unknown to this crate.
pub struct StatusCode(char);

impl StatusCode {
    /// Construct a status code from its wire character.
    pub const fn new(code: char) -> Self {
        Self(code)
    }

    /// The wire character as provided by Mitake.
    pub fn as_char(self) -> char {
        self.0
    }

    /// Map this code to a known variant, if one exists.
    pub fn known(self) -> Option<KnownStatusCode> {
        KnownStatusCode::from_code(self.0)
    }

    /// The vendor's zh-TW description for known codes.
    pub fn description(self) -> Option<&'static str> {
        self.known().map(KnownStatusCode::description)
    }

    /// Returns `true` if this status code is considered retryable by the crate.
    pub fn is_retryable(self) -> bool {
        matches!(
            self.known(),
            Some(kind) if kind.is_retryable()
        )
    }

    /// Returns `true` if this status code represents an authentication/authorization error.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self.known(),
            Some(kind) if kind.is_auth_error()
        )
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for StatusCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known Mitake status codes supported by this crate.
///
/// Letter codes (and `*`) report submission failures; digit codes report the
/// delivery lifecycle. Unknown characters are preserved as [`StatusCode`] and
/// return `None` from [`KnownStatusCode::from_code`].
pub enum KnownStatusCode {
    /// `*`
    ServiceError,
    /// `a` or `b`
    SendingTemporarilyUnavailable,
    /// `c`
    UsernameRequired,
    /// `d`
    PasswordRequired,
    /// `e`
    InvalidCredentials,
    /// `f`
    AccountExpired,
    /// `h`
    AccountDisabled,
    /// `k`
    InvalidConnectionAddress,
    /// `l`
    ConnectionLimitReached,
    /// `m`
    PasswordChangeRequired,
    /// `n`
    PasswordExpired,
    /// `p`
    PermissionDenied,
    /// `r`
    ServiceTemporarilyUnavailable,
    /// `s`
    AccountingFailure,
    /// `t`
    MessageExpired,
    /// `u`
    EmptyMessageBody,
    /// `v`
    InvalidPhoneNumber,
    /// `w`
    QueryLimitExceeded,
    /// `x`
    PayloadTooLarge,
    /// `y`
    InvalidParameter,
    /// `z`
    NoDataFound,
    /// `0`
    Scheduled,
    /// `1`, `2`, or `3`
    AcceptedByCarrier,
    /// `4`
    Delivered,
    /// `5`
    ContentError,
    /// `6`
    PhoneNumberError,
    /// `7`
    SmsDisabled,
    /// `8`
    DeliveryTimedOut,
    /// `9`
    ReservationCanceled,
}

impl KnownStatusCode {
    /// Convert a raw Mitake status character into a known variant.
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code {
            '*' => Self::ServiceError,
            'a' | 'b' => Self::SendingTemporarilyUnavailable,
            'c' => Self::UsernameRequired,
            'd' => Self::PasswordRequired,
            'e' => Self::InvalidCredentials,
            'f' => Self::AccountExpired,
            'h' => Self::AccountDisabled,
            'k' => Self::InvalidConnectionAddress,
            'l' => Self::ConnectionLimitReached,
            'm' => Self::PasswordChangeRequired,
            'n' => Self::PasswordExpired,
            'p' => Self::PermissionDenied,
            'r' => Self::ServiceTemporarilyUnavailable,
            's' => Self::AccountingFailure,
            't' => Self::MessageExpired,
            'u' => Self::EmptyMessageBody,
            'v' => Self::InvalidPhoneNumber,
            'w' => Self::QueryLimitExceeded,
            'x' => Self::PayloadTooLarge,
            'y' => Self::InvalidParameter,
            'z' => Self::NoDataFound,
            '0' => Self::Scheduled,
            '1' | '2' | '3' => Self::AcceptedByCarrier,
            '4' => Self::Delivered,
            '5' => Self::ContentError,
            '6' => Self::PhoneNumberError,
            '7' => Self::SmsDisabled,
            '8' => Self::DeliveryTimedOut,
            '9' => Self::ReservationCanceled,
            _ => return None,
        })
    }

    /// The vendor's zh-TW description of this status.
    pub fn description(self) -> &'static str {
        match self {
            Self::ServiceError => "系統發生錯誤，請聯絡三竹資訊窗口人員",
            Self::SendingTemporarilyUnavailable => "簡訊發送功能暫時停止服務，請稍候再試",
            Self::UsernameRequired => "請輸入帳號",
            Self::PasswordRequired => "請輸入密碼",
            Self::InvalidCredentials => "帳號、密碼錯誤",
            Self::AccountExpired => "帳號已過期",
            Self::AccountDisabled => "帳號已被停用",
            Self::InvalidConnectionAddress => "無效的連線位址",
            Self::ConnectionLimitReached => "帳號已達到同時連線數上限",
            Self::PasswordChangeRequired => "必須變更密碼，在變更密碼前，無法使用簡訊發送服務",
            Self::PasswordExpired => "密碼已逾期，在變更密碼前，將無法使用簡訊發送服務",
            Self::PermissionDenied => "沒有權限使用外部Http程式",
            Self::ServiceTemporarilyUnavailable => "系統暫停服務，請稍後再試",
            Self::AccountingFailure => "帳務處理失敗，無法發送簡訊",
            Self::MessageExpired => "簡訊已過期",
            Self::EmptyMessageBody => "簡訊內容不得為空白",
            Self::InvalidPhoneNumber => "無效的手機號碼",
            Self::QueryLimitExceeded => "查詢筆數超過上限",
            Self::PayloadTooLarge => "發送檔案過大，無法發送簡訊",
            Self::InvalidParameter => "參數錯誤",
            Self::NoDataFound => "查無資料",
            Self::Scheduled => "預約傳送中",
            Self::AcceptedByCarrier => "已送達業者",
            Self::Delivered => "已送達手機",
            Self::ContentError => "內容有錯誤",
            Self::PhoneNumberError => "門號有錯誤",
            Self::SmsDisabled => "簡訊已停用",
            Self::DeliveryTimedOut => "逾時無送達",
            Self::ReservationCanceled => "預約已取消",
        }
    }

    /// Whether this status is likely transient and can be retried.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::SendingTemporarilyUnavailable
                | Self::ServiceTemporarilyUnavailable
                | Self::ConnectionLimitReached
        )
    }

    /// Whether this status indicates invalid/expired credentials or permissions.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::UsernameRequired
                | Self::PasswordRequired
                | Self::InvalidCredentials
                | Self::AccountExpired
                | Self::AccountDisabled
                | Self::PasswordChangeRequired
                | Self::PasswordExpired
                | Self::PermissionDenied
        )
    }
}
