//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::domain::{
    CancelScheduled, CanceledMessage, MessageResponse, MessageStatusResponse, Password, SendBatch,
    SendLong, SendMessage, StatusQuery, Username, ValidationError,
};

const DEFAULT_BASE_URL: &str = "https://smsb2c.mitake.com.tw/";
const DEFAULT_USER_AGENT: &str = concat!("mitake-rs/", env!("CARGO_PKG_VERSION"));

const SEND_PATH: &str = "b2c/mtk/SmSend";
const SEND_BATCH_PATH: &str = "b2c/mtk/SmBulkSend";
const SEND_LONG_PATH: &str = "b2c/mtk/SmLongSend";
const QUERY_PATH: &str = "b2c/mtk/SmQuery";
const CANCEL_PATH: &str = "b2c/mtk/SmCancel";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn post_text<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn post_text<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(
                    reqwest::header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Mitake account credentials.
///
/// Every API call authenticates with the username/password pair; the client
/// places them in the form body or the query string as the endpoint expects.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Create validated [`Credentials`].
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    fn push_params(&self, params: &mut Vec<(String, String)>) {
        params.push((Username::FIELD.to_owned(), self.username.as_str().to_owned()));
        params.push((Password::FIELD.to_owned(), self.password.as_str().to_owned()));
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`MitakeClient`].
///
/// Submission failures reported by Mitake itself arrive as per-message
/// status codes inside the decoded response, not as this error; inspect
/// [`MessageResult::status_code`](crate::MessageResult) for those.
pub enum MitakeError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The server answered 2xx with an empty body, which Mitake never does
    /// for a request it processed.
    #[error("unexpected empty response body")]
    EmptyBody,

    /// A request URL could not be built from the base URL.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`MitakeClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct MitakeClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl MitakeClientBuilder {
    /// Create a builder with the production base URL and default user-agent.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override the base URL all endpoint paths are resolved against.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build a [`MitakeClient`].
    pub fn build(self) -> Result<MitakeClient, MitakeError> {
        let base_url =
            url::Url::parse(&self.base_url).map_err(|_| ValidationError::InvalidBaseUrl {
                input: self.base_url.clone(),
            })?;

        let mut builder = reqwest::Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| MitakeError::Transport(Box::new(err)))?;

        Ok(MitakeClient {
            credentials: self.credentials,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Mitake B2C SMS client.
///
/// This type orchestrates request validation, wire encoding, and response
/// parsing for the `b2c/mtk` endpoints under
/// `https://smsb2c.mitake.com.tw/`. Delivery receipts pushed to a callback
/// URL are parsed separately with
/// [`parse_message_receipt`](crate::parse_message_receipt); no client is
/// needed for those.
pub struct MitakeClient {
    credentials: Credentials,
    base_url: url::Url,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for MitakeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MitakeClient")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl MitakeClient {
    /// Create a client for the production endpoints.
    ///
    /// For more customization, use [`MitakeClient::builder`].
    pub fn new(credentials: Credentials) -> Result<Self, MitakeError> {
        Self::builder(credentials).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> MitakeClientBuilder {
        MitakeClientBuilder::new(credentials)
    }

    /// Send a single SMS.
    ///
    /// Errors:
    /// - [`MitakeError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`MitakeError::EmptyBody`] when the server answers 2xx with nothing,
    /// - [`MitakeError::Parse`] when the response body is malformed.
    ///
    /// A vendor-side rejection (bad credentials, invalid number, ...) is a
    /// successful decode; it shows up as the status code of the single
    /// result.
    pub async fn send(&self, request: SendMessage) -> Result<MessageResponse, MitakeError> {
        let url = self.endpoint(
            SEND_PATH,
            crate::transport::encode_send_query(request.options()),
        )?;

        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_params(&mut params);
        params.extend(crate::transport::encode_send_form(&request));

        debug!("sending one message via {SEND_PATH}");
        let response = self
            .http
            .post_form(url.as_str(), params)
            .await
            .map_err(MitakeError::Transport)?;
        let body = check_http_response(response)?;

        let decoded = crate::transport::parse_message_response(&body)
            .map_err(|err| MitakeError::Parse(Box::new(err)))?;
        debug!("send response carried {} result(s)", decoded.results.len());
        Ok(decoded)
    }

    /// Send a batch of SMS messages in one request.
    ///
    /// Results come back in submission order; each also carries the
    /// message's `clientid`-keyed record, so order and id can be
    /// cross-checked.
    pub async fn send_batch(&self, request: SendBatch) -> Result<MessageResponse, MitakeError> {
        self.post_records(
            SEND_BATCH_PATH,
            crate::transport::encode_batch_query(request.options()),
            crate::transport::encode_batch_body(request.messages()),
            request.messages().len(),
        )
        .await
    }

    /// Send messages longer than a single SMS through the long-message
    /// endpoint. Takes the same record format as [`MitakeClient::send_batch`].
    pub async fn send_long(&self, request: SendLong) -> Result<MessageResponse, MitakeError> {
        self.post_records(
            SEND_LONG_PATH,
            crate::transport::encode_batch_query(request.options()),
            crate::transport::encode_batch_body(request.messages()),
            request.messages().len(),
        )
        .await
    }

    async fn post_records(
        &self,
        path: &str,
        query: Vec<(String, String)>,
        body: String,
        count: usize,
    ) -> Result<MessageResponse, MitakeError> {
        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_params(&mut params);
        params.extend(query);
        let url = self.endpoint(path, params)?;

        debug!("sending {count} message(s) via {path}");
        let response = self
            .http
            .post_text(url.as_str(), body)
            .await
            .map_err(MitakeError::Transport)?;
        let body = check_http_response(response)?;

        let decoded = crate::transport::parse_message_response(&body)
            .map_err(|err| MitakeError::Parse(Box::new(err)))?;
        debug!(
            "{path} response carried {} result(s)",
            decoded.results.len()
        );
        Ok(decoded)
    }

    /// Fetch the delivery status of previously sent messages.
    pub async fn query_status(
        &self,
        request: StatusQuery,
    ) -> Result<MessageStatusResponse, MitakeError> {
        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_params(&mut params);
        params.extend(crate::transport::encode_status_query(&request));
        let url = self.endpoint(QUERY_PATH, params)?;

        debug!("querying status of {} message id(s)", request.ids().len());
        let response = self
            .http
            .get(url.as_str())
            .await
            .map_err(MitakeError::Transport)?;
        let body = check_http_response(response)?;

        let decoded = crate::transport::decode_status_response(&body)
            .map_err(|err| MitakeError::Parse(Box::new(err)))?;
        debug!(
            "status response carried {} line(s)",
            decoded.statuses.len()
        );
        Ok(decoded)
    }

    /// Fetch the remaining account balance in points.
    pub async fn query_account_point(&self) -> Result<i32, MitakeError> {
        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_params(&mut params);
        let url = self.endpoint(QUERY_PATH, params)?;

        debug!("querying account balance");
        let response = self
            .http
            .get(url.as_str())
            .await
            .map_err(MitakeError::Transport)?;
        let body = check_http_response(response)?;

        let decoded = crate::transport::decode_account_point(&body)
            .map_err(|err| MitakeError::Parse(Box::new(err)))?;
        debug!("account balance decoded");
        Ok(decoded)
    }

    /// Cancel scheduled messages that have not been delivered yet.
    pub async fn cancel_scheduled(
        &self,
        request: CancelScheduled,
    ) -> Result<Vec<CanceledMessage>, MitakeError> {
        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_params(&mut params);
        params.extend(crate::transport::encode_cancel_query(&request));
        let url = self.endpoint(CANCEL_PATH, params)?;

        debug!("canceling {} scheduled message(s)", request.ids().len());
        let response = self
            .http
            .get(url.as_str())
            .await
            .map_err(MitakeError::Transport)?;
        let body = check_http_response(response)?;

        let decoded = crate::transport::decode_cancel_response(&body)
            .map_err(|err| MitakeError::Parse(Box::new(err)))?;
        debug!("cancel response carried {} result(s)", decoded.len());
        Ok(decoded)
    }

    fn endpoint(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<url::Url, MitakeError> {
        let mut url = self.base_url.join(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

fn check_http_response(response: HttpResponse) -> Result<String, MitakeError> {
    if !(200..=299).contains(&response.status) {
        let body = if response.body.trim().is_empty() {
            None
        } else {
            Some(response.body)
        };
        return Err(MitakeError::HttpStatus {
            status: response.status,
            body,
        });
    }
    if response.body.trim().is_empty() {
        return Err(MitakeError::EmptyBody);
    }
    Ok(response.body)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::domain::{
        ClientId, KnownStatusCode, Message, MessageBody, MessageId, RawPhoneNumber, SendOptions,
        StatusCode,
    };

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        last_method: Option<&'static str>,
        last_url: Option<String>,
        last_params: Vec<(String, String)>,
        last_body: Option<String>,
        response_status: u16,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last_method: None,
                    last_url: None,
                    last_params: Vec::new(),
                    last_body: None,
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        fn last_url(&self) -> Option<String> {
            self.state.lock().unwrap().last_url.clone()
        }

        fn last_method(&self) -> Option<&'static str> {
            self.state.lock().unwrap().last_method
        }

        fn last_params(&self) -> Vec<(String, String)> {
            self.state.lock().unwrap().last_params.clone()
        }

        fn last_body(&self) -> Option<String> {
            self.state.lock().unwrap().last_body.clone()
        }

        fn record(&self, method: &'static str, url: &str) -> (u16, String) {
            let mut state = self.state.lock().unwrap();
            state.last_method = Some(method);
            state.last_url = Some(url.to_owned());
            (state.response_status, state.response_body.clone())
        }
    }

    impl HttpTransport for FakeTransport {
        fn get<'a>(
            &'a self,
            url: &'a str,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, body) = self.record("GET", url);
                Ok(HttpResponse { status, body })
            })
        }

        fn post_form<'a>(
            &'a self,
            url: &'a str,
            params: Vec<(String, String)>,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, body) = self.record("POST", url);
                self.state.lock().unwrap().last_params = params;
                Ok(HttpResponse { status, body })
            })
        }

        fn post_text<'a>(
            &'a self,
            url: &'a str,
            body: String,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, response_body) = self.record("POST", url);
                self.state.lock().unwrap().last_body = Some(body);
                Ok(HttpResponse {
                    status,
                    body: response_body,
                })
            })
        }
    }

    fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }

    fn query_pairs(url: &str) -> Vec<(String, String)> {
        url::Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn make_client(transport: FakeTransport) -> MitakeClient {
        MitakeClient {
            credentials: Credentials::new("username", "password").unwrap(),
            base_url: url::Url::parse("https://example.invalid/").unwrap(),
            http: Arc::new(transport),
        }
    }

    fn message(body: &str) -> Message {
        Message::new(
            RawPhoneNumber::new("0987654321").unwrap(),
            MessageBody::new(body).unwrap(),
        )
    }

    #[tokio::test]
    async fn send_posts_form_with_credentials_and_parses_response() {
        let transport = FakeTransport::new(
            200,
            "[1]\nmsgid=#000000013\nstatuscode=1\nAccountPoint=126\nsmsPoint=1",
        );
        let client = make_client(transport.clone());

        let request = SendMessage::new(message("Hello, 世界"), SendOptions::default());
        let response = client.send(request).await.unwrap();

        assert_eq!(response.account_point, Some(126));
        assert_eq!(response.results.len(), 1);
        assert_eq!(
            response.results[0].message_id.as_ref().map(|id| id.as_str()),
            Some("#000000013")
        );
        assert_eq!(response.results[0].points, Some(1));

        let url = transport.last_url().unwrap();
        assert_eq!(transport.last_method(), Some("POST"));
        assert!(url.starts_with("https://example.invalid/b2c/mtk/SmSend?"));
        assert_param(&query_pairs(&url), "CharsetURL", "UTF-8");

        let params = transport.last_params();
        assert_param(&params, "username", "username");
        assert_param(&params, "password", "password");
        assert_param(&params, "dstaddr", "0987654321");
        assert_param(&params, "smbody", "Hello, 世界");
        assert_param(&params, "smsPointFlag", "1");
    }

    #[tokio::test]
    async fn send_batch_posts_records_with_query_credentials() {
        let transport = FakeTransport::new(
            200,
            "[0aab]\nmsgid=#1010079522\nstatuscode=1\nsmsPoint=1\n\
             [1aab]\nmsgid=#1010079523\nstatuscode=4\nsmsPoint=1\nAccountPoint=98",
        );
        let client = make_client(transport.clone());

        let mut first = message("Test1");
        first.client_id = Some(ClientId::new("0aab").unwrap());
        let mut second = message("Test2");
        second.client_id = Some(ClientId::new("1aab").unwrap());

        let request = SendBatch::new(vec![first, second], SendOptions::default()).unwrap();
        let response = client.send_batch(request).await.unwrap();

        assert_eq!(response.account_point, Some(98));
        assert_eq!(response.results.len(), 2);
        assert_eq!(
            response.results[1].status_code.and_then(StatusCode::known),
            Some(KnownStatusCode::Delivered)
        );

        let url = transport.last_url().unwrap();
        assert!(url.starts_with("https://example.invalid/b2c/mtk/SmBulkSend?"));
        let pairs = query_pairs(&url);
        assert_param(&pairs, "username", "username");
        assert_param(&pairs, "password", "password");
        assert_param(&pairs, "Encoding_PostIn", "UTF-8");
        assert_param(&pairs, "smsPointFlag", "1");

        assert_eq!(
            transport.last_body().as_deref(),
            Some("0aab$$0987654321$$$$$$$$$$Test1\r\n1aab$$0987654321$$$$$$$$$$Test2\r\n")
        );
    }

    #[tokio::test]
    async fn send_long_uses_the_long_message_endpoint() {
        let transport =
            FakeTransport::new(200, "[0aab]\nmsgid=#1010079522\nstatuscode=1\nAccountPoint=99");
        let client = make_client(transport.clone());

        let mut msg = message("a long message body");
        msg.client_id = Some(ClientId::new("0aab").unwrap());

        let request = SendLong::new(vec![msg], SendOptions::default()).unwrap();
        client.send_long(request).await.unwrap();

        let url = transport.last_url().unwrap();
        assert!(url.starts_with("https://example.invalid/b2c/mtk/SmLongSend?"));
    }

    #[tokio::test]
    async fn query_status_gets_with_credentials_and_parses_lines() {
        let transport = FakeTransport::new(
            200,
            "1010079522\t1\t20170101010010\t1\n1010079523\t4\t20170101010011\t1",
        );
        let client = make_client(transport.clone());

        let request = StatusQuery::new(vec![
            MessageId::new("1010079522").unwrap(),
            MessageId::new("1010079523").unwrap(),
        ])
        .unwrap();
        let response = client.query_status(request).await.unwrap();

        assert_eq!(response.statuses.len(), 2);
        assert_eq!(response.statuses[0].status_time, "20170101010010");
        assert_eq!(
            response.statuses[1].status_code.known(),
            Some(KnownStatusCode::Delivered)
        );

        let url = transport.last_url().unwrap();
        assert_eq!(transport.last_method(), Some("GET"));
        assert!(url.starts_with("https://example.invalid/b2c/mtk/SmQuery?"));
        let pairs = query_pairs(&url);
        assert_param(&pairs, "username", "username");
        assert_param(&pairs, "password", "password");
        assert_param(&pairs, "msgid", "1010079522,1010079523");
        assert_param(&pairs, "smsPointFlag", "1");
    }

    #[tokio::test]
    async fn query_account_point_parses_balance() {
        let transport = FakeTransport::new(200, "AccountPoint=100");
        let client = make_client(transport.clone());

        let points = client.query_account_point().await.unwrap();
        assert_eq!(points, 100);

        let url = transport.last_url().unwrap();
        assert!(url.starts_with("https://example.invalid/b2c/mtk/SmQuery?"));
        let pairs = query_pairs(&url);
        assert_param(&pairs, "username", "username");
        assert_param(&pairs, "password", "password");
        assert!(!pairs.iter().any(|(k, _)| k == "msgid"));
    }

    #[tokio::test]
    async fn cancel_scheduled_parses_results() {
        let transport = FakeTransport::new(200, "1010079522=8\n1010079523=9");
        let client = make_client(transport.clone());

        let request = CancelScheduled::new(vec![
            MessageId::new("1010079522").unwrap(),
            MessageId::new("1010079523").unwrap(),
        ])
        .unwrap();
        let canceled = client.cancel_scheduled(request).await.unwrap();

        assert_eq!(canceled.len(), 2);
        assert_eq!(
            canceled[1].status_code.known(),
            Some(KnownStatusCode::ReservationCanceled)
        );

        let url = transport.last_url().unwrap();
        assert_eq!(transport.last_method(), Some("GET"));
        assert!(url.starts_with("https://example.invalid/b2c/mtk/SmCancel?"));
        assert_param(&query_pairs(&url), "msgid", "1010079522,1010079523");
    }

    #[tokio::test]
    async fn non_success_http_status_is_an_error() {
        let transport = FakeTransport::new(500, "oops");
        let client = make_client(transport);

        let request = SendMessage::new(message("hello"), SendOptions::default());
        let err = client.send(request).await.unwrap_err();
        assert!(matches!(
            err,
            MitakeError::HttpStatus {
                status: 500,
                body: Some(_)
            }
        ));
    }

    #[tokio::test]
    async fn empty_error_body_is_mapped_to_none() {
        let transport = FakeTransport::new(503, "   ");
        let client = make_client(transport);

        let err = client.query_account_point().await.unwrap_err();
        assert!(matches!(
            err,
            MitakeError::HttpStatus {
                status: 503,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn empty_success_body_is_an_error() {
        let transport = FakeTransport::new(200, "");
        let client = make_client(transport);

        let request = SendMessage::new(message("hello"), SendOptions::default());
        let err = client.send(request).await.unwrap_err();
        assert!(matches!(err, MitakeError::EmptyBody));
    }

    #[tokio::test]
    async fn malformed_response_is_a_parse_error() {
        let transport = FakeTransport::new(200, "no records here");
        let client = make_client(transport);

        let request = SendMessage::new(message("hello"), SendOptions::default());
        let err = client.send(request).await.unwrap_err();
        assert!(matches!(err, MitakeError::Parse(_)));
    }

    #[test]
    fn credentials_are_validated() {
        assert!(Credentials::new("   ", "password").is_err());
        assert!(Credentials::new("username", "").is_err());
    }

    #[test]
    fn builder_applies_base_url_override() {
        let client = MitakeClient::builder(Credentials::new("username", "password").unwrap())
            .base_url("https://example.invalid/")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.base_url.as_str(), "https://example.invalid/");

        let err = MitakeClient::builder(Credentials::new("username", "password").unwrap())
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            MitakeError::Validation(ValidationError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn default_client_targets_production() {
        let client = MitakeClient::new(Credentials::new("username", "password").unwrap()).unwrap();
        assert_eq!(client.base_url.as_str(), DEFAULT_BASE_URL);
    }
}
