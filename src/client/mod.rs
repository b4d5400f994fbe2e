//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{
    AppId, AppKey, Nonce, ResultCode, SendFileVoice, SendFileVoiceResponse, UnixTimestamp,
    ValidationError,
};

const DEFAULT_SEND_FILE_VOICE_ENDPOINT: &str =
    "https://cloud.tim.qq.com/v5/tlsvoicesvr/sendfvoice";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a url::Url,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a url::Url,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url.as_str())
                .header(reqwest::header::CONTENT_TYPE, "application/json")
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
/// Application credentials issued by the Tencent Cloud console.
///
/// The pair is immutable and shared by every call made through a [`VoiceSender`].
pub struct Credentials {
    app_id: AppId,
    app_key: AppKey,
}

impl Credentials {
    /// Create credentials; the key must be non-empty after trimming.
    pub fn new(app_id: u64, app_key: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            app_id: AppId::new(app_id),
            app_key: AppKey::new(app_key)?,
        })
    }

    pub fn app_id(&self) -> AppId {
        self.app_id
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`VoiceSender`].
///
/// This error preserves:
/// - request encoding failures,
/// - HTTP-level failures (non-2xx status or transport failures),
/// - parse failures of the response body.
pub enum QcloudError {
    /// Request body could not be encoded as JSON.
    #[error("serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// Provider answered with a non-zero `result`. Only produced by
    /// [`SendFileVoiceResponse::error_for_result`].
    #[error("API error {code:?}: {message}")]
    Api { code: ResultCode, message: String },

    /// The configured endpoint is not a valid absolute URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl SendFileVoiceResponse {
    /// Turn a non-zero `result` into [`QcloudError::Api`]; successes pass through.
    pub fn error_for_result(self) -> Result<Self, QcloudError> {
        if self.is_success() {
            return Ok(self);
        }
        Err(QcloudError::Api {
            code: self.result,
            message: self.errmsg,
        })
    }
}

#[derive(Debug, Clone)]
/// Builder for [`VoiceSender`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct VoiceSenderBuilder {
    credentials: Credentials,
    endpoint: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl VoiceSenderBuilder {
    /// Create a builder with the default endpoint and a 60 second timeout.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_SEND_FILE_VOICE_ENDPOINT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the `sendfvoice` endpoint URL. `sdkappid` and `random` are appended per call.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`VoiceSender`].
    pub fn build(self) -> Result<VoiceSender, QcloudError> {
        let endpoint = url::Url::parse(&self.endpoint)?;

        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| QcloudError::Transport(Box::new(err)))?;

        Ok(VoiceSender {
            credentials: self.credentials,
            endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Sends file voice notifications: a pre-uploaded audio file played to a phone number.
///
/// Each [`VoiceSender::send`] is one signed JSON `POST` to
/// `https://cloud.tim.qq.com/v5/tlsvoicesvr/sendfvoice`. Clones share the HTTP client.
pub struct VoiceSender {
    credentials: Credentials,
    endpoint: url::Url,
    http: Arc<dyn HttpTransport>,
}

impl VoiceSender {
    /// Create a sender using the default endpoint and timeout.
    ///
    /// For more customization, use [`VoiceSender::builder`].
    pub fn new(credentials: Credentials) -> Result<Self, QcloudError> {
        VoiceSenderBuilder::new(credentials).build()
    }

    /// Start building a sender with custom settings.
    pub fn builder(credentials: Credentials) -> VoiceSenderBuilder {
        VoiceSenderBuilder::new(credentials)
    }

    /// Play `request.fid()` to `request.tel()`.
    ///
    /// The provider's `result` is returned as parsed, including failures; use
    /// [`SendFileVoiceResponse::error_for_result`] to turn those into errors.
    ///
    /// Errors:
    /// - [`QcloudError::Serialize`] if the body cannot be encoded,
    /// - [`QcloudError::Transport`] for network failures and timeouts,
    /// - [`QcloudError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`QcloudError::Parse`] when the body is not the expected JSON.
    pub async fn send(&self, request: SendFileVoice) -> Result<SendFileVoiceResponse, QcloudError> {
        self.send_with(&request, Nonce::generate(), UnixTimestamp::now())
            .await
    }

    async fn send_with(
        &self,
        request: &SendFileVoice,
        nonce: Nonce,
        time: UnixTimestamp,
    ) -> Result<SendFileVoiceResponse, QcloudError> {
        let body = crate::transport::encode_send_file_voice_json(
            request,
            &self.credentials.app_key,
            nonce,
            time,
        )
        .map_err(QcloudError::Serialize)?;
        let url =
            crate::transport::send_file_voice_url(&self.endpoint, self.credentials.app_id, nonce);

        debug!(
            app_id = self.credentials.app_id.value(),
            nonce = nonce.value(),
            nationcode = request.tel().nation_code(),
            playtimes = request.play_times().value(),
            "sending file voice"
        );

        let response = self.http.post_json(&url, body).await.map_err(|err| {
            warn!(error = %err, "file voice request failed");
            QcloudError::Transport(err)
        })?;

        if !(200..=299).contains(&response.status) {
            warn!(status = response.status, "file voice request rejected");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(QcloudError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let parsed = crate::transport::decode_send_file_voice_json_response(&response.body)
            .map_err(|err| QcloudError::Parse(Box::new(err)))?;

        debug!(
            status = response.status,
            result = parsed.result.as_i64(),
            callid = parsed.callid.as_deref(),
            "file voice response"
        );

        Ok(parsed)
    }
}
