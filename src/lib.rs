//! Typed Rust client for the Tencent Cloud file voice notification API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! wire-format details (JSON body, signature, URL templating), and a small client
//! layer orchestrating one signed `POST` per call.
//!
//! ```rust,no_run
//! use qcloudsms::{Credentials, FileId, PlayTimes, SendFileVoice, Telephone, VoiceSender};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), qcloudsms::QcloudError> {
//!     let sender = VoiceSender::new(Credentials::new(1400000000, "...")?)?;
//!     let request = SendFileVoice::new(
//!         Telephone::new("86", "13800000000"),
//!         FileId::new("c799d10a43ec109f02f2288ca3c85b79e7700c98.mp3")?,
//!         PlayTimes::new(2)?,
//!     );
//!     let response = sender.send(request).await?.error_for_result()?;
//!     println!("call id: {:?}", response.callid);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, QcloudError, VoiceSender, VoiceSenderBuilder};
pub use domain::{
    AppId, AppKey, FileId, KnownResultCode, Nonce, PlayTimes, ResultCode, SendFileVoice,
    SendFileVoiceResponse, Telephone, UnixTimestamp, ValidationError,
};
pub use transport::calculate_signature;
