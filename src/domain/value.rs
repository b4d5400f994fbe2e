use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Tencent Cloud SDK application id (`sdkappid`).
pub struct AppId(u64);

impl AppId {
    /// Query parameter name used by the provider (`sdkappid`).
    pub const FIELD: &'static str = "sdkappid";

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Application key used to sign requests.
///
/// Invariant: non-empty after trimming. The key never leaves the process; it is
/// only fed into the signature hash, and `Debug` output redacts it.
pub struct AppKey(String);

impl AppKey {
    pub const FIELD: &'static str = "appkey";

    /// Create a validated [`AppKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AppKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Destination of a voice call: country calling code plus national number.
///
/// Both parts are passed to the provider as given; acceptance is up to the provider.
pub struct Telephone {
    nation_code: String,
    mobile: String,
}

impl Telephone {
    pub const NATION_CODE_FIELD: &'static str = "nationcode";
    pub const MOBILE_FIELD: &'static str = "mobile";

    /// `nation_code` without a leading `+` (e.g. `86`), `mobile` without the country code.
    pub fn new(nation_code: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            nation_code: nation_code.into(),
            mobile: mobile.into(),
        }
    }

    pub fn nation_code(&self) -> &str {
        &self.nation_code
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Identifier of a voice file previously uploaded to the provider (`fid`).
///
/// Invariant: non-empty after trimming.
pub struct FileId(String);

impl FileId {
    /// JSON field name used by the provider (`fid`).
    pub const FIELD: &'static str = "fid";

    /// Create a validated [`FileId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How many times the voice file is played during the call (`playtimes`).
///
/// Invariant: at least [`PlayTimes::MIN`].
pub struct PlayTimes(u32);

impl PlayTimes {
    pub const FIELD: &'static str = "playtimes";
    pub const MIN: u32 = 1;

    /// Create a validated [`PlayTimes`].
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value < Self::MIN {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: Self::MIN,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for PlayTimes {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Per-request random value sent both in the URL and inside the signature.
pub struct Nonce(u64);

impl Nonce {
    pub const FIELD: &'static str = "random";
    pub const MIN: u64 = 100_000;
    pub const MAX: u64 = 999_999;

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Draw a fresh nonce from the thread-local RNG.
    pub fn generate() -> Self {
        use rand::Rng;

        Self(rand::rng().random_range(Self::MIN..=Self::MAX))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unix timestamp in seconds (`time`).
pub struct UnixTimestamp(u64);

impl UnixTimestamp {
    pub const FIELD: &'static str = "time";

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Current wall-clock time. Clocks before the epoch clamp to zero.
    pub fn now() -> Self {
        Self(u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default())
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Provider result code (`result`).
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct ResultCode(i64);

impl ResultCode {
    pub const FIELD: &'static str = "result";

    pub fn new(code: i64) -> Self {
        Self(code)
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }

    /// `0` is the only success code.
    pub fn is_success(self) -> bool {
        self.0 == 0
    }

    /// Map this code to a known result code variant, if one exists.
    pub fn known(self) -> Option<KnownResultCode> {
        KnownResultCode::from_code(self.0)
    }

    /// Returns `true` if the provider rejected the signature or credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_auth_error())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownResultCode {
    Success,
    SignatureCheckFailed,
    BodyParseFailed,
    PermissionDenied,
    RequestTimeout,
    InvalidMobile,
    MobileFrequencyLimit,
    MobileDailyLimit,
    InsufficientBalance,
}

impl KnownResultCode {
    pub fn from_code(code: i64) -> Option<Self> {
        let kind = match code {
            0 => Self::Success,
            1001 => Self::SignatureCheckFailed,
            1004 => Self::BodyParseFailed,
            1006 => Self::PermissionDenied,
            1008 => Self::RequestTimeout,
            1016 => Self::InvalidMobile,
            1023 | 1024 => Self::MobileFrequencyLimit,
            1025 => Self::MobileDailyLimit,
            1031 => Self::InsufficientBalance,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_auth_error(self) -> bool {
        matches!(self, Self::SignatureCheckFailed | Self::PermissionDenied)
    }
}
