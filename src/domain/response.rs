use crate::domain::value::ResultCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendFileVoiceResponse {
    pub result: ResultCode,
    pub errmsg: String,
    /// Call record identifier assigned by the provider.
    pub callid: Option<String>,
    pub fee: Option<u32>,
    pub ext: Option<String>,
}

impl SendFileVoiceResponse {
    pub fn is_success(&self) -> bool {
        self.result.is_success()
    }
}
