use serde::{Deserialize, Serialize};

use crate::domain::{
    AppId, AppKey, Nonce, ResultCode, SendFileVoice, SendFileVoiceResponse, UnixTimestamp,
};
use crate::transport::signature::calculate_signature;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct TelJson<'a> {
    nationcode: &'a str,
    mobile: &'a str,
}

#[derive(Debug, Serialize)]
struct SendFileVoiceJsonBody<'a> {
    tel: TelJson<'a>,
    fid: &'a str,
    playtimes: u32,
    sig: String,
    time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    ext: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct SendFileVoiceJsonResponse {
    result: i64,
    #[serde(default)]
    errmsg: String,
    #[serde(default)]
    callid: Option<String>,
    #[serde(default)]
    fee: Option<u32>,
    #[serde(default)]
    ext: Option<String>,
}

/// Append `sdkappid` and `random` to the configured endpoint.
pub fn send_file_voice_url(endpoint: &url::Url, app_id: AppId, nonce: Nonce) -> url::Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair(AppId::FIELD, &app_id.value().to_string())
        .append_pair(Nonce::FIELD, &nonce.value().to_string());
    url
}

pub fn encode_send_file_voice_json(
    request: &SendFileVoice,
    key: &AppKey,
    nonce: Nonce,
    time: UnixTimestamp,
) -> Result<Vec<u8>, serde_json::Error> {
    let tel = request.tel();
    let body = SendFileVoiceJsonBody {
        tel: TelJson {
            nationcode: tel.nation_code(),
            mobile: tel.mobile(),
        },
        fid: request.fid().as_str(),
        playtimes: request.play_times().value(),
        sig: calculate_signature(key, nonce, time, tel.mobile()),
        time: time.value(),
        ext: request.ext(),
    };
    serde_json::to_vec(&body)
}

pub fn decode_send_file_voice_json_response(
    json: &str,
) -> Result<SendFileVoiceResponse, TransportError> {
    let parsed: SendFileVoiceJsonResponse = serde_json::from_str(json)?;
    Ok(SendFileVoiceResponse {
        result: ResultCode::new(parsed.result),
        errmsg: parsed.errmsg,
        callid: parsed.callid.filter(|it| !it.is_empty()),
        fee: parsed.fee,
        ext: parsed.ext.filter(|it| !it.is_empty()),
    })
}
