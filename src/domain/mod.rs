//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::SendFileVoice;
pub use response::SendFileVoiceResponse;
pub use validation::ValidationError;
pub use value::{
    AppId, AppKey, FileId, KnownResultCode, Nonce, PlayTimes, ResultCode, Telephone,
    UnixTimestamp,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SendFileVoice {
        SendFileVoice::new(
            Telephone::new("86", "13800000000"),
            FileId::new("voice.mp3").unwrap(),
            PlayTimes::new(2).unwrap(),
        )
    }

    #[test]
    fn send_file_voice_has_no_ext_by_default() {
        let req = request();
        assert_eq!(req.ext(), None);
        assert_eq!(req.fid().as_str(), "voice.mp3");
        assert_eq!(req.play_times().value(), 2);
        assert_eq!(req.tel().mobile(), "13800000000");
    }

    #[test]
    fn empty_ext_is_treated_as_absent() {
        assert_eq!(request().with_ext("").ext(), None);
        assert_eq!(request().with_ext("order-42").ext(), Some("order-42"));
        assert_eq!(request().with_ext("order-42").with_ext("").ext(), None);
    }

    #[test]
    fn response_success_follows_result_code() {
        let ok = SendFileVoiceResponse {
            result: ResultCode::new(0),
            errmsg: "OK".to_owned(),
            callid: None,
            fee: Some(1),
            ext: None,
        };
        assert!(ok.is_success());

        let failed = SendFileVoiceResponse {
            result: ResultCode::new(1016),
            ..ok
        };
        assert!(!failed.is_success());
        assert_eq!(failed.result.known(), Some(KnownResultCode::InvalidMobile));
    }
}
