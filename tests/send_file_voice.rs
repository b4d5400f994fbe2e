use std::time::Duration;

use mockito::Matcher;
use qcloudsms::{
    Credentials, FileId, PlayTimes, QcloudError, ResultCode, SendFileVoice, Telephone, VoiceSender,
};
use serde_json::json;

fn request() -> SendFileVoice {
    SendFileVoice::new(
        Telephone::new("86", "13800000000"),
        FileId::new("c799d10a43ec109f02f2288ca3c85b79e7700c98.mp3").unwrap(),
        PlayTimes::new(2).unwrap(),
    )
}

fn sender(endpoint: String, timeout: Duration) -> VoiceSender {
    VoiceSender::builder(Credentials::new(1_400_000_000, "secret").unwrap())
        .endpoint(endpoint)
        .timeout(timeout)
        .build()
        .unwrap()
}

#[tokio::test]
async fn posts_json_and_parses_provider_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v5/tlsvoicesvr/sendfvoice")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("sdkappid".into(), "1400000000".into()),
            Matcher::Regex("random=[0-9]{6}".into()),
        ]))
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "tel": { "nationcode": "86", "mobile": "13800000000" },
            "fid": "c799d10a43ec109f02f2288ca3c85b79e7700c98.mp3",
            "playtimes": 2,
            "ext": "order-42"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"result":0,"errmsg":"OK","callid":"call-1","fee":1,"ext":"order-42"}"#)
        .create_async()
        .await;

    let sender = sender(
        format!("{}/v5/tlsvoicesvr/sendfvoice", server.url()),
        Duration::from_secs(5),
    );
    let response = sender
        .send(request().with_ext("order-42"))
        .await
        .unwrap()
        .error_for_result()
        .unwrap();

    assert_eq!(response.result, ResultCode::new(0));
    assert_eq!(response.errmsg, "OK");
    assert_eq!(response.callid.as_deref(), Some("call-1"));
    assert_eq!(response.fee, Some(1));
    assert_eq!(response.ext.as_deref(), Some("order-42"));
    mock.assert_async().await;
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", Matcher::Any)
        .with_status(200)
        .with_body("result=0")
        .create_async()
        .await;

    let err = sender(server.url(), Duration::from_secs(5))
        .send(request())
        .await
        .unwrap_err();
    assert!(matches!(err, QcloudError::Parse(_)));
}

#[tokio::test]
async fn server_error_is_reported_with_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let err = sender(server.url(), Duration::from_secs(5))
        .send(request())
        .await
        .unwrap_err();
    match err {
        QcloudError::HttpStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body.as_deref(), Some("internal error"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn exceeding_timeout_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        // Accept and hold the connection without ever answering.
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    let err = sender(
        format!("http://{addr}/sendfvoice"),
        Duration::from_millis(200),
    )
    .send(request())
    .await
    .unwrap_err();

    match err {
        QcloudError::Transport(source) => {
            let source = source
                .downcast_ref::<reqwest::Error>()
                .expect("reqwest error");
            assert!(source.is_timeout());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = sender(format!("http://{addr}/sendfvoice"), Duration::from_secs(5))
        .send(request())
        .await
        .unwrap_err();
    assert!(matches!(err, QcloudError::Transport(_)));
}
