use std::io;

use qcloudsms::{Credentials, FileId, PlayTimes, SendFileVoice, Telephone, VoiceSender};
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("qcloudsms=debug")),
        )
        .init();

    let app_id: u64 = required_env("QCLOUD_APP_ID")?.parse()?;
    let app_key = required_env("QCLOUD_APP_KEY")?;
    let mobile = required_env("QCLOUD_MOBILE")?;
    let fid = required_env("QCLOUD_FID")?;
    let nation_code = std::env::var("QCLOUD_NATION_CODE").unwrap_or_else(|_| "86".to_owned());
    let play_times: u32 = std::env::var("QCLOUD_PLAY_TIMES")
        .ok()
        .map(|it| it.parse())
        .transpose()?
        .unwrap_or(PlayTimes::MIN);

    let sender = VoiceSender::new(Credentials::new(app_id, app_key)?)?;
    let request = SendFileVoice::new(
        Telephone::new(nation_code, mobile),
        FileId::new(fid)?,
        PlayTimes::new(play_times)?,
    );

    let response = sender.send(request).await?;
    println!(
        "result: {}, errmsg: {}, callid: {:?}, fee: {:?}",
        response.result.as_i64(),
        response.errmsg,
        response.callid,
        response.fee
    );

    Ok(())
}
