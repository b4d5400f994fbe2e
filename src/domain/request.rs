use crate::domain::value::{FileId, PlayTimes, Telephone};

/// Play a pre-uploaded voice file to one phone number.
#[derive(Debug, Clone)]
pub struct SendFileVoice {
    tel: Telephone,
    fid: FileId,
    play_times: PlayTimes,
    ext: Option<String>,
}

impl SendFileVoice {
    pub fn new(tel: Telephone, fid: FileId, play_times: PlayTimes) -> Self {
        Self {
            tel,
            fid,
            play_times,
            ext: None,
        }
    }

    /// Attach an opaque string the provider echoes back. An empty string clears it.
    pub fn with_ext(mut self, ext: impl Into<String>) -> Self {
        let ext = ext.into();
        self.ext = if ext.is_empty() { None } else { Some(ext) };
        self
    }

    pub fn tel(&self) -> &Telephone {
        &self.tel
    }

    pub fn fid(&self) -> &FileId {
        &self.fid
    }

    pub fn play_times(&self) -> PlayTimes {
        self.play_times
    }

    pub fn ext(&self) -> Option<&str> {
        self.ext.as_deref()
    }
}
