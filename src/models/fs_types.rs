use serde::Serialize;

#[derive(Debug, Serialize, Clone)]
pub struct AudioFileInfo {
    pub name: String,
    pub path: String,
    pub size: u64,
    pub modified: Option<u64>,
    pub is_audio: bool,
}
