use crate::error::AppError;
use crate::models::fs_types::AudioFileInfo;
use std::path::Path;

pub const AUDIO_EXTENSIONS: &[&str] = &[
    "wav", "mp3", "flac", "ogg", "opus", "m4a", "aac", "wma", "aiff",
];

/// Extension check used to pre-filter the native file dialog. The analyze
/// path never gates on this: any existing file is accepted and forwarded.
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// Presence-check plus display metadata for a user-selected file.
pub fn probe_file(path: &str) -> Result<AudioFileInfo, AppError> {
    let file_path = Path::new(path);
    if !file_path.is_file() {
        return Err(format!("File does not exist: {}", path).into());
    }

    let meta = std::fs::metadata(file_path).map_err(|e| AppError {
        message: format!("Cannot read file metadata for {}: {}", path, e),
    })?;

    let modified = meta
        .modified()
        .ok()
        .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
        .map(|d| d.as_secs());

    Ok(AudioFileInfo {
        name: display_name(file_path),
        path: path.to_string(),
        size: meta.len(),
        modified,
        is_audio: is_audio_file(file_path),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_is_audio_file() {
        assert!(is_audio_file(Path::new("siren.wav")));
        assert!(is_audio_file(Path::new("/tmp/Recording.MP3")));
        assert!(!is_audio_file(Path::new("notes.txt")));
        assert!(!is_audio_file(Path::new("noextension")));
    }

    #[test]
    fn test_probe_file_reports_display_name() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("atm_hall.wav");
        let mut f = std::fs::File::create(&file_path).unwrap();
        f.write_all(b"RIFF....WAVE").unwrap();

        let info = probe_file(file_path.to_str().unwrap()).unwrap();
        assert_eq!(info.name, "atm_hall.wav");
        assert_eq!(info.size, 12);
        assert!(info.is_audio);
    }

    #[test]
    fn test_probe_file_accepts_any_extension() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("payload.bin");
        std::fs::write(&file_path, b"not audio at all").unwrap();

        let info = probe_file(file_path.to_str().unwrap()).unwrap();
        assert_eq!(info.name, "payload.bin");
        assert!(!info.is_audio);
    }

    #[test]
    fn test_probe_file_missing() {
        let err = probe_file("/definitely/not/here.wav").unwrap_err();
        assert!(err.message.contains("does not exist"));
    }
}
