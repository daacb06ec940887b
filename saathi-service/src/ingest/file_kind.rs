use axum::body::Bytes;
use serde::Serialize;
use std::fmt;

/// How an upload is handled, decided from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    PlainText,
    Pdf,
    Word,
    LegacyWord,
    Image,
    Audio,
}

/// Coarse grouping reported back to the client as `fileType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Document,
    Image,
    Audio,
}

impl FileKind {
    pub fn category(&self) -> FileCategory {
        match self {
            FileKind::PlainText | FileKind::Pdf | FileKind::Word | FileKind::LegacyWord => {
                FileCategory::Document
            }
            FileKind::Image => FileCategory::Image,
            FileKind::Audio => FileCategory::Audio,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::PlainText => "text",
            FileKind::Pdf => "pdf",
            FileKind::Word => "docx",
            FileKind::LegacyWord => "doc",
            FileKind::Image => "image",
            FileKind::Audio => "audio",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DOCUMENT_EXTENSIONS: [&str; 4] = ["pdf", "txt", "doc", "docx"];
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];
pub const AUDIO_EXTENSIONS: [&str; 6] = ["mp3", "wav", "webm", "ogg", "m4a", "mp4"];

/// Lower-cased text after the last dot; the whole name when there is no dot.
pub fn extension_of(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// `None` for anything the service does not accept.
pub fn classify(file_name: &str) -> Option<FileKind> {
    let kind = match extension_of(file_name).as_str() {
        "txt" => FileKind::PlainText,
        "pdf" => FileKind::Pdf,
        "docx" => FileKind::Word,
        "doc" => FileKind::LegacyWord,
        ext if IMAGE_EXTENSIONS.contains(&ext) => FileKind::Image,
        ext if AUDIO_EXTENSIONS.contains(&ext) => FileKind::Audio,
        _ => return None,
    };
    Some(kind)
}

/// MIME type sent alongside inline bytes.
pub fn mime_type_for(file_name: &str) -> &'static str {
    match extension_of(file_name).as_str() {
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "webm" => "audio/webm",
        "ogg" => "audio/ogg",
        "m4a" | "mp4" => "audio/mp4",
        _ => "application/octet-stream",
    }
}

/// One file taken from a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn kind(&self) -> Option<FileKind> {
        classify(&self.file_name)
    }

    pub fn mime_type(&self) -> &'static str {
        mime_type_for(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_case_insensitive_extension() {
        assert_eq!(classify("Petition.PDF"), Some(FileKind::Pdf));
        assert_eq!(classify("notes.txt"), Some(FileKind::PlainText));
        assert_eq!(classify("brief.docx"), Some(FileKind::Word));
        assert_eq!(classify("old-brief.doc"), Some(FileKind::LegacyWord));
        assert_eq!(classify("scan.JPEG"), Some(FileKind::Image));
        assert_eq!(classify("hearing.m4a"), Some(FileKind::Audio));
        assert_eq!(classify("archive.zip"), None);
        assert_eq!(classify("README"), None);
    }

    #[test]
    fn every_listed_extension_is_classified() {
        for ext in DOCUMENT_EXTENSIONS {
            assert_eq!(
                classify(&format!("f.{ext}")).map(|k| k.category()),
                Some(FileCategory::Document)
            );
        }
        for ext in IMAGE_EXTENSIONS {
            assert_eq!(classify(&format!("f.{ext}")), Some(FileKind::Image));
        }
        for ext in AUDIO_EXTENSIONS {
            assert_eq!(classify(&format!("f.{ext}")), Some(FileKind::Audio));
        }
    }

    #[test]
    fn audio_mime_types_follow_container() {
        assert_eq!(mime_type_for("a.mp3"), "audio/mpeg");
        assert_eq!(mime_type_for("a.m4a"), "audio/mp4");
        assert_eq!(mime_type_for("a.mp4"), "audio/mp4");
        assert_eq!(mime_type_for("recording.webm"), "audio/webm");
        assert_eq!(mime_type_for("a.bin"), "application/octet-stream");
    }
}
