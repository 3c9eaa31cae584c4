use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Content type for files attached to a release.
///
/// Wraps MIME types as an enum for type-safe comparisons. Uploads are
/// exchanged with the presentation layer as MIME type strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentType {
    // Audio
    Flac,
    Mpeg,
    Ogg,
    Wav,
    Aac,
    Mp4Audio,
    // Other
    OctetStream,
    Other(String),
}

impl ContentType {
    /// MIME type string (e.g., "audio/flac").
    pub fn as_str(&self) -> &str {
        match self {
            Self::Flac => "audio/flac",
            Self::Mpeg => "audio/mpeg",
            Self::Ogg => "audio/ogg",
            Self::Wav => "audio/wav",
            Self::Aac => "audio/aac",
            Self::Mp4Audio => "audio/mp4",
            Self::OctetStream => "application/octet-stream",
            Self::Other(s) => s,
        }
    }

    /// Parse from a MIME type string (as reported by the file picker).
    pub fn from_mime(s: &str) -> Self {
        match s {
            "audio/flac" => Self::Flac,
            "audio/mpeg" => Self::Mpeg,
            "audio/ogg" => Self::Ogg,
            "audio/wav" => Self::Wav,
            "audio/aac" => Self::Aac,
            "audio/mp4" => Self::Mp4Audio,
            "application/octet-stream" => Self::OctetStream,
            other => Self::Other(other.to_string()),
        }
    }

    /// Map a file extension to its content type.
    ///
    /// Fallback for pickers that report no MIME type. Unknown extensions
    /// map to `OctetStream` and get rejected by the intake type check.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "flac" => Self::Flac,
            "mp3" => Self::Mpeg,
            "ogg" | "oga" => Self::Ogg,
            "wav" => Self::Wav,
            "aac" => Self::Aac,
            "m4a" => Self::Mp4Audio,
            _ => Self::OctetStream,
        }
    }

    pub fn is_audio(&self) -> bool {
        matches!(
            self,
            Self::Flac | Self::Mpeg | Self::Ogg | Self::Wav | Self::Aac | Self::Mp4Audio
        ) || matches!(self, Self::Other(s) if s.starts_with("audio/"))
    }

    /// Short human-readable name for UI display (e.g., "FLAC", "MP3").
    pub fn display_name(&self) -> &str {
        match self {
            Self::Flac => "FLAC",
            Self::Mpeg => "MP3",
            Self::Ogg => "OGG",
            Self::Wav => "WAV",
            Self::Aac => "AAC",
            Self::Mp4Audio => "M4A",
            Self::OctetStream => "Binary",
            Self::Other(s) => s,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ContentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ContentType::from_mime(&s))
    }
}
