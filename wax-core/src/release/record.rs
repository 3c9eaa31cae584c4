use crate::content_type::ContentType;
use crate::release::participants::ParticipantList;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Genres offered by the genre picker. The record stores the genre as a
/// string so a future "custom genre" entry doesn't need a schema change.
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Dance",
    "Electronic",
    "Folk",
    "Hip-Hop/Rap",
    "Jazz",
    "Latin",
    "Metal",
    "Pop",
    "R&B/Soul",
    "Reggae",
    "Rock",
    "Soundtrack",
];

/// Release format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseType {
    #[default]
    Album,
    Single,
    Ep,
    Compilation,
}

impl ReleaseType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Album => "Album",
            Self::Single => "Single",
            Self::Ep => "EP",
            Self::Compilation => "Compilation",
        }
    }
}

impl std::fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content rating for the release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentalAdvisory {
    NotExplicit,
    Explicit,
    /// Explicit content removed or bleeped.
    Edited,
}

impl ParentalAdvisory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotExplicit => "Not explicit",
            Self::Explicit => "Explicit",
            Self::Edited => "Edited",
        }
    }
}

impl std::fmt::Display for ParentalAdvisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a credited contributor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    MainArtist,
    FeaturedArtist,
    Remixer,
    Producer,
    Vocalist,
    Songwriter,
    Composer,
    Arranger,
    MixEngineer,
    MasteringEngineer,
}

impl ParticipantRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MainArtist => "Main artist",
            Self::FeaturedArtist => "Featured artist",
            Self::Remixer => "Remixer",
            Self::Producer => "Producer",
            Self::Vocalist => "Vocalist",
            Self::Songwriter => "Songwriter",
            Self::Composer => "Composer",
            Self::Arranger => "Arranger",
            Self::MixEngineer => "Mix engineer",
            Self::MasteringEngineer => "Mastering engineer",
        }
    }
}

impl std::fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A credited contributor to the release.
///
/// Position is not stored here: it's the index in the owning
/// [`ParticipantList`], which is the authoritative display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Stable across reorders, never reused.
    pub id: Uuid,
    pub display_name: String,
    pub role: ParticipantRole,
}

/// An admitted track upload.
///
/// Immutable after acceptance. Replacing a track is remove + re-add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackFile {
    pub id: Uuid,
    pub file_name: String,
    pub content_type: ContentType,
    /// Size in bytes, as reported by the picker.
    pub size: u64,
    pub added_at: DateTime<Utc>,
}

/// The release being prepared for submission. One live instance per editing
/// session, owned by [`ReleaseManager`](crate::release::ReleaseManager).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    pub title: String,
    /// Empty until the user picks one. See [`GENRES`].
    pub genre: String,
    pub release_type: ReleaseType,
    /// None until the user picks a rating.
    pub parental_advisory: Option<ParentalAdvisory>,
    pub artists: ParticipantList,
    pub tracks: Vec<TrackFile>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReleaseRecord {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            title: String::new(),
            genre: String::new(),
            release_type: ReleaseType::default(),
            parental_advisory: None,
            artists: ParticipantList::new(),
            tracks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn track(&self, id: Uuid) -> Option<&TrackFile> {
        self.tracks.iter().find(|t| t.id == id)
    }
}

impl Default for ReleaseRecord {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_blank() {
        let record = ReleaseRecord::new();
        assert!(record.title.is_empty());
        assert!(record.genre.is_empty());
        assert_eq!(record.release_type, ReleaseType::Album);
        assert!(record.parental_advisory.is_none());
        assert!(record.artists.is_empty());
        assert!(record.tracks.is_empty());
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(ParticipantRole::MainArtist.as_str(), "Main artist");
        assert_eq!(
            ParticipantRole::MasteringEngineer.as_str(),
            "Mastering engineer"
        );
    }

    #[test]
    fn test_release_type_serde_snake_case() {
        let json = serde_json::to_string(&ReleaseType::Ep).unwrap();
        assert_eq!(json, "\"ep\"");
        let back: ReleaseType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ReleaseType::Ep);
    }
}
