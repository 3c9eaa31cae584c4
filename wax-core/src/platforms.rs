//! Static registry of distribution platforms.
//!
//! Display metadata (name, icon, brand color) plus the canonical domain used
//! to sanity-check artist profile links. Link verification is a substring
//! check, not a URL-authority check: good enough to catch pasted links that
//! point at the wrong service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlatformError {
    /// Unknown platform ids are a programming error in the caller, not user
    /// input. Surfaced immediately, never swallowed.
    #[error("Unknown platform id: {0}")]
    Unknown(String),
}

/// A music distribution/streaming service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Spotify,
    AppleMusic,
    YoutubeMusic,
    Soundcloud,
    Bandcamp,
    Deezer,
    Tidal,
    Vk,
    YandexMusic,
    /// Catch-all for services without a registry entry. No domain constraint.
    Other,
}

impl Platform {
    pub const ALL: &'static [Platform] = &[
        Platform::Spotify,
        Platform::AppleMusic,
        Platform::YoutubeMusic,
        Platform::Soundcloud,
        Platform::Bandcamp,
        Platform::Deezer,
        Platform::Tidal,
        Platform::Vk,
        Platform::YandexMusic,
        Platform::Other,
    ];

    /// Resolve a platform id string (e.g., "spotify").
    pub fn from_id(id: &str) -> Result<Self, PlatformError> {
        match id {
            "spotify" => Ok(Self::Spotify),
            "apple_music" => Ok(Self::AppleMusic),
            "youtube_music" => Ok(Self::YoutubeMusic),
            "soundcloud" => Ok(Self::Soundcloud),
            "bandcamp" => Ok(Self::Bandcamp),
            "deezer" => Ok(Self::Deezer),
            "tidal" => Ok(Self::Tidal),
            "vk" => Ok(Self::Vk),
            "yandex_music" => Ok(Self::YandexMusic),
            "other" => Ok(Self::Other),
            _ => Err(PlatformError::Unknown(id.to_string())),
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Spotify => "spotify",
            Self::AppleMusic => "apple_music",
            Self::YoutubeMusic => "youtube_music",
            Self::Soundcloud => "soundcloud",
            Self::Bandcamp => "bandcamp",
            Self::Deezer => "deezer",
            Self::Tidal => "tidal",
            Self::Vk => "vk",
            Self::YandexMusic => "yandex_music",
            Self::Other => "other",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Spotify => "Spotify",
            Self::AppleMusic => "Apple Music",
            Self::YoutubeMusic => "YouTube Music",
            Self::Soundcloud => "SoundCloud",
            Self::Bandcamp => "Bandcamp",
            Self::Deezer => "Deezer",
            Self::Tidal => "TIDAL",
            Self::Vk => "VK",
            Self::YandexMusic => "Yandex Music",
            Self::Other => "Other",
        }
    }

    /// Icon asset reference for the UI.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Spotify => "icons/platforms/spotify.svg",
            Self::AppleMusic => "icons/platforms/apple-music.svg",
            Self::YoutubeMusic => "icons/platforms/youtube-music.svg",
            Self::Soundcloud => "icons/platforms/soundcloud.svg",
            Self::Bandcamp => "icons/platforms/bandcamp.svg",
            Self::Deezer => "icons/platforms/deezer.svg",
            Self::Tidal => "icons/platforms/tidal.svg",
            Self::Vk => "icons/platforms/vk.svg",
            Self::YandexMusic => "icons/platforms/yandex-music.svg",
            Self::Other => "icons/platforms/link.svg",
        }
    }

    /// Brand color as a hex string.
    pub fn brand_color(self) -> &'static str {
        match self {
            Self::Spotify => "#1DB954",
            Self::AppleMusic => "#FA243C",
            Self::YoutubeMusic => "#FF0000",
            Self::Soundcloud => "#FF5500",
            Self::Bandcamp => "#629AA9",
            Self::Deezer => "#A238FF",
            Self::Tidal => "#000000",
            Self::Vk => "#0077FF",
            Self::YandexMusic => "#FFCC00",
            Self::Other => "#8E8E93",
        }
    }

    /// Canonical domain, None for `Other`.
    pub fn domain(self) -> Option<&'static str> {
        match self {
            Self::Spotify => Some("spotify.com"),
            Self::AppleMusic => Some("music.apple.com"),
            Self::YoutubeMusic => Some("music.youtube.com"),
            Self::Soundcloud => Some("soundcloud.com"),
            Self::Bandcamp => Some("bandcamp.com"),
            Self::Deezer => Some("deezer.com"),
            Self::Tidal => Some("tidal.com"),
            Self::Vk => Some("vk.com"),
            Self::YandexMusic => Some("music.yandex.ru"),
            Self::Other => None,
        }
    }

    /// Check that a pasted profile link plausibly points at this platform.
    ///
    /// `Other` always verifies. For everything else the URL must contain the
    /// canonical domain as a case-sensitive substring.
    pub fn verify_link(self, url: &str) -> bool {
        match self.domain() {
            Some(domain) => url.contains(domain),
            None => true,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An artist profile link on a distribution platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformLink {
    pub platform: Platform,
    pub url: String,
}

impl PlatformLink {
    pub fn new(platform: Platform, url: impl Into<String>) -> Self {
        Self {
            platform,
            url: url.into(),
        }
    }

    pub fn is_verified(&self) -> bool {
        self.platform.verify_link(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_roundtrip() {
        for &platform in Platform::ALL {
            assert_eq!(Platform::from_id(platform.id()), Ok(platform));
        }
    }

    #[test]
    fn test_unknown_id_is_error() {
        assert_eq!(
            Platform::from_id("myspace"),
            Err(PlatformError::Unknown("myspace".to_string()))
        );
    }

    #[test]
    fn test_verify_link_matching_domain() {
        assert!(Platform::Spotify.verify_link("https://open.spotify.com/artist/123"));
        assert!(Platform::Vk.verify_link("https://vk.com/artist"));
    }

    #[test]
    fn test_verify_link_wrong_domain() {
        assert!(!Platform::Vk.verify_link("https://open.spotify.com/artist/123"));
        assert!(!Platform::Spotify.verify_link("https://soundcloud.com/artist"));
    }

    #[test]
    fn test_verify_link_other_always_passes() {
        assert!(Platform::Other.verify_link("https://example.com/whatever"));
        assert!(Platform::Other.verify_link(""));
    }

    #[test]
    fn test_verify_link_is_case_sensitive() {
        assert!(!Platform::Spotify.verify_link("https://open.SPOTIFY.com/artist/123"));
    }

    #[test]
    fn test_platform_link() {
        let link = PlatformLink::new(Platform::Spotify, "https://open.spotify.com/artist/123");
        assert!(link.is_verified());

        let link = PlatformLink::new(Platform::Vk, "https://open.spotify.com/artist/123");
        assert!(!link.is_verified());
    }

    #[test]
    fn test_registry_metadata_present() {
        for &platform in Platform::ALL {
            assert!(!platform.display_name().is_empty());
            assert!(!platform.icon().is_empty());
            assert!(platform.brand_color().starts_with('#'));
            if platform != Platform::Other {
                assert!(platform.domain().is_some());
            }
        }
    }
}
