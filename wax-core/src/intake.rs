//! Batch validation for uploaded track files.
//!
//! Pure functions over candidate metadata: no file content is read, size and
//! type come from the picker. Rejections are reported per file, never thrown;
//! the caller decides how to surface them.

use crate::content_type::ContentType;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Accept pattern for uploads, HTML-accept style.
///
/// Supports exact MIME types (`audio/flac`), wildcard subtypes (`audio/*`),
/// the match-all `*/*`, and comma-separated lists of the above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AcceptPattern(String);

impl AcceptPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether a content type matches this pattern.
    pub fn matches(&self, content_type: &ContentType) -> bool {
        let mime = content_type.as_str();
        self.0.split(',').map(str::trim).any(|pat| match pat {
            "*" | "*/*" => true,
            _ => match pat.strip_suffix("/*") {
                Some(prefix) => {
                    mime.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
                }
                None => pat == mime,
            },
        })
    }
}

impl std::fmt::Display for AcceptPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Constraints applied to a candidate upload batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeConstraints {
    /// Accepted content types for track uploads.
    pub accepted_types: AcceptPattern,
    /// Maximum number of tracks on a release, counting already-admitted ones.
    pub max_files: usize,
    /// Maximum size per file, in bytes.
    pub max_file_size: u64,
}

impl Default for IntakeConstraints {
    fn default() -> Self {
        Self {
            accepted_types: AcceptPattern::new("audio/*"),
            max_files: 50,
            max_file_size: 100 * 1024 * 1024,
        }
    }
}

/// A file offered by the user, described by picker metadata only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFile {
    pub file_name: String,
    pub content_type: ContentType,
    /// Size in bytes.
    pub size: u64,
}

/// Outcome of validating one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationState {
    Accepted,
    RejectedType,
    RejectedSize,
    RejectedCountOverflow,
}

impl ValidationState {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::RejectedType => "rejected_type",
            Self::RejectedSize => "rejected_size",
            Self::RejectedCountOverflow => "rejected_count_overflow",
        }
    }
}

/// A candidate annotated with its validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedFile {
    pub file: CandidateFile,
    pub state: ValidationState,
}

/// Validate a candidate batch against the intake constraints.
///
/// Per-file checks run in input order: type first, then size. After that, if
/// admitting every type/size-passing file would push the release past
/// `max_files` (given `existing_count` already-admitted tracks), the overflow
/// is demoted to `RejectedCountOverflow`, taken from the end of the accepted
/// run. Files rejected for type or size never count against the quota.
///
/// Returns the full annotated list in input order. Never fails; committing
/// accepted files is the caller's job.
pub fn validate_batch(
    candidates: Vec<CandidateFile>,
    existing_count: usize,
    constraints: &IntakeConstraints,
) -> Vec<ValidatedFile> {
    let mut results: Vec<ValidatedFile> = candidates
        .into_iter()
        .map(|file| {
            let state = if !constraints.accepted_types.matches(&file.content_type) {
                ValidationState::RejectedType
            } else if file.size > constraints.max_file_size {
                ValidationState::RejectedSize
            } else {
                ValidationState::Accepted
            };
            ValidatedFile { file, state }
        })
        .collect();

    let accepted = results.iter().filter(|r| r.state.is_accepted()).count();
    let quota = constraints.max_files.saturating_sub(existing_count);
    if accepted > quota {
        let mut overflow = accepted - quota;
        for entry in results.iter_mut().rev() {
            if overflow == 0 {
                break;
            }
            if entry.state.is_accepted() {
                entry.state = ValidationState::RejectedCountOverflow;
                overflow -= 1;
            }
        }
    }

    let rejected = results.len() - results.iter().filter(|r| r.state.is_accepted()).count();
    debug!(
        total = results.len(),
        rejected, existing_count, "validated upload batch"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audio(name: &str, size: u64) -> CandidateFile {
        CandidateFile {
            file_name: name.to_string(),
            content_type: ContentType::Flac,
            size,
        }
    }

    fn candidate(name: &str, mime: &str, size: u64) -> CandidateFile {
        CandidateFile {
            file_name: name.to_string(),
            content_type: ContentType::from_mime(mime),
            size,
        }
    }

    fn states(results: &[ValidatedFile]) -> Vec<ValidationState> {
        results.iter().map(|r| r.state).collect()
    }

    #[test]
    fn test_accept_pattern_wildcard_subtype() {
        let pat = AcceptPattern::new("audio/*");
        assert!(pat.matches(&ContentType::Flac));
        assert!(pat.matches(&ContentType::Other("audio/x-aiff".to_string())));
        assert!(!pat.matches(&ContentType::Other("image/jpeg".to_string())));
        assert!(!pat.matches(&ContentType::OctetStream));
        // "audio/*" must not match a bare "audio" or an "audiox/..." type
        assert!(!pat.matches(&ContentType::Other("audio".to_string())));
        assert!(!pat.matches(&ContentType::Other("audiobook/mp3".to_string())));
    }

    #[test]
    fn test_accept_pattern_exact_and_list() {
        let exact = AcceptPattern::new("audio/flac");
        assert!(exact.matches(&ContentType::Flac));
        assert!(!exact.matches(&ContentType::Mpeg));

        let list = AcceptPattern::new("audio/flac, audio/mpeg");
        assert!(list.matches(&ContentType::Flac));
        assert!(list.matches(&ContentType::Mpeg));
        assert!(!list.matches(&ContentType::Wav));
    }

    #[test]
    fn test_accept_pattern_match_all() {
        let pat = AcceptPattern::new("*/*");
        assert!(pat.matches(&ContentType::OctetStream));
        assert!(pat.matches(&ContentType::Other("image/png".to_string())));
    }

    #[test]
    fn test_batch_all_valid() {
        let results = validate_batch(
            vec![audio("a.flac", 10), audio("b.flac", 20)],
            0,
            &IntakeConstraints::default(),
        );
        assert_eq!(
            states(&results),
            vec![ValidationState::Accepted, ValidationState::Accepted]
        );
    }

    #[test]
    fn test_type_checked_before_size() {
        // A file that fails both checks reports the type rejection.
        let constraints = IntakeConstraints {
            max_file_size: 100,
            ..Default::default()
        };
        let results = validate_batch(
            vec![candidate("scan.jpg", "image/jpeg", 1_000_000)],
            0,
            &constraints,
        );
        assert_eq!(states(&results), vec![ValidationState::RejectedType]);
    }

    #[test]
    fn test_oversize_rejected() {
        let constraints = IntakeConstraints {
            max_file_size: 100,
            ..Default::default()
        };
        let results = validate_batch(
            vec![audio("small.flac", 100), audio("big.flac", 101)],
            0,
            &constraints,
        );
        assert_eq!(
            states(&results),
            vec![ValidationState::Accepted, ValidationState::RejectedSize]
        );
    }

    #[test]
    fn test_overflow_demotes_from_end_of_accepted_run() {
        let constraints = IntakeConstraints {
            max_files: 2,
            ..Default::default()
        };
        let results = validate_batch(
            vec![
                audio("1.flac", 1),
                audio("2.flac", 1),
                audio("3.flac", 1),
                audio("4.flac", 1),
            ],
            0,
            &constraints,
        );
        assert_eq!(
            states(&results),
            vec![
                ValidationState::Accepted,
                ValidationState::Accepted,
                ValidationState::RejectedCountOverflow,
                ValidationState::RejectedCountOverflow,
            ]
        );
    }

    #[test]
    fn test_overflow_skips_already_rejected_files() {
        // The trailing type-reject stays a type-reject; demotion walks past it
        // to the last *accepted* file.
        let constraints = IntakeConstraints {
            max_files: 1,
            ..Default::default()
        };
        let results = validate_batch(
            vec![
                audio("keep.flac", 1),
                audio("demote.flac", 1),
                candidate("notes.txt", "text/plain", 1),
            ],
            0,
            &constraints,
        );
        assert_eq!(
            states(&results),
            vec![
                ValidationState::Accepted,
                ValidationState::RejectedCountOverflow,
                ValidationState::RejectedType,
            ]
        );
    }

    #[test]
    fn test_existing_count_consumes_quota() {
        // 49 tracks already admitted, max 50: one slot left.
        let results = validate_batch(
            vec![audio("a.flac", 1), audio("b.flac", 1)],
            49,
            &IntakeConstraints::default(),
        );
        assert_eq!(
            states(&results),
            vec![
                ValidationState::Accepted,
                ValidationState::RejectedCountOverflow,
            ]
        );
    }

    #[test]
    fn test_quota_already_exhausted() {
        // existing_count past the limit clamps the quota to zero rather than
        // underflowing.
        let constraints = IntakeConstraints {
            max_files: 2,
            ..Default::default()
        };
        let results = validate_batch(vec![audio("a.flac", 1)], 5, &constraints);
        assert_eq!(states(&results), vec![ValidationState::RejectedCountOverflow]);
    }

    #[test]
    fn test_every_candidate_is_annotated() {
        let constraints = IntakeConstraints {
            max_files: 2,
            max_file_size: 50,
            ..Default::default()
        };
        let batch = vec![
            audio("a.flac", 1),
            candidate("cover.png", "image/png", 1),
            audio("b.flac", 999),
            audio("c.flac", 2),
            audio("d.flac", 3),
        ];
        let total = batch.len();
        let results = validate_batch(batch, 0, &constraints);
        assert_eq!(results.len(), total);
        let accepted = results.iter().filter(|r| r.state.is_accepted()).count();
        let rejected = results.iter().filter(|r| !r.state.is_accepted()).count();
        assert_eq!(accepted + rejected, total);
        assert_eq!(accepted, 2);
    }

    #[test]
    fn test_empty_batch() {
        let results = validate_batch(vec![], 0, &IntakeConstraints::default());
        assert!(results.is_empty());
    }
}
