use crate::config::Config;
use crate::intake::{self, CandidateFile, ValidatedFile};
use crate::release::participants::{ParticipantError, ParticipantPatch};
use crate::release::record::{
    ParentalAdvisory, ParticipantRole, ReleaseRecord, ReleaseType, TrackFile, GENRES,
};
use crate::validation::{self, ValidationSummary};
use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReleaseError {
    #[error(transparent)]
    Participant(#[from] ParticipantError),
    #[error("No track with id {0}")]
    UnknownTrack(Uuid),
}

/// Result of submitting an upload batch: the tracks committed to the record
/// plus every rejected candidate with its reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeOutcome {
    /// Committed to the record, in input order.
    pub added: Vec<TrackFile>,
    pub rejected: Vec<ValidatedFile>,
}

/// Owner of the live [`ReleaseRecord`] and the only write surface over it.
///
/// One instance per editing session, passed explicitly to collaborators.
/// All mutations are synchronous and run to completion; readers always see a
/// fully consistent record.
#[derive(Debug, Clone)]
pub struct ReleaseManager {
    record: ReleaseRecord,
    config: Config,
    /// Progress shown next to the checklist. Tracked independently of the
    /// derived completed/total counts and set by the submission flow.
    completion_percent: u8,
}

impl ReleaseManager {
    pub fn new(config: Config) -> Self {
        Self {
            record: ReleaseRecord::new(),
            config,
            completion_percent: 0,
        }
    }

    /// Resume editing an existing record (e.g., a draft restored by the
    /// presentation layer).
    pub fn with_record(record: ReleaseRecord, config: Config) -> Self {
        Self {
            record,
            config,
            completion_percent: 0,
        }
    }

    /// Full snapshot view of the record.
    pub fn record(&self) -> &ReleaseRecord {
        &self.record
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn touch(&mut self) {
        self.record.updated_at = Utc::now();
    }

    // Field setters

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.record.title = title.into();
        self.touch();
        debug!("title updated");
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        let genre = genre.into();
        if !genre.is_empty() && !GENRES.contains(&genre.as_str()) {
            warn!(%genre, "genre not in the curated list");
        }
        self.record.genre = genre;
        self.touch();
    }

    pub fn set_release_type(&mut self, release_type: ReleaseType) {
        self.record.release_type = release_type;
        self.touch();
    }

    pub fn set_parental_advisory(&mut self, advisory: ParentalAdvisory) {
        self.record.parental_advisory = Some(advisory);
        self.touch();
    }

    // Participants, delegated to the ordering list

    pub fn add_participant(&mut self, display_name: impl Into<String>, role: ParticipantRole) -> Uuid {
        let id = self.record.artists.add(display_name, role);
        self.touch();
        debug!(%id, "participant added");
        id
    }

    pub fn remove_participant(&mut self, id: Uuid) -> Result<(), ReleaseError> {
        self.record.artists.remove(id)?;
        self.touch();
        debug!(%id, "participant removed");
        Ok(())
    }

    pub fn update_participant(
        &mut self,
        id: Uuid,
        patch: ParticipantPatch,
    ) -> Result<(), ReleaseError> {
        self.record.artists.update(id, patch)?;
        self.touch();
        Ok(())
    }

    pub fn move_participant(&mut self, from: usize, to: usize) -> Result<(), ReleaseError> {
        self.record.artists.move_participant(from, to)?;
        self.touch();
        debug!(from, to, "participant moved");
        Ok(())
    }

    // Tracks, delegated to the intake validator

    /// Validate a candidate batch against the configured constraints and
    /// commit the accepted files. Rejections are data in the outcome, never
    /// errors, and a rejected file leaves the record untouched.
    pub fn add_files(&mut self, candidates: Vec<CandidateFile>) -> IntakeOutcome {
        let results =
            intake::validate_batch(candidates, self.record.tracks.len(), &self.config.intake);

        let mut added = Vec::new();
        let mut rejected = Vec::new();
        for entry in results {
            if entry.state.is_accepted() {
                let track = TrackFile {
                    id: Uuid::new_v4(),
                    file_name: entry.file.file_name,
                    content_type: entry.file.content_type,
                    size: entry.file.size,
                    added_at: Utc::now(),
                };
                self.record.tracks.push(track.clone());
                added.push(track);
            } else {
                rejected.push(entry);
            }
        }

        if !added.is_empty() {
            self.touch();
        }
        debug!(
            added = added.len(),
            rejected = rejected.len(),
            total_tracks = self.record.tracks.len(),
            "upload batch committed"
        );
        IntakeOutcome { added, rejected }
    }

    pub fn remove_file(&mut self, id: Uuid) -> Result<TrackFile, ReleaseError> {
        let index = self
            .record
            .tracks
            .iter()
            .position(|t| t.id == id)
            .ok_or(ReleaseError::UnknownTrack(id))?;
        let track = self.record.tracks.remove(index);
        self.touch();
        debug!(%id, "track removed");
        Ok(track)
    }

    // Derived state

    /// Recompute the readiness checklist from the current record. Pull-based
    /// and cheap; callers invoke it on every render.
    pub fn validation_summary(&self) -> ValidationSummary {
        validation::summarize(&self.record, self.completion_percent)
    }

    pub fn completion_percent(&self) -> u8 {
        self.completion_percent
    }

    /// Set the submission progress signal. Clamped to 100.
    pub fn set_completion_percent(&mut self, percent: u8) {
        self.completion_percent = percent.min(100);
    }
}
