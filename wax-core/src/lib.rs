//! Core state and validation engine for the wax release submission form.
//!
//! One [`release::ReleaseManager`] per editing session owns the evolving
//! [`release::ReleaseRecord`] (title, genre, rating, credited participants,
//! uploaded tracks) and is the single write surface over it. Everything
//! user-facing (layout, pickers, navigation) lives outside this crate and
//! talks to the manager through typed operations.
//!
//! Derived state is pull-based: [`validation`] recomputes the readiness
//! checklist from a record snapshot on every read. Upload batches go through
//! [`intake`], which annotates every candidate with an accept/reject outcome
//! instead of failing.

pub mod config;
pub mod content_type;
pub mod intake;
pub mod platforms;
pub mod release;
pub mod validation;

pub use config::{Config, ConfigError};
pub use content_type::ContentType;
pub use intake::{
    validate_batch, AcceptPattern, CandidateFile, IntakeConstraints, ValidatedFile,
    ValidationState,
};
pub use platforms::{Platform, PlatformError, PlatformLink};
pub use release::{
    IntakeOutcome, ParentalAdvisory, Participant, ParticipantError, ParticipantList,
    ParticipantPatch, ParticipantRole, ReleaseError, ReleaseManager, ReleaseRecord, ReleaseType,
    TrackFile, GENRES,
};
pub use validation::{
    compute_requirements, summarize, RequirementGroup, RequirementItem, ValidationSummary,
};
