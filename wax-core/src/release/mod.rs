mod manager;
mod participants;
mod record;

pub use manager::{IntakeOutcome, ReleaseError, ReleaseManager};
pub use participants::{ParticipantError, ParticipantList, ParticipantPatch};
pub use record::{
    ParentalAdvisory, Participant, ParticipantRole, ReleaseRecord, ReleaseType, TrackFile, GENRES,
};
