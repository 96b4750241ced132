pub mod entity;
pub mod invariants;

pub use entity::Participant;
pub use invariants::validate_participant_name;
