//! Program catalogue: support pathways, mentors, root causes and support modalities.

mod mentor;
mod pathway;
mod support;

pub use mentor::{mentor_roster, Mentor, MentorId, MentorType};
pub use pathway::{Pathway, PathwayView, UnknownPathway};
pub use support::{
    support_hours_by_modality, ModalityHours, RootCause, RootCauseLog, RootCauseStatus,
    SupportLog, SupportModality,
};
