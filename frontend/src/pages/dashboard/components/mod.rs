pub mod activities;
pub mod summary;

pub use activities::ActivitiesSection;
pub use summary::SummarySection;
