//! Model module containing exam record types

mod record;
mod topic;

pub use record::{TopicRecords, YearRecord};
pub use topic::TopicSummary;
