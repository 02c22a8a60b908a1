//! Planning logic: prerequisite eligibility, recommendation ranking, and
//! schedule building

pub mod eligibility;
pub mod ranking;
pub mod schedule;

pub use eligibility::eligible;
pub use ranking::{parse_interests, rank, suggest_electives, Recommendation};
pub use schedule::{BuilderConfig, ScheduleBuilder, ScheduleSlot};
