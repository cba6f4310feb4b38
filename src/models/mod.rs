pub mod intent;
pub mod message;
pub mod schedule;

pub use intent::Intent;
pub use message::{WebchatMessage, WebchatReply};
pub use schedule::{idempotency_key, PostBody, ScheduleOptions, ScheduleRequest};
