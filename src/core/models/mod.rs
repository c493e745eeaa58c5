//! Domain models
//!
//! Plain data types shared by the services and ports. None of these
//! perform I/O.

mod event;
mod member;
mod outcome;
mod submission;

pub use event::CalendarEvent;
pub use member::{MemberState, RolePair};
pub use outcome::{VerificationOutcome, reprompt};
pub use submission::{IDENTIFIER_LEN, IdentitySubmission, title_case};
