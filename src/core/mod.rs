pub mod bulk;
pub mod extract;
pub mod filter;
pub mod pipeline;
pub mod prompts;
pub mod select;
pub mod store;
pub mod validate;

pub use crate::domain::model::{
    CallOutcome, CallRecord, Contact, EmailBody, GeneratedEmail, Prospect, Rating, Service,
    UserProfile, ValidatedBatch,
};
pub use crate::domain::ports::{LeadGenerator, Persistence, ProgressSink};
pub use crate::utils::error::Result;
