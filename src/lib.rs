pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::local::LocalStore;

pub use crate::adapters::gemini::GeminiClient;
pub use crate::core::bulk::{BulkReport, BulkRunner, LogProgress, RunState};
pub use crate::core::filter::{filter_and_sort, FilterCriteria, SortKey};
pub use crate::core::pipeline::OutreachPipeline;
pub use crate::core::select::SelectionTracker;
pub use crate::core::store::{CallLogStore, EmailStore, ProspectStore, ServiceStore};
pub use crate::utils::error::{ProspectError, Result};
