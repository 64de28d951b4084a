use crate::domain::model::{Prospect, Service, UserProfile};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Generative search/drafting backend. Both operations return the raw model
/// text; locating and validating the JSON payload inside it is the caller's
/// job. Transport and quota failures propagate unchanged.
#[async_trait]
pub trait LeadGenerator: Send + Sync {
    async fn prospect_batch(
        &self,
        service: &Service,
        sector: &str,
        location: &str,
    ) -> Result<String>;

    async fn email_draft(
        &self,
        prospect: &Prospect,
        service: &Service,
        profile: &UserProfile,
    ) -> Result<String>;
}

/// Durable key-value storage capability. Stores serialize their own state;
/// this port only moves bytes. A missing key loads as `None`.
pub trait Persistence: Send + Sync {
    fn load(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<u8>>>> + Send;
    fn save(&self, key: &str, data: &[u8])
        -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Receives live progress from a bulk run: 1-based item index, batch size
/// and the target's display name. Makes no assumption about display.
pub trait ProgressSink: Send {
    fn report(&mut self, current: usize, total: usize, label: &str);
}
