use crate::core::pipeline::OutreachPipeline;
use crate::core::select::SelectionTracker;
use crate::core::store::EmailStore;
use crate::domain::model::{Prospect, Service, UserProfile};
use crate::domain::ports::{LeadGenerator, Persistence, ProgressSink};
use crate::utils::error::{ProspectError, Result};

/// Lifecycle of one bulk invocation. `Rejected` is terminal and reached only
/// when a precondition fails before any item is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Completed,
    Rejected,
}

/// Aggregate outcome of a bulk run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BulkReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Drafts one email per selected prospect, strictly one at a time and in
/// input order; no two generation calls for the same batch are ever in
/// flight concurrently.
///
/// Progress for item *i* is reported before its generation call is issued,
/// and the item's outcome is fully applied before item *i + 1* starts. A
/// failing item is counted and logged; it never aborts the batch. `run`
/// takes `&mut self`, so a second batch cannot start while one is in
/// flight. Cancellation between items is not supported.
#[derive(Debug, Default)]
pub struct BulkRunner {
    state: RunState,
}

impl BulkRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn run<G, P, S>(
        &mut self,
        targets: &[Prospect],
        service: Option<&Service>,
        profile: &UserProfile,
        pipeline: &OutreachPipeline<G>,
        emails: &mut EmailStore<P>,
        selection: &mut SelectionTracker,
        progress: &mut S,
    ) -> Result<BulkReport>
    where
        G: LeadGenerator,
        P: Persistence,
        S: ProgressSink,
    {
        let Some(service) = service else {
            self.state = RunState::Rejected;
            return Err(ProspectError::precondition(
                "select a service before generating emails",
            ));
        };
        if targets.is_empty() {
            self.state = RunState::Rejected;
            return Err(ProspectError::precondition(
                "select at least one prospect before generating emails",
            ));
        }
        if profile.name.trim().is_empty() {
            self.state = RunState::Rejected;
            return Err(ProspectError::precondition(
                "configure a profile name before generating emails",
            ));
        }

        self.state = RunState::Running;
        let total = targets.len();
        let mut succeeded = 0;
        let mut failed = 0;

        for (index, prospect) in targets.iter().enumerate() {
            progress.report(index + 1, total, &prospect.company_name);

            match pipeline.draft_email(prospect, service, profile).await {
                Ok(email) => match emails.add(email).await {
                    Ok(()) => succeeded += 1,
                    Err(e) => {
                        failed += 1;
                        tracing::warn!(
                            "✉️  Could not store email for {}: {}",
                            prospect.company_name,
                            e
                        );
                    }
                },
                Err(e) => {
                    failed += 1;
                    tracing::warn!(
                        "✉️  Email generation failed for {}: {}",
                        prospect.company_name,
                        e
                    );
                }
            }
        }

        selection.clear();
        self.state = RunState::Completed;

        let report = BulkReport {
            attempted: total,
            succeeded,
            failed,
        };
        tracing::info!(
            "✉️  Bulk run complete: {} of {} emails generated, {} failed",
            report.succeeded,
            report.attempted,
            report.failed
        );
        Ok(report)
    }
}

/// Progress sink that publishes through `tracing`; the CLI's default.
#[derive(Debug, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn report(&mut self, current: usize, total: usize, label: &str) {
        tracing::info!("✉️  Generating email {} of {} for {}...", current, total, label);
    }
}
