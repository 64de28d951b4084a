use crate::domain::model::{EmailBody, Prospect, ValidatedBatch};
use crate::utils::error::{ProspectError, Result};
use serde_json::Value;

/// Scores at or below this are rejected even though the search prompt asks
/// the model to pre-filter.
pub const MIN_ADMISSIBLE_PROBABILITY: u8 = 80;

/// Validates a search-batch payload element by element.
///
/// Elements that fail to deserialize, arrive without an id or company name,
/// or score at or below [`MIN_ADMISSIBLE_PROBABILITY`] are dropped
/// individually and counted; one malformed record never fails the batch.
pub fn prospect_batch(payload: Value) -> Result<ValidatedBatch> {
    let Value::Array(items) = payload else {
        return Err(ProspectError::schema("expected a JSON array of prospects"));
    };

    let mut prospects: Vec<Prospect> = Vec::with_capacity(items.len());
    let mut rejected = 0;

    for item in items {
        match serde_json::from_value::<Prospect>(item) {
            Ok(prospect) => {
                if prospect.id.trim().is_empty() || prospect.company_name.trim().is_empty() {
                    tracing::warn!("Dropping prospect with blank id or company name");
                    rejected += 1;
                } else if prospect.hire_probability <= MIN_ADMISSIBLE_PROBABILITY {
                    tracing::warn!(
                        "Dropping {}: hire probability {} not above {}",
                        prospect.company_name,
                        prospect.hire_probability,
                        MIN_ADMISSIBLE_PROBABILITY
                    );
                    rejected += 1;
                } else {
                    prospects.push(prospect);
                }
            }
            Err(e) => {
                tracing::warn!("Dropping malformed prospect record: {}", e);
                rejected += 1;
            }
        }
    }

    Ok(ValidatedBatch {
        prospects,
        rejected,
    })
}

/// Validates an email-draft payload: `subject` and `body` must both be
/// present, string-typed and non-empty.
pub fn email_draft(payload: Value) -> Result<EmailBody> {
    let draft: EmailBody = serde_json::from_value(payload)
        .map_err(|e| ProspectError::schema(format!("email draft is malformed: {}", e)))?;

    if draft.subject.trim().is_empty() {
        return Err(ProspectError::schema("email draft subject is empty"));
    }
    if draft.body.trim().is_empty() {
        return Err(ProspectError::schema("email draft body is empty"));
    }

    Ok(draft)
}
