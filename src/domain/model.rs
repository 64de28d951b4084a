use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate business lead returned by the generative search backend.
///
/// `id` is opaque and globally unique within a store; it never changes once
/// the prospect is persisted. Field names on the wire are camelCase, matching
/// the schema the search prompt requests from the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prospect {
    pub id: String,
    pub company_name: String,
    pub web_url: String,
    pub contact: Contact,
    pub location: String,
    pub sector: String,
    pub full_address: String,
    pub needs_analysis: String,
    /// Integer estimate in [0, 100]; only scores above 80 are admissible
    /// from a search batch.
    pub hire_probability: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    /// Search batches usually omit this; it defaults to the moment the
    /// record was validated.
    #[serde(default = "Utc::now")]
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub score: f64,
    pub reviews: u64,
}

/// A service the user offers to prospects. Created, edited and removed by
/// the user; the core never mints these on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    /// When present, used in the email signature instead of the profile page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
}

/// Read-only sender identity. An empty `name` blocks every generation
/// operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub web_url: String,
}

/// Validated draft payload extracted from a generation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailBody {
    pub subject: String,
    pub body: String,
}

/// An outreach email produced by a successful generation + validation step.
/// Snapshots the recipient and service at generation time; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedEmail {
    pub id: String,
    pub recipient: Prospect,
    pub service: Service,
    pub body: EmailBody,
    pub created_at: DateTime<Utc>,
}

/// A logged phone call against a saved prospect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    pub id: String,
    pub prospect_id: String,
    pub occurred_at: DateTime<Utc>,
    pub outcome: CallOutcome,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallOutcome {
    Interested,
    NotInterested,
    Voicemail,
    FollowUp,
    Contacted,
    Other,
}

/// Output of batch validation: the surviving records plus a count of the
/// elements that were dropped.
#[derive(Debug, Clone, Default)]
pub struct ValidatedBatch {
    pub prospects: Vec<Prospect>,
    pub rejected: usize,
}
