use crate::core::{extract, validate};
use crate::domain::model::{GeneratedEmail, Prospect, Service, UserProfile, ValidatedBatch};
use crate::domain::ports::LeadGenerator;
use crate::utils::error::{ProspectError, Result};
use uuid::Uuid;

/// The two user-facing generation operations: searching for a prospect
/// batch and drafting a single outreach email. Composes the generator port
/// with payload extraction and validation; extraction and parse failures
/// surface to the caller unchanged and are never retried.
pub struct OutreachPipeline<G: LeadGenerator> {
    generator: G,
}

impl<G: LeadGenerator> OutreachPipeline<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Runs one search batch. Survivors are sorted by hire probability,
    /// highest first; the rejected count is carried for diagnostics.
    pub async fn search_prospects(
        &self,
        service: &Service,
        sector: &str,
        location: &str,
        profile: &UserProfile,
    ) -> Result<ValidatedBatch> {
        if profile.name.trim().is_empty() {
            return Err(ProspectError::precondition(
                "configure a profile name before searching",
            ));
        }
        if sector.trim().is_empty() {
            return Err(ProspectError::precondition("sector must not be empty"));
        }
        if location.trim().is_empty() {
            return Err(ProspectError::precondition("location must not be empty"));
        }

        tracing::info!(
            "📡 Searching prospects: sector='{}' location='{}' service='{}'",
            sector,
            location,
            service.name
        );

        let raw = self
            .generator
            .prospect_batch(service, sector, location)
            .await?;
        let payload = extract::array_payload(&raw)?;
        let mut batch = validate::prospect_batch(payload)?;
        batch
            .prospects
            .sort_by(|a, b| b.hire_probability.cmp(&a.hire_probability));

        if batch.rejected > 0 {
            tracing::warn!(
                "📡 Search dropped {} record(s) that failed validation",
                batch.rejected
            );
        }
        tracing::info!("📡 Search returned {} prospect(s)", batch.prospects.len());
        Ok(batch)
    }

    /// Drafts one outreach email, snapshotting the prospect and service
    /// into the result.
    pub async fn draft_email(
        &self,
        prospect: &Prospect,
        service: &Service,
        profile: &UserProfile,
    ) -> Result<GeneratedEmail> {
        if profile.name.trim().is_empty() {
            return Err(ProspectError::precondition(
                "configure a profile name before generating emails",
            ));
        }

        let raw = self
            .generator
            .email_draft(prospect, service, profile)
            .await?;
        let payload = extract::object_payload(&raw)?;
        let body = validate::email_draft(payload)?;

        Ok(GeneratedEmail {
            id: Uuid::new_v4().to_string(),
            recipient: prospect.clone(),
            service: service.clone(),
            body,
            created_at: chrono::Utc::now(),
        })
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Contact;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct MockGenerator {
        batch_response: String,
        email_response: String,
        calls: Arc<AtomicUsize>,
    }

    impl MockGenerator {
        fn new(batch_response: &str, email_response: &str) -> Self {
            Self {
                batch_response: batch_response.to_string(),
                email_response: email_response.to_string(),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LeadGenerator for MockGenerator {
        async fn prospect_batch(
            &self,
            _service: &Service,
            _sector: &str,
            _location: &str,
        ) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.batch_response.clone())
        }

        async fn email_draft(
            &self,
            _prospect: &Prospect,
            _service: &Service,
            _profile: &UserProfile,
        ) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.email_response.clone())
        }
    }

    fn service() -> Service {
        Service {
            id: "s1".to_string(),
            name: "Web Development".to_string(),
            description: "Custom sites".to_string(),
            web_url: None,
        }
    }

    fn profile(name: &str) -> UserProfile {
        UserProfile {
            name: name.to_string(),
            email: "alex@studio.example".to_string(),
            web_url: "https://studio.example".to_string(),
        }
    }

    fn prospect(id: &str) -> Prospect {
        Prospect {
            id: id.to_string(),
            company_name: format!("Company {}", id),
            web_url: "https://example.com".to_string(),
            contact: Contact {
                name: "Jane Roe".to_string(),
                title: "Director".to_string(),
                email: "jane@example.com".to_string(),
                phone: "+1 555 0100".to_string(),
            },
            location: "Madrid".to_string(),
            sector: "Retail".to_string(),
            full_address: "1 Main St".to_string(),
            needs_analysis: String::new(),
            hire_probability: 92,
            rating: None,
            added_at: chrono::Utc::now(),
        }
    }

    fn batch_json() -> String {
        serde_json::json!([
            {
                "id": "low", "companyName": "Low Co", "webUrl": "https://low.example",
                "contact": {"name": "A", "title": "B", "email": "a@low.example", "phone": "1"},
                "location": "Madrid", "sector": "Retail", "fullAddress": "X",
                "needsAnalysis": "Y", "hireProbability": 84
            },
            {
                "id": "high", "companyName": "High Co", "webUrl": "https://high.example",
                "contact": {"name": "A", "title": "B", "email": "a@high.example", "phone": "1"},
                "location": "Madrid", "sector": "Retail", "fullAddress": "X",
                "needsAnalysis": "Y", "hireProbability": 97
            },
            {
                "id": "dropped", "companyName": "Dropped Co", "webUrl": "https://d.example",
                "contact": {"name": "A", "title": "B", "email": "a@d.example", "phone": "1"},
                "location": "Madrid", "sector": "Retail", "fullAddress": "X",
                "needsAnalysis": "Y", "hireProbability": 60
            }
        ])
        .to_string()
    }

    #[tokio::test]
    async fn test_search_extracts_validates_and_sorts() {
        let raw = format!("Model says:\n{}\nthanks!", batch_json());
        let generator = MockGenerator::new(&raw, "{}");
        let pipeline = OutreachPipeline::new(generator);

        let batch = pipeline
            .search_prospects(&service(), "Retail", "Madrid", &profile("Alex"))
            .await
            .unwrap();

        let ids: Vec<&str> = batch.prospects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "low"]);
        assert_eq!(batch.rejected, 1);
    }

    #[tokio::test]
    async fn test_search_blocks_on_missing_profile_name() {
        let generator = MockGenerator::new("[]", "{}");
        let pipeline = OutreachPipeline::new(generator);

        let err = pipeline
            .search_prospects(&service(), "Retail", "Madrid", &profile("  "))
            .await
            .unwrap_err();
        assert!(matches!(err, ProspectError::Precondition { .. }));
        assert_eq!(pipeline.generator().call_count(), 0);
    }

    #[tokio::test]
    async fn test_search_surfaces_extraction_error() {
        let generator = MockGenerator::new("I could not find anything useful.", "{}");
        let pipeline = OutreachPipeline::new(generator);

        let err = pipeline
            .search_prospects(&service(), "Retail", "Madrid", &profile("Alex"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProspectError::Extraction { .. }));
    }

    #[tokio::test]
    async fn test_draft_email_builds_snapshot() {
        let generator = MockGenerator::new(
            "[]",
            "```json\n{\"subject\": \"Quick idea\", \"body\": \"Dear Jane\"}\n```",
        );
        let pipeline = OutreachPipeline::new(generator);

        let email = pipeline
            .draft_email(&prospect("p1"), &service(), &profile("Alex"))
            .await
            .unwrap();

        assert_eq!(email.body.subject, "Quick idea");
        assert_eq!(email.recipient.id, "p1");
        assert_eq!(email.service.name, "Web Development");
        assert!(!email.id.is_empty());
    }

    #[tokio::test]
    async fn test_draft_email_rejects_empty_subject() {
        let generator = MockGenerator::new("[]", "{\"subject\": \"\", \"body\": \"Hi\"}");
        let pipeline = OutreachPipeline::new(generator);

        let err = pipeline
            .draft_email(&prospect("p1"), &service(), &profile("Alex"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProspectError::Schema { .. }));
    }
}
