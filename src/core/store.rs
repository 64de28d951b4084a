use crate::domain::model::{CallOutcome, CallRecord, GeneratedEmail, Prospect, Service};
use crate::domain::ports::Persistence;
use crate::utils::error::{ProspectError, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

pub const PROSPECTS_KEY: &str = "prospects.json";
pub const SERVICES_KEY: &str = "services.json";
pub const EMAILS_KEY: &str = "emails.json";
pub const CALLS_KEY: &str = "calls.json";

async fn load_list<T, P>(persistence: &P, key: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    P: Persistence,
{
    match persistence.load(key).await? {
        Some(bytes) => serde_json::from_slice(&bytes).map_err(ProspectError::Serialization),
        None => Ok(Vec::new()),
    }
}

async fn save_list<T, P>(persistence: &P, key: &str, items: &[T]) -> Result<()>
where
    T: Serialize,
    P: Persistence,
{
    let bytes = serde_json::to_vec_pretty(items).map_err(ProspectError::Serialization)?;
    persistence.save(key, &bytes).await
}

/// The authoritative ordered collection of saved prospects.
///
/// Every mutation is written to the persistence collaborator before it is
/// committed to memory, so a failed save leaves the in-memory state exactly
/// as it was.
pub struct ProspectStore<P: Persistence> {
    items: Vec<Prospect>,
    persistence: P,
}

impl<P: Persistence> ProspectStore<P> {
    pub async fn hydrate(persistence: P) -> Result<Self> {
        let items = load_list(&persistence, PROSPECTS_KEY).await?;
        Ok(Self { items, persistence })
    }

    /// Inserts every prospect whose id is not already present; duplicates
    /// are skipped silently, so the operation is idempotent under id
    /// collision. Returns the number of records actually inserted.
    pub async fn add_batch(&mut self, batch: Vec<Prospect>) -> Result<usize> {
        let mut next = self.items.clone();
        let mut seen: HashSet<String> = next.iter().map(|p| p.id.clone()).collect();
        let mut inserted = 0;

        for prospect in batch {
            if seen.insert(prospect.id.clone()) {
                next.push(prospect);
                inserted += 1;
            }
        }

        if inserted > 0 {
            save_list(&self.persistence, PROSPECTS_KEY, &next).await?;
            self.items = next;
            tracing::info!("💾 Saved {} new prospect(s)", inserted);
        }
        Ok(inserted)
    }

    /// Removes every prospect whose id is in `ids`; ids with no matching
    /// record are ignored. Returns the number removed.
    pub async fn remove_many(&mut self, ids: &HashSet<String>) -> Result<usize> {
        let next: Vec<Prospect> = self
            .items
            .iter()
            .filter(|p| !ids.contains(&p.id))
            .cloned()
            .collect();
        let removed = self.items.len() - next.len();

        if removed > 0 {
            save_list(&self.persistence, PROSPECTS_KEY, &next).await?;
            self.items = next;
            tracing::info!("💾 Removed {} prospect(s)", removed);
        }
        Ok(removed)
    }

    /// Replaces the stored record with a matching id wholesale. A missing id
    /// is a silent no-op; callers are expected to update existing records.
    pub async fn update(&mut self, prospect: Prospect) -> Result<()> {
        let Some(position) = self.items.iter().position(|p| p.id == prospect.id) else {
            return Ok(());
        };
        let mut next = self.items.clone();
        next[position] = prospect;
        save_list(&self.persistence, PROSPECTS_KEY, &next).await?;
        self.items = next;
        Ok(())
    }

    pub fn items(&self) -> &[Prospect] {
        &self.items
    }

    pub fn ids(&self) -> HashSet<String> {
        self.items.iter().map(|p| p.id.clone()).collect()
    }
}

/// Services the user offers; edited directly by the user.
pub struct ServiceStore<P: Persistence> {
    items: Vec<Service>,
    persistence: P,
}

impl<P: Persistence> ServiceStore<P> {
    pub async fn hydrate(persistence: P) -> Result<Self> {
        let items = load_list(&persistence, SERVICES_KEY).await?;
        Ok(Self { items, persistence })
    }

    pub async fn add(
        &mut self,
        name: &str,
        description: &str,
        web_url: Option<String>,
    ) -> Result<Service> {
        let service = Service {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            web_url,
        };
        let mut next = self.items.clone();
        next.push(service.clone());
        save_list(&self.persistence, SERVICES_KEY, &next).await?;
        self.items = next;
        Ok(service)
    }

    pub async fn remove(&mut self, id: &str) -> Result<bool> {
        let next: Vec<Service> = self.items.iter().filter(|s| s.id != id).cloned().collect();
        if next.len() == self.items.len() {
            return Ok(false);
        }
        save_list(&self.persistence, SERVICES_KEY, &next).await?;
        self.items = next;
        Ok(true)
    }

    pub async fn update(&mut self, service: Service) -> Result<()> {
        let Some(position) = self.items.iter().position(|s| s.id == service.id) else {
            return Ok(());
        };
        let mut next = self.items.clone();
        next[position] = service;
        save_list(&self.persistence, SERVICES_KEY, &next).await?;
        self.items = next;
        Ok(())
    }

    pub fn items(&self) -> &[Service] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&Service> {
        self.items.iter().find(|s| s.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Service> {
        self.items.iter().find(|s| s.name == name)
    }
}

/// Emails produced by successful generation runs. Append-only; entries are
/// never mutated.
pub struct EmailStore<P: Persistence> {
    items: Vec<GeneratedEmail>,
    persistence: P,
}

impl<P: Persistence> EmailStore<P> {
    pub async fn hydrate(persistence: P) -> Result<Self> {
        let items = load_list(&persistence, EMAILS_KEY).await?;
        Ok(Self { items, persistence })
    }

    pub async fn add(&mut self, email: GeneratedEmail) -> Result<()> {
        let mut next = self.items.clone();
        next.push(email);
        save_list(&self.persistence, EMAILS_KEY, &next).await?;
        self.items = next;
        Ok(())
    }

    pub fn items(&self) -> &[GeneratedEmail] {
        &self.items
    }
}

/// Call log for saved prospects.
pub struct CallLogStore<P: Persistence> {
    items: Vec<CallRecord>,
    persistence: P,
}

impl<P: Persistence> CallLogStore<P> {
    pub async fn hydrate(persistence: P) -> Result<Self> {
        let items = load_list(&persistence, CALLS_KEY).await?;
        Ok(Self { items, persistence })
    }

    pub async fn add(
        &mut self,
        prospect_id: &str,
        outcome: CallOutcome,
        notes: &str,
    ) -> Result<CallRecord> {
        let record = CallRecord {
            id: Uuid::new_v4().to_string(),
            prospect_id: prospect_id.to_string(),
            occurred_at: chrono::Utc::now(),
            outcome,
            notes: notes.to_string(),
        };
        let mut next = self.items.clone();
        next.push(record.clone());
        save_list(&self.persistence, CALLS_KEY, &next).await?;
        self.items = next;
        Ok(record)
    }

    pub fn for_prospect(&self, prospect_id: &str) -> Vec<&CallRecord> {
        self.items
            .iter()
            .filter(|c| c.prospect_id == prospect_id)
            .collect()
    }

    pub fn items(&self) -> &[CallRecord] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Contact;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MemoryStore {
        entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self::default()
        }

        async fn get(&self, key: &str) -> Option<Vec<u8>> {
            let entries = self.entries.lock().await;
            entries.get(key).cloned()
        }
    }

    impl Persistence for MemoryStore {
        async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
            let entries = self.entries.lock().await;
            Ok(entries.get(key).cloned())
        }

        async fn save(&self, key: &str, data: &[u8]) -> Result<()> {
            let mut entries = self.entries.lock().await;
            entries.insert(key.to_string(), data.to_vec());
            Ok(())
        }
    }

    /// Loads fine but refuses every save.
    #[derive(Clone, Default)]
    struct FailingStore;

    impl Persistence for FailingStore {
        async fn load(&self, _key: &str) -> Result<Option<Vec<u8>>> {
            Ok(None)
        }

        async fn save(&self, _key: &str, _data: &[u8]) -> Result<()> {
            Err(ProspectError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            )))
        }
    }

    fn prospect(id: &str, probability: u8) -> Prospect {
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
            location: "Springfield".to_string(),
            sector: "Retail".to_string(),
            full_address: "1 Main St".to_string(),
            needs_analysis: String::new(),
            hire_probability: probability,
            rating: None,
            added_at: chrono::Utc::now(),
        }
    }

    fn id_set(values: &[&str]) -> HashSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_add_batch_is_idempotent() {
        let mut store = ProspectStore::hydrate(MemoryStore::new()).await.unwrap();
        let batch = vec![prospect("a", 90), prospect("b", 85)];

        assert_eq!(store.add_batch(batch.clone()).await.unwrap(), 2);
        assert_eq!(store.add_batch(batch).await.unwrap(), 0);
        assert_eq!(store.items().len(), 2);
    }

    #[tokio::test]
    async fn test_add_batch_skips_duplicates_within_the_batch() {
        let mut store = ProspectStore::hydrate(MemoryStore::new()).await.unwrap();
        let inserted = store
            .add_batch(vec![prospect("a", 90), prospect("a", 95), prospect("b", 85)])
            .await
            .unwrap();
        assert_eq!(inserted, 2);
        // First occurrence wins; the stored record is never overwritten.
        assert_eq!(store.items()[0].hire_probability, 90);
    }

    #[tokio::test]
    async fn test_remove_many_ignores_unknown_ids() {
        let mut store = ProspectStore::hydrate(MemoryStore::new()).await.unwrap();
        store
            .add_batch(vec![prospect("a", 90), prospect("b", 85)])
            .await
            .unwrap();

        let removed = store
            .remove_many(&id_set(&["b", "does-not-exist"]))
            .await
            .unwrap();
        assert_eq!(removed, 1);
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].id, "a");
    }

    #[tokio::test]
    async fn test_update_replaces_wholesale_and_ignores_missing_id() {
        let mut store = ProspectStore::hydrate(MemoryStore::new()).await.unwrap();
        store.add_batch(vec![prospect("a", 90)]).await.unwrap();

        let mut changed = prospect("a", 99);
        changed.company_name = "Renamed Inc".to_string();
        store.update(changed).await.unwrap();
        assert_eq!(store.items()[0].company_name, "Renamed Inc");
        assert_eq!(store.items()[0].hire_probability, 99);

        store.update(prospect("ghost", 80)).await.unwrap();
        assert_eq!(store.items().len(), 1);
    }

    #[tokio::test]
    async fn test_mutations_are_reflected_to_persistence() {
        let memory = MemoryStore::new();
        let mut store = ProspectStore::hydrate(memory.clone()).await.unwrap();
        store.add_batch(vec![prospect("a", 90)]).await.unwrap();

        let bytes = memory.get(PROSPECTS_KEY).await.unwrap();
        let persisted: Vec<Prospect> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].id, "a");

        store.remove_many(&id_set(&["a"])).await.unwrap();
        let bytes = memory.get(PROSPECTS_KEY).await.unwrap();
        let persisted: Vec<Prospect> = serde_json::from_slice(&bytes).unwrap();
        assert!(persisted.is_empty());
    }

    #[tokio::test]
    async fn test_failed_save_leaves_memory_unchanged() {
        let mut store = ProspectStore::hydrate(FailingStore).await.unwrap();
        let result = store.add_batch(vec![prospect("a", 90)]).await;
        assert!(result.is_err());
        assert!(store.items().is_empty());
    }

    #[tokio::test]
    async fn test_hydrate_restores_previous_state() {
        let memory = MemoryStore::new();
        {
            let mut store = ProspectStore::hydrate(memory.clone()).await.unwrap();
            store
                .add_batch(vec![prospect("a", 90), prospect("b", 85)])
                .await
                .unwrap();
        }
        let store = ProspectStore::hydrate(memory).await.unwrap();
        assert_eq!(store.items().len(), 2);
    }

    #[tokio::test]
    async fn test_service_store_crud() {
        let mut store = ServiceStore::hydrate(MemoryStore::new()).await.unwrap();
        let service = store
            .add("Web Development", "Custom sites", None)
            .await
            .unwrap();
        assert!(!service.id.is_empty());
        assert!(store.find(&service.id).is_some());
        assert!(store.find_by_name("Web Development").is_some());

        let mut edited = service.clone();
        edited.web_url = Some("https://studio.example".to_string());
        store.update(edited).await.unwrap();
        assert_eq!(
            store.find(&service.id).unwrap().web_url.as_deref(),
            Some("https://studio.example")
        );

        assert!(store.remove(&service.id).await.unwrap());
        assert!(!store.remove(&service.id).await.unwrap());
        assert!(store.items().is_empty());
    }

    #[tokio::test]
    async fn test_email_store_appends_and_persists() {
        let memory = MemoryStore::new();
        let mut store = EmailStore::hydrate(memory.clone()).await.unwrap();
        let email = GeneratedEmail {
            id: Uuid::new_v4().to_string(),
            recipient: prospect("a", 90),
            service: Service {
                id: "s1".to_string(),
                name: "Web Development".to_string(),
                description: "Custom sites".to_string(),
                web_url: None,
            },
            body: crate::domain::model::EmailBody {
                subject: "Hello".to_string(),
                body: "Dear Jane".to_string(),
            },
            created_at: chrono::Utc::now(),
        };

        store.add(email).await.unwrap();
        assert_eq!(store.items().len(), 1);

        let bytes = memory.get(EMAILS_KEY).await.unwrap();
        let persisted: Vec<GeneratedEmail> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(persisted.len(), 1);
    }

    #[tokio::test]
    async fn test_call_log_filters_by_prospect() {
        let mut store = CallLogStore::hydrate(MemoryStore::new()).await.unwrap();
        store
            .add("a", CallOutcome::Interested, "Wants a quote")
            .await
            .unwrap();
        store
            .add("b", CallOutcome::Voicemail, "Left a message")
            .await
            .unwrap();
        store
            .add("a", CallOutcome::FollowUp, "Call back next week")
            .await
            .unwrap();

        let for_a = store.for_prospect("a");
        assert_eq!(for_a.len(), 2);
        assert_eq!(for_a[0].outcome, CallOutcome::Interested);
        assert!(store.for_prospect("ghost").is_empty());
    }
}
