use crate::domain::ports::Persistence;
use crate::utils::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Filesystem persistence: one JSON file per collection key under a base
/// directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    base_path: String,
}

impl LocalStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Persistence for LocalStore {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let full_path = Path::new(&self.base_path).join(key);
        match fs::read(full_path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, key: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(key);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
