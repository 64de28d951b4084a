use crate::domain::model::UserProfile;
use crate::utils::error::{ProspectError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};

/// The TOML file holding the sender profile and the services on offer.
///
/// ```toml
/// [profile]
/// name = "Alex Doe"
/// email = "alex@studio.example"
/// web_url = "https://studio.example"
///
/// [[services]]
/// name = "Web Development"
/// description = "Custom sites and storefronts"
/// web_url = "https://studio.example/web"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileFile {
    pub profile: ProfileSection,
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSection {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub web_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub name: String,
    pub description: String,
    pub web_url: Option<String>,
}

impl ProfileFile {
    pub fn from_file(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ProspectError::config(format!("could not read profile file {}: {}", path, e))
        })?;
        let parsed: ProfileFile = toml::from_str(&text).map_err(|e| {
            ProspectError::config(format!("profile file {} is not valid TOML: {}", path, e))
        })?;
        parsed.validate()?;
        Ok(parsed)
    }

    pub fn user_profile(&self) -> UserProfile {
        UserProfile {
            name: self.profile.name.clone(),
            email: self.profile.email.clone(),
            web_url: self.profile.web_url.clone(),
        }
    }
}

impl Validate for ProfileFile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("profile.name", &self.profile.name)?;
        validate_non_empty_string("profile.email", &self.profile.email)?;
        if !self.profile.web_url.is_empty() {
            validate_url("profile.web_url", &self.profile.web_url)?;
        }
        for (index, service) in self.services.iter().enumerate() {
            validate_non_empty_string(&format!("services[{}].name", index), &service.name)?;
            validate_non_empty_string(
                &format!("services[{}].description", index),
                &service.description,
            )?;
            if let Some(url) = &service.web_url {
                validate_url(&format!("services[{}].web_url", index), url)?;
            }
        }
        Ok(())
    }
}
