pub mod local;
pub mod profile;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "prospect-etl")]
#[command(about = "Discover business prospects and draft outreach emails")]
pub struct CliConfig {
    /// Sector to search, e.g. "Restaurants"
    #[arg(long)]
    pub sector: String,

    /// Location to search, e.g. "Madrid"
    #[arg(long)]
    pub location: String,

    /// Name of the service to pitch, as listed in the profile file
    #[arg(long)]
    pub service: String,

    #[arg(long, default_value = "./profile.toml")]
    pub profile_file: String,

    /// Directory holding the persisted prospect, service and email lists
    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    #[arg(long, default_value = "https://generativelanguage.googleapis.com")]
    pub api_base_url: String,

    #[arg(long, default_value = "gemini-2.5-flash")]
    pub model: String,

    /// Falls back to the GEMINI_API_KEY environment variable
    #[arg(long)]
    pub api_key: Option<String>,

    /// Draft an outreach email for every saved prospect after the search
    #[arg(long)]
    pub emails: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("sector", &self.sector)?;
        validate_non_empty_string("location", &self.location)?;
        validate_non_empty_string("service", &self.service)?;
        validate_url("api_base_url", &self.api_base_url)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Resolves the API key from the flag or the environment.
    pub fn resolved_api_key(&self) -> Result<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or_else(|| {
                crate::utils::error::ProspectError::config(
                    "no API key: pass --api-key or set GEMINI_API_KEY",
                )
            })
    }
}
