use clap::Parser;
use prospect_etl::config::profile::ProfileFile;
use prospect_etl::utils::{logger, validation::Validate};
use prospect_etl::{
    filter_and_sort, BulkRunner, CliConfig, EmailStore, FilterCriteria, GeminiClient, LocalStore,
    LogProgress, OutreachPipeline, ProspectStore, SelectionTracker, ServiceStore, SortKey,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting prospect-etl CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match run(config).await {
        Ok(()) => {
            tracing::info!("✅ prospect-etl finished successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ prospect-etl failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(config: CliConfig) -> prospect_etl::Result<()> {
    let profile_file = ProfileFile::from_file(&config.profile_file)?;
    let profile = profile_file.user_profile();
    let api_key = config.resolved_api_key()?;

    let generator = GeminiClient::new(config.api_base_url.clone(), config.model.clone(), api_key);
    let pipeline = OutreachPipeline::new(generator);

    let mut prospects = ProspectStore::hydrate(LocalStore::new(config.data_dir.clone())).await?;
    let mut services = ServiceStore::hydrate(LocalStore::new(config.data_dir.clone())).await?;
    let mut emails = EmailStore::hydrate(LocalStore::new(config.data_dir.clone())).await?;

    // Services defined in the profile file are registered once, keeping the
    // ids stable across runs.
    for entry in &profile_file.services {
        if services.find_by_name(&entry.name).is_none() {
            services
                .add(&entry.name, &entry.description, entry.web_url.clone())
                .await?;
        }
    }

    let service = services
        .find_by_name(&config.service)
        .cloned()
        .ok_or_else(|| {
            prospect_etl::ProspectError::config(format!(
                "service '{}' is not defined in {}",
                config.service, config.profile_file
            ))
        })?;

    let batch = pipeline
        .search_prospects(&service, &config.sector, &config.location, &profile)
        .await?;
    println!(
        "🔎 {} prospect(s) found ({} rejected during validation)",
        batch.prospects.len(),
        batch.rejected
    );
    for prospect in &batch.prospects {
        println!(
            "   {:>3}%  {}  ({}, {})",
            prospect.hire_probability, prospect.company_name, prospect.sector, prospect.location
        );
    }

    let inserted = prospects.add_batch(batch.prospects).await?;
    println!("💾 {} new prospect(s) saved to {}", inserted, config.data_dir);

    if config.emails && prospects.items().is_empty() {
        println!("✉️  No saved prospects to email");
    } else if config.emails {
        let mut selection = SelectionTracker::new();
        let visible = filter_and_sort(
            prospects.items(),
            &FilterCriteria::default(),
            SortKey::default(),
        );
        let visible_ids: Vec<String> = visible.iter().map(|p| p.id.clone()).collect();
        selection.select_all_visible(&visible_ids);

        let targets: Vec<_> = visible
            .into_iter()
            .filter(|p| selection.contains(&p.id))
            .collect();

        let mut runner = BulkRunner::new();
        let report = runner
            .run(
                &targets,
                Some(&service),
                &profile,
                &pipeline,
                &mut emails,
                &mut selection,
                &mut LogProgress,
            )
            .await?;
        println!(
            "✉️  {} of {} emails generated{}",
            report.succeeded,
            report.attempted,
            if report.failed > 0 {
                format!(", {} failed", report.failed)
            } else {
                String::new()
            }
        );
    }

    Ok(())
}
