//! Loan application driver
//!
//! Wires the in-memory adapters, seeds the catalogue and processes creation
//! requests from stdin, one JSON object per line. Each request produces one
//! JSON line on stdout; logs go to stderr.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loans::adapters::{
    InMemoryApplicationRepository, InMemoryLoanTypeRepository, InMemoryStatusRepository,
    UuidV4Generator,
};
use loans::app::{
    CatalogSeed, CatalogService, CreateApplicationRequest, LoanApplicationService, StatusSeed,
};
use loans::config::Config;
use loans::domain::ports::IdGenerator;
use loans::error::AppError;

type ApplicationService = LoanApplicationService<
    InMemoryLoanTypeRepository,
    InMemoryStatusRepository,
    InMemoryApplicationRepository,
>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        initial_status = %config.initial_status_name,
        "Starting loan application service..."
    );

    let loan_types = Arc::new(InMemoryLoanTypeRepository::new());
    let statuses = Arc::new(InMemoryStatusRepository::new());
    let applications = Arc::new(InMemoryApplicationRepository::new());
    let ids: Arc<dyn IdGenerator> = Arc::new(UuidV4Generator);

    let catalog = CatalogService::new(loan_types.clone(), statuses.clone(), ids.clone());
    let mut seed = match &config.catalog_seed_path {
        Some(path) => load_seed(path)?,
        None => CatalogSeed::default(),
    };
    seed.statuses.insert(
        0,
        StatusSeed {
            name: config.initial_status_name.clone(),
            description: "Solicitud pendiente de revisión".to_string(),
        },
    );
    catalog.seed(&seed).await.context("Failed to seed catalog")?;
    tracing::info!(
        statuses = seed.statuses.len(),
        loan_types = seed.loan_types.len(),
        "Catalog seeded"
    );

    let service = LoanApplicationService::new(
        loan_types,
        statuses,
        applications,
        ids,
        config.initial_status_name.clone(),
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_line(&service, &line).await;
        stdout.write_all(response.to_string().as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    match service.list_pending().await {
        Ok(pending) => tracing::info!(pending = pending.len(), "Input exhausted"),
        Err(e) => tracing::warn!(error = %e, "Could not count pending applications"),
    }

    Ok(())
}

fn load_seed(path: &Path) -> anyhow::Result<CatalogSeed> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog seed {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse catalog seed {}", path.display()))
}

async fn handle_line(service: &ApplicationService, line: &str) -> Value {
    let result = match serde_json::from_str::<CreateApplicationRequest>(line) {
        Ok(request) => service.create_application(&request).await,
        Err(e) => Err(AppError::InvalidInput(format!("Malformed request: {}", e))),
    };

    match result {
        Ok(application) => json!({ "status": 201, "application": application }),
        Err(e) => json!(e.to_response()),
    }
}
