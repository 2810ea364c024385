//! Console client for the phenotype prediction API

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Args;

use crate::api::types::{
    ApiErrorResponse, ModelEntryResponse, PredictionApiRequest, PredictionResponse,
    RegisterModelApiRequest,
};
use crate::config::AppConfig;

/// Options shared by all client subcommands
#[derive(Debug, Args)]
pub struct ClientArgs {
    /// Base URL of the API server; defaults to the configured client.base_url
    #[arg(long)]
    pub base_url: Option<String>,
}

#[derive(Debug, Args)]
pub struct PhenotypesArgs {
    #[command(flatten)]
    pub client: ClientArgs,

    /// Identifier of the model to query
    #[arg(long)]
    pub model_id: String,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[command(flatten)]
    pub client: ClientArgs,

    /// Path to a JSON file describing the model entry
    #[arg(long)]
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct UnregisterArgs {
    #[command(flatten)]
    pub client: ClientArgs,

    /// Identifier of the model to remove
    #[arg(long)]
    pub model_id: String,
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    #[command(flatten)]
    pub client: ClientArgs,

    /// Identifier of the model that should perform the prediction
    #[arg(long)]
    pub model_id: String,

    /// Comma-delimited file with a header row naming the genotype column
    #[arg(long)]
    pub csv: PathBuf,

    /// Name of the genotype column to read
    #[arg(long)]
    pub column: String,
}

/// Client for querying the phenotype prediction API
#[derive(Debug)]
pub struct CatalogueClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogueClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = base_url.into();
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from CLI arguments, falling back to configured defaults
    pub fn from_args(args: &ClientArgs) -> anyhow::Result<Self> {
        let config = AppConfig::load().unwrap_or_default();
        let base_url = args
            .base_url
            .clone()
            .unwrap_or(config.client.base_url);

        Self::new(base_url, Duration::from_secs(config.client.timeout_secs))
    }

    /// Return the available models from the API
    pub async fn list_models(&self) -> anyhow::Result<Vec<ModelEntryResponse>> {
        let response = self
            .http
            .get(format!("{}/api/models", self.base_url))
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// Return phenotypes that the specified model can predict
    pub async fn list_phenotypes(&self, model_id: &str) -> anyhow::Result<Vec<String>> {
        let response = self
            .http
            .get(format!("{}/api/models/{}/phenotypes", self.base_url, model_id))
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// Register a model in the catalogue via the API
    pub async fn register_model(
        &self,
        request: &RegisterModelApiRequest,
    ) -> anyhow::Result<ModelEntryResponse> {
        let response = self
            .http
            .post(format!("{}/api/models", self.base_url))
            .json(request)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// Remove a model from the catalogue via the API
    pub async fn unregister_model(&self, model_id: &str) -> anyhow::Result<ModelEntryResponse> {
        let response = self
            .http
            .delete(format!("{}/api/models/{}", self.base_url, model_id))
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// Request a phenotype prediction for the given genotype values
    pub async fn predict(
        &self,
        model_id: &str,
        genotype_data: Vec<String>,
    ) -> anyhow::Result<PredictionResponse> {
        let response = self
            .http
            .post(format!(
                "{}/api/models/{}/phenotype_prediction",
                self.base_url, model_id
            ))
            .json(&PredictionApiRequest { genotype_data })
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// Surface the server's error envelope for non-success responses
    async fn check(response: reqwest::Response) -> anyhow::Result<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match response.json::<ApiErrorResponse>().await {
            Ok(body) => bail!("{} ({})", body.error.message, status),
            Err(_) => bail!("request failed with status {}", status),
        }
    }
}

/// Create a human-readable table string for the model catalogue
pub fn format_models_table(models: &[ModelEntryResponse]) -> String {
    let mut lines = vec!["Available Phenotype Models:".to_string()];

    for model in models {
        lines.push(format!(
            "- {} (id={}, version={})",
            model.display_name, model.id, model.version
        ));
        lines.push(format!(
            "  Description: {}",
            model.description.as_deref().unwrap_or("n/a")
        ));
        lines.push(format!(
            "  Supported inputs: {}",
            join_or_na(&model.supported_inputs)
        ));
        lines.push(format!(
            "  Predictable phenotypes: {}",
            join_or_na(&model.predictable_phenotypes)
        ));
    }

    lines.join("\n")
}

fn join_or_na(values: &[String]) -> String {
    if values.is_empty() {
        "n/a".to_string()
    } else {
        values.join(", ")
    }
}

/// Read the named column out of a headered comma-delimited file
pub fn read_genotype_column(path: &Path, column: &str) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    parse_genotype_column(&content, column)
}

/// Extract one column from comma-delimited rows with a header line.
///
/// Cells are trimmed; rows with no value in the column are skipped.
fn parse_genotype_column(content: &str, column: &str) -> anyhow::Result<Vec<String>> {
    let mut lines = content.lines();

    let header = lines.next().context("CSV file is empty")?;
    let index = header
        .split(',')
        .map(str::trim)
        .position(|name| name == column)
        .with_context(|| format!("column '{}' not found in CSV header", column))?;

    let values = lines
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            line.split(',')
                .nth(index)
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(str::to_string)
        })
        .collect();

    Ok(values)
}

// Subcommand bodies

pub async fn run_models(args: ClientArgs) -> anyhow::Result<()> {
    let client = CatalogueClient::from_args(&args)?;
    let models = client.list_models().await?;

    println!("{}", format_models_table(&models));
    Ok(())
}

pub async fn run_phenotypes(args: PhenotypesArgs) -> anyhow::Result<()> {
    let client = CatalogueClient::from_args(&args.client)?;
    let phenotypes = client.list_phenotypes(&args.model_id).await?;

    if phenotypes.is_empty() {
        println!("No phenotypes registered for model {}.", args.model_id);
    } else {
        println!("Phenotypes predicted by {}:", args.model_id);
        for phenotype in &phenotypes {
            println!("- {}", phenotype);
        }
    }

    Ok(())
}

pub async fn run_register(args: RegisterArgs) -> anyhow::Result<()> {
    let payload = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let request: RegisterModelApiRequest = serde_json::from_str(&payload)
        .with_context(|| format!("invalid model entry in {}", args.file.display()))?;

    let client = CatalogueClient::from_args(&args.client)?;
    let entry = client.register_model(&request).await?;

    println!(
        "Registered model {} ({}, version {})",
        entry.id, entry.display_name, entry.version
    );
    Ok(())
}

pub async fn run_unregister(args: UnregisterArgs) -> anyhow::Result<()> {
    let client = CatalogueClient::from_args(&args.client)?;
    let entry = client.unregister_model(&args.model_id).await?;

    println!("Removed model {} ({})", entry.id, entry.display_name);
    Ok(())
}

pub async fn run_predict(args: PredictArgs) -> anyhow::Result<()> {
    let genotype_data = read_genotype_column(&args.csv, &args.column)?;
    let client = CatalogueClient::from_args(&args.client)?;
    let prediction = client.predict(&args.model_id, genotype_data).await?;

    println!(
        "Model {} scored {} genotype values: {:.4}",
        prediction.model_id, prediction.genotype_count, prediction.prediction_score
    );
    Ok(())
}
