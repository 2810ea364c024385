//! CLI module for the phenotype prediction API
//!
//! Provides subcommands for running the server and for talking to a running
//! instance from the console:
//! - `serve`: run the HTTP API server
//! - `models`, `phenotypes`, `register`, `unregister`, `predict`: client calls

pub mod client;
pub mod serve;

use clap::{Parser, Subcommand};

/// BRAI Phenotype Prediction API - model catalogue and console client
#[derive(Parser)]
#[command(name = "brai-phenotype-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// List the registered models
    Models(client::ClientArgs),

    /// List the phenotypes a model can predict
    Phenotypes(client::PhenotypesArgs),

    /// Register a model entry described in a JSON file
    Register(client::RegisterArgs),

    /// Remove a model entry from the catalogue
    Unregister(client::UnregisterArgs),

    /// Request a phenotype prediction for genotype values read from a CSV column
    Predict(client::PredictArgs),
}
