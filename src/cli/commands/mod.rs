//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod config_cmd;
mod documents;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "legalmind")]
#[command(about = "AI-assisted legal document analysis")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind: PORT, HOST, or HOST:PORT (default from config)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Analyze a legal document for risks, key points and improvements
    Analyze {
        /// Document to analyze
        file: PathBuf,
        /// Report language label
        #[arg(short, long, default_value = "english")]
        language: String,
    },

    /// Summarize a document or a piece of text
    Summarize {
        /// Document to summarize
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Text to summarize
        #[arg(short, long)]
        text: Option<String>,
        /// Summary length: short, medium or long
        #[arg(short, long, default_value = "medium")]
        length: String,
    },

    /// Ask the legal assistant a question
    Chat {
        /// Question to ask
        message: String,
        /// Conversation context label
        #[arg(long, default_value = crate::services::chat::DEFAULT_CONTEXT)]
        context: String,
    },

    /// Convert text to speech and save the audio
    Speak {
        /// Text to speak
        text: String,
        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,
        /// Voice preference
        #[arg(long, default_value = "female")]
        voice: String,
        /// Speed preference
        #[arg(long, default_value = "normal")]
        speed: String,
    },

    /// Compare two legal documents
    Compare {
        /// First document
        file1: PathBuf,
        /// Second document
        file2: PathBuf,
    },

    /// List available legal templates
    Templates,

    /// Show the effective configuration (credential redacted)
    Config,
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            serve::cmd_serve(&config, &bind).await
        }
        Commands::Analyze { file, language } => {
            documents::cmd_analyze(&config, &file, &language).await
        }
        Commands::Summarize { file, text, length } => {
            documents::cmd_summarize(&config, file.as_deref(), text, &length).await
        }
        Commands::Chat { message, context } => {
            documents::cmd_chat(&config, &message, &context).await
        }
        Commands::Speak {
            text,
            output,
            voice,
            speed,
        } => documents::cmd_speak(&config, &text, &output, voice, speed).await,
        Commands::Compare { file1, file2 } => {
            documents::cmd_compare(&config, &file1, &file2).await
        }
        Commands::Templates => documents::cmd_templates(),
        Commands::Config => config_cmd::cmd_config_show(&config),
    }
}
