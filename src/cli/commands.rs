//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Streaming client for Siren-style paginated translation APIs
#[derive(Parser, Debug)]
#[command(name = "sirenstream")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the API, e.g. https://api.example.com/api
    #[arg(short, long)]
    pub base_url: String,

    /// Bearer token for the Authorization header
    #[arg(short, long)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every community the credential can see
    Communities {
        /// Stop after this many items
        #[arg(long)]
        max_items: Option<u64>,
    },

    /// Fetch a single community
    Community {
        /// Community id
        id: String,
    },

    /// List the projects in a community
    Projects {
        /// Community to list projects for
        #[arg(long)]
        community_id: String,

        /// Stop after this many items
        #[arg(long)]
        max_items: Option<u64>,
    },

    /// List every document
    Documents {
        /// Stop after this many items
        #[arg(long)]
        max_items: Option<u64>,
    },

    /// Fetch a single document
    Document {
        /// Document id
        id: String,
    },

    /// Upload a file as a new document
    Upload {
        /// Document title
        #[arg(long)]
        title: String,

        /// File whose contents become the document body
        #[arg(short, long)]
        file: PathBuf,

        /// Source locale code, e.g. en-US
        #[arg(long)]
        locale_code: String,

        /// Project to attach the document to
        #[arg(long)]
        project_id: String,
    },

    /// Request a translation of a document into a target locale
    AddTranslation {
        /// Document id
        #[arg(long)]
        document_id: String,

        /// Target locale code, e.g. de-DE
        #[arg(long)]
        locale_code: String,
    },

    /// List the translations requested for a document
    Translations {
        /// Document id
        #[arg(long)]
        document_id: String,

        /// Stop after this many items
        #[arg(long)]
        max_items: Option<u64>,
    },

    /// Re-check the processing status of a document
    Status {
        /// Document id
        #[arg(long)]
        document_id: String,
    },

    /// Download translated document content to a file
    Download {
        /// Document id
        #[arg(long)]
        document_id: String,

        /// Target locale code
        #[arg(long)]
        locale_code: String,

        /// Destination path
        #[arg(short, long)]
        output: PathBuf,
    },
}
