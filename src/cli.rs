use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::eol_analysis::services::SortField;

/// Package end-of-life and vulnerability report
#[derive(Parser, Debug)]
#[command(name = "eol-report")]
#[command(version)]
#[command(
    about = "Browse package end-of-life status and vulnerabilities by ecosystem",
    long_about = None
)]
pub struct Args {
    /// Dataset location: a JSON file path or an http(s) URL [default: data.json]
    #[arg(short, long, global = true, value_name = "PATH|URL")]
    pub data: Option<String>,

    /// Output format: json or markdown [default: markdown]
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to ./eol-report.config.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Summary of every ecosystem in the dataset
    Ecosystems,

    /// Package list of one ecosystem
    Packages {
        /// Ecosystem key (e.g. npm)
        ecosystem: String,

        /// Only list packages whose name contains this text (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Click a sort column: name, vulnerabilities or status.
        /// Repeat to click again: --sort vulnerabilities --sort vulnerabilities
        #[arg(long = "sort", value_name = "FIELD")]
        sort: Vec<SortField>,
    },

    /// Version and vulnerability detail of one package
    Package {
        /// Ecosystem key (e.g. npm)
        ecosystem: String,
        /// Package name
        package: String,
    },

    /// Request HeroDevs extended support for a package
    RequestSupport {
        /// Ecosystem key (e.g. npm)
        ecosystem: String,
        /// Package name
        package: String,

        /// Your name (required)
        #[arg(long, default_value = "")]
        name: String,

        /// Company name (required)
        #[arg(long = "company", default_value = "")]
        company_name: String,

        /// Phone number (required)
        #[arg(long = "phone", default_value = "")]
        phone_number: String,

        /// Additional details
        #[arg(long, default_value = "")]
        details: String,

        /// Append the request to this JSON-lines file instead of printing it
        #[arg(long, value_name = "FILE")]
        log: Option<PathBuf>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
