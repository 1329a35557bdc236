use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(version, about = "A cli for inspecting pod to workload endpoint conversion", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Subcommand, Debug)]
pub enum Commands {
    /// Convert Pod manifests into workload endpoint data
    Convert {
        /// Path to a (multi-document) Pod manifest
        #[arg(long, short)]
        file: PathBuf,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Print the workload key of each Pod in a manifest
    Key {
        /// Path to a (multi-document) Pod manifest
        #[arg(long, short)]
        file: PathBuf,
    },

    /// Apply the data converted from a Pod onto a WorkloadEndpoint manifest
    Merge {
        /// Path to the WorkloadEndpoint manifest
        #[arg(long)]
        endpoint: PathBuf,

        /// Path to the Pod manifest
        #[arg(long)]
        pod: PathBuf,
    },

    /// Print the WorkloadEndpoint CRD
    Crd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Yaml,
    Json,
}
