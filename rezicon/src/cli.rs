use std::path::PathBuf;

use clap::{ArgEnum, Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(
    name = "rezicon",
    version,
    about = "Quantizes an icon family against the classic system palettes and emits Rez data resources"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a Rez document from the six family images
    Build(BuildArgs),
    /// List the resources in a raw resource fork
    List {
        /// Raw resource-fork file (e.g. an emulator .rsrc sidecar)
        fork: PathBuf,
    },
    /// Extract one resource payload from a raw resource fork
    Extract {
        /// Raw resource-fork file
        fork: PathBuf,
        /// Four-character resource type, e.g. icl8
        os_type: String,
        /// Resource ID
        id: i16,
        /// Output file for the raw payload
        out: PathBuf,
    },
}

#[derive(Args)]
pub struct BuildArgs {
    /// Six image paths in role order: ICN# icl4 icl8 ics# ics4 ics8
    #[clap(value_name = "IMAGE", conflicts_with = "manifest")]
    pub images: Vec<PathBuf>,

    /// TOML manifest naming each role's image path instead of positionals
    #[clap(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Output path for the Rez document
    #[clap(short, long, value_name = "FILE")]
    pub out: PathBuf,

    /// Resource ID shared by every emitted block
    #[clap(long, default_value = "128")]
    pub id: i16,

    /// Optional resource name attached to every block
    #[clap(long)]
    pub name: Option<String>,

    /// Color distance metric
    #[clap(long, arg_enum, default_value = "euclidean")]
    pub metric: MetricArg,

    /// Alpha level below which a pixel counts as transparent
    #[clap(long, default_value = "128", conflicts_with = "chroma_key")]
    pub alpha_threshold: u8,

    /// Treat this exact RRGGBB color as transparent instead of using alpha
    #[clap(long, value_name = "RRGGBB")]
    pub chroma_key: Option<String>,
}

#[derive(ArgEnum, Debug, Clone, Copy)]
pub enum MetricArg {
    Euclidean,
    Weighted,
}

impl From<MetricArg> for lib_icn::DistanceMetric {
    fn from(metric: MetricArg) -> Self {
        match metric {
            MetricArg::Euclidean => lib_icn::DistanceMetric::Euclidean,
            MetricArg::Weighted => lib_icn::DistanceMetric::WeightedRgb,
        }
    }
}
