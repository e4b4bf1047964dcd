use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "voterroll",
    version,
    about = "Convert Marathi electoral roll text and PDFs into import-ready CSV"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Convert(ConvertArgs),
    Info(InfoArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    #[arg(long, default_value = "-")]
    pub input: PathBuf,

    #[arg(long, value_enum, default_value_t = DialectArg::Auto)]
    pub dialect: DialectArg,

    #[arg(long)]
    pub from_page: Option<String>,

    #[arg(long)]
    pub to_page: Option<String>,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub report: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = 3)]
    pub sample_size: usize,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum DialectArg {
    Auto,
    Pasted,
    Document,
}

impl DialectArg {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Pasted => "pasted",
            Self::Document => "document",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}
