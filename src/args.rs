use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    Dong,
    Name,
    AvgPrice,
    PyeongPrice,
    Transactions,
}

/// Filter apartment-complex datasets and verify expected match counts.
#[derive(Parser, Debug)]
#[command(name = "apt_filter", version)]
pub struct Args {
    /// GeoJSON dataset of apartment complexes
    #[arg(long, value_name = "FILE")]
    pub data: PathBuf,

    /// Run a scenario file instead of listing matches
    #[arg(long, value_name = "FILE")]
    pub verify: Option<PathBuf>,

    /// Keep only complexes in this district (repeatable)
    #[arg(long, value_name = "DONG")]
    pub dong: Vec<String>,

    /// Substring to search for in complex names (case-sensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// Lowest average price to keep (ten-thousand KRW)
    #[arg(long)]
    pub min_avg_price: Option<f64>,

    /// Highest average price to keep (ten-thousand KRW)
    #[arg(long)]
    pub max_avg_price: Option<f64>,

    /// Lowest pyeong price to keep (ten-thousand KRW per pyeong)
    #[arg(long)]
    pub min_pyeong_price: Option<f64>,

    /// Highest pyeong price to keep (ten-thousand KRW per pyeong)
    #[arg(long)]
    pub max_pyeong_price: Option<f64>,

    /// Lowest transaction count to keep
    #[arg(long)]
    pub min_transactions: Option<u32>,

    /// Highest transaction count to keep
    #[arg(long)]
    pub max_transactions: Option<u32>,

    /// Keep only complexes with at least one recorded transaction
    #[arg(long)]
    pub only_with_transactions: bool,

    /// Output format for listings
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Sort key for listings (dataset order when omitted)
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Show only the first N matches
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Print only the match count
    #[arg(long)]
    pub count_only: bool,

    /// Append per-district match counts
    #[arg(long)]
    pub by_dong: bool,

    /// Verbose logging on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
