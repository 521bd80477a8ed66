//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "diary")]
#[command(about = "Terminal daily diary with morning, afternoon and evening sections", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding users.json and the per-user diaries (default: ~/.diary)
    #[arg(long, value_name = "DIR", env = "DIARY_HOME")]
    pub data_dir: Option<PathBuf>,
}
