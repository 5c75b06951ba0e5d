use super::app_config::LogLevel;
use crate::domain::DepartmentId;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "poppins",
    version,
    about = "A service desk terminal client",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Show the key-hint footer bar.
    #[arg(long)]
    pub show_footer: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Skip sign-in and open this department's dashboard directly
    /// (dit, creative, hco, legal, crm).
    #[arg(short, long, value_name = "DEPARTMENT")]
    pub department: Option<DepartmentId>,
}
