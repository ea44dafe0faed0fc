use clap::Parser;
use std::path::PathBuf;

/// Default location of the results database written by the arena runner
pub const DEFAULT_DB_PATH: &str = "results/llm_litellm_groq_llama3_8b_8192.db";

#[derive(Parser, Debug, Clone)]
#[command(name = "arena-traces")]
#[command(about = "Render recorded agent reasoning traces as a console report")]
#[command(version)]
pub struct CliArgs {
    /// Path to the SQLite results database
    #[arg(value_name = "DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Maximum width for wrapped reasoning text
    #[arg(long, value_name = "COLS", default_value = "60")]
    pub wrap_width: usize,

    /// Output traces and summary as JSON to stdout instead of the text report
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.wrap_width == 0 {
            return Err("--wrap-width must be at least 1".to_string());
        }

        if !self.db.is_file() {
            return Err(format!(
                "Results database not found: {}. \
                 Pass the path to a results .db file, or run from the arena directory",
                self.db.display()
            ));
        }

        Ok(())
    }
}
