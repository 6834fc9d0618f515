//! Server configuration
//!
//! CLI flags with environment fallbacks. The compilation database location
//! is a directory option so deployments can point the server at any build
//! tree; everything else has a sensible default.

use std::path::PathBuf;

use clap::Parser;

/// Name of the compilation database file inside the configured directory.
pub const COMPILE_DB_FILENAME: &str = "compile_commands.json";

#[derive(Debug, Parser)]
#[command(name = "review-web", about = "Browse a compilation database and request LLM code reviews")]
pub struct Cli {
    /// Directory containing compile_commands.json (defaults to the working directory)
    #[arg(long, value_name = "DIR")]
    pub compile_db_dir: Option<PathBuf>,

    /// Port to listen on
    #[arg(long, env = "SERVER_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory served for unmatched paths (static assets)
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,
}

impl Cli {
    /// Full path to the compilation database file.
    pub fn compile_db_path(&self) -> PathBuf {
        self.compile_db_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(COMPILE_DB_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path_is_cwd() {
        let cli = Cli::parse_from(["review-web"]);
        assert_eq!(cli.compile_db_path(), PathBuf::from("./compile_commands.json"));
        assert_eq!(cli.port, 3000);
    }

    #[test]
    fn test_db_dir_option() {
        let cli = Cli::parse_from(["review-web", "--compile-db-dir", "/build/out"]);
        assert_eq!(
            cli.compile_db_path(),
            PathBuf::from("/build/out/compile_commands.json")
        );
    }
}
