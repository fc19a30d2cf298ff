use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_USERNAME: &str = "shv-ng";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_STAR_API_BASE: &str = "https://api.github-star-counter.workers.dev";
pub const DEFAULT_OUTPUT: &str = "terminal.svg";
pub const MAX_BIO_LEN: usize = 45;
pub const MAX_LANG_LEN: usize = 35;
pub const PAGE_SIZE: u32 = 100;
pub const TIMEOUT_SECS: u64 = 30;

/// Languages that never count towards the most-used ranking.
pub const EXCLUDED_LANGUAGES: [&str; 3] = ["HTML", "Jupyter Notebook", "Brainfuck"];

/// Everything a run needs to know up front.
///
/// Endpoints are plain base URLs so tests can point them at a local server.
#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub api_base: String,
    pub star_api_base: String,
    pub output: PathBuf,
    pub timeout: Duration,
    pub repo_page_size: u32,
    pub commit_page_size: u32,
    pub max_bio_len: usize,
    pub max_lang_len: usize,
    pub excluded_languages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            star_api_base: DEFAULT_STAR_API_BASE.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            repo_page_size: PAGE_SIZE,
            commit_page_size: PAGE_SIZE,
            max_bio_len: MAX_BIO_LEN,
            max_lang_len: MAX_LANG_LEN,
            excluded_languages: EXCLUDED_LANGUAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn is_excluded_language(&self, language: &str) -> bool {
        self.excluded_languages.iter().any(|l| l == language)
    }
}

/// Render a terminal-style SVG card from a GitHub profile.
#[derive(Parser, Debug)]
#[command(name = "ttycard", version)]
pub struct Cli {
    /// GitHub login to render
    #[arg(long, env = "TTYCARD_USERNAME", default_value = DEFAULT_USERNAME)]
    pub username: String,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "TTYCARD_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Base URL of the star counter service
    #[arg(long, env = "TTYCARD_STAR_API_BASE", default_value = DEFAULT_STAR_API_BASE)]
    pub star_api_base: String,

    /// Where to write the SVG
    #[arg(short, long, env = "TTYCARD_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, env = "TTYCARD_TIMEOUT", default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            username: cli.username,
            api_base: cli.api_base.trim_end_matches('/').to_string(),
            star_api_base: cli.star_api_base.trim_end_matches('/').to_string(),
            output: cli.output,
            timeout: Duration::from_secs(cli.timeout),
            ..Config::default()
        }
    }
}
