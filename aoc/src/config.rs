use std::{
    env,
    path::{Path, PathBuf},
};

pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";
pub const DEFAULT_INPUT_DIR: &str = "inputs";

/// Where inputs come from and where they are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Value of the `session` cookie, needed only when an input has to be fetched.
    pub session: Option<String>,
    pub input_dir: PathBuf,
    pub base_url: String,
}

impl Config {
    /// Reads `SESSION`, `AOC_INPUT_DIR` and `AOC_BASE_URL` from the process
    /// environment, which [`load_dotenv`] may have filled in.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            session: non_empty("SESSION").map(|s| s.trim().to_string()),
            input_dir: non_empty("AOC_INPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR)),
            base_url: non_empty("AOC_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

/// Loads a `.env` file into the process environment, if there is one.
/// Variables that are already set win.
pub fn load_dotenv() -> Result<PathBuf, dotenvy::Error> {
    dotenvy::dotenv()
}

pub fn load_dotenv_from(path: &Path) -> Result<(), dotenvy::Error> {
    dotenvy::from_path(path)
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::default();

        assert_eq!(config.session, None);
        assert_eq!(config.input_dir, PathBuf::from("inputs"));
        assert_eq!(config.base_url, "https://adventofcode.com");
    }

    #[test]
    fn reads_overrides_and_ignores_blank_values() {
        let vars = HashMap::from([
            ("SESSION", " abc123 \n"),
            ("AOC_INPUT_DIR", "/tmp/aoc"),
            ("AOC_BASE_URL", "   "),
        ]);

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.session.as_deref(), Some("abc123"));
        assert_eq!(config.input_dir, PathBuf::from("/tmp/aoc"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn dotenv_fills_in_unset_variables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "AOC_BASE_URL=http://localhost:8080\nAOC_INPUT_DIR=from-dotenv\n",
        )
        .unwrap();

        env::set_var("AOC_INPUT_DIR", "from-process");
        load_dotenv_from(&path).unwrap();
        let config = Config::from_env();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.input_dir, PathBuf::from("from-process"));
    }
}
