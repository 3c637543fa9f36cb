use std::{
    fs,
    path::{Path, PathBuf},
};

use reqwest::{blocking::Client, header};
use tracing::{debug, info};

use crate::{Config, Error, Result};

/// `<input_dir>/<year>/dayNN.txt`
pub fn cache_path(config: &Config, year: u16, day: u8) -> PathBuf {
    config
        .input_dir
        .join(year.to_string())
        .join(format!("day{day:02}.txt"))
}

/// Cached input if present, otherwise fetched and written to the cache.
pub fn load(config: &Config, year: u16, day: u8) -> Result<String> {
    let path = cache_path(config, year, day);

    if path.exists() {
        debug!(path = %path.display(), "using cached input");
        return Ok(fs::read_to_string(&path)?);
    }

    let input = fetch(config, year, day)?;
    store(&path, &input)?;
    info!(path = %path.display(), "cached puzzle input");

    Ok(input)
}

pub fn fetch(config: &Config, year: u16, day: u8) -> Result<String> {
    let session = config
        .session
        .as_deref()
        .ok_or(Error::MissingSession { year, day })?;

    let url = format!(
        "{}/{year}/day/{day}/input",
        config.base_url.trim_end_matches('/')
    );
    info!(%url, "fetching puzzle input");

    let response = Client::new()
        .get(&url)
        .header(header::COOKIE, format!("session={session}"))
        .send()?;

    let status = response.status();
    let body = response.text()?;

    if !status.is_success() {
        return Err(Error::Http {
            status: status.as_u16(),
            body: body.trim().to_string(),
        });
    }

    Ok(body)
}

fn store(path: &Path, input: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, input)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_pads_the_day() {
        let config = Config {
            input_dir: PathBuf::from("cache"),
            ..Config::default()
        };

        assert_eq!(
            cache_path(&config, 2021, 7),
            PathBuf::from("cache/2021/day07.txt")
        );
        assert_eq!(
            cache_path(&config, 2021, 24),
            PathBuf::from("cache/2021/day24.txt")
        );
    }

    #[test]
    fn fetch_without_session() {
        let err = fetch(&Config::default(), 2021, 3).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingSession {
                year: 2021,
                day: 3
            }
        ));
    }
}
