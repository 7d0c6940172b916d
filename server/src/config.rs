use anyhow::{Result, anyhow};
use secrecy::SecretString;
use std::env;
use url::Url;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the shop backend, e.g. `http://localhost:5000/api/v1/`.
    pub backend_url: Url,
    /// Optional bearer token for the backend.
    pub backend_token: Option<SecretString>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let backend_url = parse_base_url(&env_var("DUKANI_BACKEND_URL")?)?;
        let backend_token = env::var("DUKANI_BACKEND_TOKEN").ok().map(Into::into);

        Ok(Self {
            backend_url,
            backend_token,
        })
    }
}

fn env_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| anyhow!("missing environment variable: {}", name))
}

/// `Url::join` treats a base without a trailing slash as a file, dropping
/// its last path segment, so normalize here rather than at every call site.
fn parse_base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim_end_matches('/');
    Ok(Url::parse(&format!("{raw}/"))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_always_ends_with_slash() {
        for raw in [
            "http://localhost:5000/api/v1",
            "http://localhost:5000/api/v1/",
        ] {
            let url = parse_base_url(raw).unwrap();
            assert_eq!(url.as_str(), "http://localhost:5000/api/v1/");
            // Relative joins must extend the path, not replace it.
            let joined = url.join("users").unwrap();
            assert_eq!(joined.as_str(), "http://localhost:5000/api/v1/users");
        }
    }

    #[test]
    fn rejects_garbage_urls() {
        assert!(parse_base_url("not a url").is_err());
    }
}
