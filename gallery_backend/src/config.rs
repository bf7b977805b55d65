use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use url::Url;

pub const DEFAULT_BIND: &str = "0.0.0.0:3030";
pub const DEFAULT_CDN_DIR: &str = "cdn";
pub const DEFAULT_ORIGIN: &str = "http://localhost:3030";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub cdn_dir: PathBuf,
    pub origin: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup("GALLERY_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid GALLERY_BIND address '{}'", bind))?;

        let cdn_dir = lookup("GALLERY_CDN_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CDN_DIR));

        let origin = lookup("GALLERY_ORIGIN").unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        let origin = parse_origin(&origin)?;

        Ok(ServerConfig { bind, cdn_dir, origin })
    }
}

/// Normalises a CORS origin to `scheme://host[:port]`. warp panics on
/// origins it cannot parse, so anything else is rejected here.
fn parse_origin(raw: &str) -> Result<String> {
    let url = Url::parse(raw).with_context(|| format!("Invalid GALLERY_ORIGIN '{}'", raw))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!("Invalid GALLERY_ORIGIN '{}': expected an http(s) origin", raw);
    }
    if url.host_str().is_none() {
        bail!("Invalid GALLERY_ORIGIN '{}': missing host", raw);
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        bail!("Invalid GALLERY_ORIGIN '{}': an origin has no path or query", raw);
    }

    Ok(url.origin().ascii_serialization())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).expect("defaults");

        assert_eq!(config.bind, "0.0.0.0:3030".parse().unwrap());
        assert_eq!(config.cdn_dir, PathBuf::from("cdn"));
        assert_eq!(config.origin, "http://localhost:3030");
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("GALLERY_BIND", "127.0.0.1:8080"),
            ("GALLERY_CDN_DIR", "/srv/gallery"),
            ("GALLERY_ORIGIN", "https://gallery.example.com"),
        ]))
        .expect("overrides");

        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.cdn_dir, PathBuf::from("/srv/gallery"));
        assert_eq!(config.origin, "https://gallery.example.com");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(ServerConfig::from_lookup(lookup(&[("GALLERY_BIND", "localhost")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("GALLERY_ORIGIN", "gallery.example.com")])).is_err());
    }

    #[test]
    fn rejects_origins_warp_cannot_use() {
        for origin in [
            "http://bad host",
            "http://",
            "ftp://gallery.example.com",
            "https://gallery.example.com/app",
            "https://gallery.example.com?x=1",
        ] {
            assert!(
                ServerConfig::from_lookup(lookup(&[("GALLERY_ORIGIN", origin)])).is_err(),
                "accepted {}",
                origin
            );
        }
    }

    #[test]
    fn origin_is_normalised() {
        let config = ServerConfig::from_lookup(lookup(&[("GALLERY_ORIGIN", "HTTPS://Gallery.Example.com:443/")]))
            .expect("origin");

        assert_eq!(config.origin, "https://gallery.example.com");
    }

    #[test]
    fn accepted_origin_builds_cors_filter() {
        let config = ServerConfig::from_lookup(lookup(&[("GALLERY_ORIGIN", "http://127.0.0.1:8080")]))
            .expect("origin");

        // would panic on an origin warp cannot parse
        let _cors = warp::cors().allow_origin(config.origin.as_str());
        assert_eq!(config.origin, "http://127.0.0.1:8080");
    }
}
