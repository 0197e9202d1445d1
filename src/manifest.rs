//! Slack app manifest handling
//!
//! The manifest is a server-generated JSON document the user hands to
//! Slack when creating the app. This module knows where it lives on the
//! server, where the OAuth callback URL points (displayed to the user,
//! never requested by this client), and how to write the document to disk
//! as a downloadable file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use reqwest::Url;

pub const MANIFEST_PATH: &str = "/api/slack/manifest";
pub const OAUTH_CALLBACK_PATH: &str = "/api/slack/oauth/callback";

/// Filename used for the downloaded manifest
pub const MANIFEST_FILENAME: &str = "slack-app-manifest.json";

/// Full manifest URL for display / clipboard
pub fn manifest_url(base_url: &Url) -> String {
    join_display(base_url, MANIFEST_PATH)
}

/// Full OAuth callback URL for display / clipboard
pub fn oauth_callback_url(base_url: &Url) -> String {
    join_display(base_url, OAUTH_CALLBACK_PATH)
}

fn join_display(base_url: &Url, path: &str) -> String {
    base_url
        .join(path)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| format!("{}{}", base_url, path))
}

/// Write the manifest document pretty-printed into `dir`.
///
/// Returns the path of the written file.
pub fn save_manifest(manifest: &serde_json::Value, dir: &Path) -> io::Result<PathBuf> {
    let contents = serde_json::to_string_pretty(manifest).map_err(io::Error::other)?;
    let path = dir.join(MANIFEST_FILENAME);
    fs::write(&path, contents)?;
    Ok(path)
}

/// Where downloads land: configured dir, else the platform download
/// directory, else the working directory.
pub fn download_dir(configured: Option<&str>) -> PathBuf {
    match configured {
        Some(dir) => PathBuf::from(dir),
        None => dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
    }
}
