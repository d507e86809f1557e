//! Release update checking.
//!
//! The one asynchronous operation in the core: a single GET against the
//! GitHub releases API. Every failure mode — transport error, non-success
//! status, missing field, unparsable tag, cancellation — collapses to
//! `None`; the shell shows "no update info" rather than an error.

use serde::Deserialize;
use tokio_util::sync::CancellationToken;

const RELEASES_API_BASE: &str = "https://api.github.com";

// GitHub rejects requests without a user-agent.
const USER_AGENT: &str = "picrename/0.1";

/// A strict `major.minor.patch` version.
///
/// Field order gives the derived `Ord` the lexicographic
/// (major, minor, patch) comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Creates a version from its three components.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parses a release tag of the form `v1.2.3` or `1.2.3`.
    ///
    /// Exactly three dot-separated decimal components are required;
    /// anything else — missing components, pre-release suffixes, sign
    /// characters, non-digits — fails.
    pub fn parse_tag(tag: &str) -> Option<Self> {
        let trimmed = tag.trim();
        let rest = trimmed.strip_prefix('v').unwrap_or(trimmed);

        let mut parts = rest.split('.');
        let major = parse_component(parts.next()?)?;
        let minor = parse_component(parts.next()?)?;
        let patch = parse_component(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }

        Some(Self::new(major, minor, patch))
    }

    /// Strict greater-than comparison against `current`.
    pub fn is_newer_than(&self, current: &Version) -> bool {
        self > current
    }
}

fn parse_component(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Description of the newest published release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    /// The parsed release version.
    pub version: Version,
    /// The release tag as published, e.g. `v1.2.3`.
    pub tag_name: String,
    /// Link to the release page; empty when the response omitted it.
    pub html_url: String,
}

#[derive(Debug, Deserialize)]
struct LatestReleasePayload {
    tag_name: String,
    #[serde(default)]
    html_url: Option<String>,
}

/// Fetches the latest release descriptor for `repository` (`owner/name`).
///
/// Issues one request to the fixed releases endpoint. Returns `None` for a
/// blank repository identifier, any non-success response, a missing or
/// unparsable tag, or when `cancel` fires — an in-flight check can be
/// abandoned on shutdown without blocking it.
pub async fn fetch_latest_release(
    repository: &str,
    cancel: &CancellationToken,
) -> Option<ReleaseInfo> {
    if repository.trim().is_empty() || cancel.is_cancelled() {
        return None;
    }

    let url = format!("{RELEASES_API_BASE}/repos/{repository}/releases/latest");

    tokio::select! {
        _ = cancel.cancelled() => {
            tracing::debug!("release check cancelled");
            None
        }
        release = request_latest(&url) => release,
    }
}

async fn request_latest(url: &str) -> Option<ReleaseInfo> {
    let client = match reqwest::Client::builder().user_agent(USER_AGENT).build() {
        Ok(client) => client,
        Err(e) => {
            tracing::debug!("release check unavailable: {e}");
            return None;
        }
    };

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("release check failed: {e}");
            return None;
        }
    };
    if !response.status().is_success() {
        tracing::debug!("release check returned {}", response.status());
        return None;
    }

    let payload: LatestReleasePayload = match response.json().await {
        Ok(payload) => payload,
        Err(e) => {
            tracing::debug!("release payload unreadable: {e}");
            return None;
        }
    };

    let version = Version::parse_tag(&payload.tag_name)?;
    Some(ReleaseInfo {
        version,
        tag_name: payload.tag_name,
        html_url: payload.html_url.unwrap_or_default(),
    })
}
