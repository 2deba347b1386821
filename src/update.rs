//! Release checks against the GitHub "latest release" endpoint.
//!
//! Only reports; replacing the installed binary is left to the installer.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::UpdateError;

/// Version compiled into this binary.
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const RELEASES_URL: &str = "https://api.github.com/repos/MohamedElashri/txm/releases/latest";
const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// A published release as returned by the GitHub releases API.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// One downloadable file attached to a [`Release`].
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

impl Release {
    /// Download URL of the asset called `name`, if published.
    pub fn asset_url(&self, name: &str) -> Option<&str> {
        self.assets
            .iter()
            .find(|asset| asset.name == name)
            .map(|asset| asset.browser_download_url.as_str())
    }
}

/// Result of comparing this build against the latest release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCheck {
    pub current: String,
    pub latest: String,
    pub newer_available: bool,
    /// Platform asset URL, when the release carries one for this OS.
    pub asset_url: Option<String>,
}

fn parse_version(raw: &str) -> Result<[u64; 3], UpdateError> {
    let trimmed = raw.trim();
    let bare = trimmed.strip_prefix('v').unwrap_or(trimmed);
    let parts: Vec<&str> = bare.split('.').collect();
    if parts.len() != 3 {
        return Err(UpdateError::Version(raw.to_string()));
    }
    let mut out = [0u64; 3];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|_| UpdateError::Version(raw.to_string()))?;
    }
    Ok(out)
}

/// True when `latest` is strictly newer than `current` (`major.minor.patch`,
/// optional leading `v`).
pub fn compare_versions(current: &str, latest: &str) -> Result<bool, UpdateError> {
    Ok(parse_version(latest)? > parse_version(current)?)
}

/// Release asset name for an OS identifier such as `std::env::consts::OS`.
pub fn asset_name_for_os(os: &str) -> String {
    let mut chars = os.chars();
    let titled: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("txm-{titled}.zip")
}

/// Compare `current` against a fetched release for the given OS.
pub fn evaluate_release(
    current: &str,
    release: &Release,
    os: &str,
) -> Result<UpdateCheck, UpdateError> {
    let newer_available = compare_versions(current, &release.tag_name)?;
    Ok(UpdateCheck {
        current: current.to_string(),
        latest: release.tag_name.clone(),
        newer_available,
        asset_url: release
            .asset_url(&asset_name_for_os(os))
            .map(str::to_string),
    })
}

/// Fetch the latest release from `url`.
pub async fn fetch_latest_release_with_client(
    client: &reqwest::Client,
    url: &str,
) -> Result<Release, UpdateError> {
    debug!(url, "querying latest release");
    let response = client
        .get(url)
        .header("Accept", "application/vnd.github+json")
        .send()
        .await?;
    if !response.status().is_success() {
        let code = response.status().as_u16();
        return Err(UpdateError::Install(format!(
            "release query failed with HTTP {code}"
        )));
    }
    Ok(response.json::<Release>().await?)
}

/// Check the published latest release against this build.
pub async fn check_for_updates() -> Result<UpdateCheck, UpdateError> {
    let client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(format!("txm/{CURRENT_VERSION}"))
        .build()?;
    let release = fetch_latest_release_with_client(&client, RELEASES_URL).await?;
    evaluate_release(CURRENT_VERSION, &release, std::env::consts::OS)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RELEASE_JSON: &str = r#"{
        "tag_name": "v0.4.1",
        "name": "txm 0.4.1",
        "assets": [
            {"name": "txm-Linux.zip", "browser_download_url": "https://example.invalid/txm-Linux.zip"},
            {"name": "txm-Darwin.zip", "browser_download_url": "https://example.invalid/txm-Darwin.zip"}
        ]
    }"#;

    #[test]
    fn newer_patch_minor_and_major_are_detected() {
        assert!(compare_versions("0.3.0", "0.3.1").unwrap());
        assert!(compare_versions("0.3.9", "v0.4.0").unwrap());
        assert!(compare_versions("v1.9.9", "2.0.0").unwrap());
    }

    #[test]
    fn equal_or_older_is_not_an_update() {
        assert!(!compare_versions("0.3.0", "v0.3.0").unwrap());
        assert!(!compare_versions("0.10.0", "0.9.9").unwrap());
    }

    #[test]
    fn malformed_versions_are_rejected() {
        assert!(matches!(
            compare_versions("0.3", "0.3.1"),
            Err(UpdateError::Version(v)) if v == "0.3"
        ));
        assert!(compare_versions("0.3.0", "v0.3.x").is_err());
    }

    #[test]
    fn asset_name_title_cases_os() {
        assert_eq!(asset_name_for_os("linux"), "txm-Linux.zip");
        assert_eq!(asset_name_for_os("macos"), "txm-Macos.zip");
    }

    #[test]
    fn release_json_evaluates_with_platform_asset() {
        let release: Release = serde_json::from_str(RELEASE_JSON).unwrap();
        let check = evaluate_release("0.3.0", &release, "linux").unwrap();
        assert!(check.newer_available);
        assert_eq!(check.latest, "v0.4.1");
        assert_eq!(
            check.asset_url.as_deref(),
            Some("https://example.invalid/txm-Linux.zip")
        );
        let none = evaluate_release("0.3.0", &release, "windows").unwrap();
        assert_eq!(none.asset_url, None);
    }

    #[test]
    fn current_version_parses() {
        assert!(parse_version(CURRENT_VERSION).is_ok());
    }
}
