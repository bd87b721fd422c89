//! Artifact-level `maven-metadata.xml`.

use crate::bundler::{Coordinates, Result, error::ErrorExt};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

static VERSION_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<version>\s*([^<\s]+)\s*</version>").expect("valid version regex")
});

static VERSIONS_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<versions>(.*?)</versions>").expect("valid versions regex"));

/// Versions listed in an existing metadata document.
pub fn read_versions(xml: &str) -> BTreeSet<String> {
    VERSIONS_BLOCK
        .captures(xml)
        .and_then(|caps| caps.get(1))
        .map(|block| {
            VERSION_TAG
                .captures_iter(block.as_str())
                .filter_map(|c| c.get(1).map(|m| unescape(m.as_str())))
                .collect()
        })
        .unwrap_or_default()
}

/// Adds `coords.version` to the metadata file at `path`, creating it if needed.
///
/// The deployed version becomes both `latest` and `release`.
pub fn record_version(path: &Path, coords: &Coordinates, now: DateTime<Utc>) -> Result<()> {
    let mut versions = match std::fs::read_to_string(path) {
        Ok(xml) => read_versions(&xml),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeSet::new(),
        Err(e) => return Err(e).fs_context("reading maven metadata", path),
    };
    versions.insert(coords.version.clone());

    let xml = render(coords, &versions, now);
    crate::bundler::utils::fs::write_file(path, xml)
}

fn render(coords: &Coordinates, versions: &BTreeSet<String>, now: DateTime<Utc>) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<metadata>\n");
    xml.push_str(&format!("  <groupId>{}</groupId>\n", escape(&coords.group_id)));
    xml.push_str(&format!(
        "  <artifactId>{}</artifactId>\n",
        escape(&coords.artifact_id)
    ));
    xml.push_str("  <versioning>\n");
    xml.push_str(&format!("    <latest>{}</latest>\n", escape(&coords.version)));
    xml.push_str(&format!("    <release>{}</release>\n", escape(&coords.version)));
    xml.push_str("    <versions>\n");
    for version in versions {
        xml.push_str(&format!("      <version>{}</version>\n", escape(version)));
    }
    xml.push_str("    </versions>\n");
    xml.push_str(&format!(
        "    <lastUpdated>{}</lastUpdated>\n",
        now.format("%Y%m%d%H%M%S")
    ));
    xml.push_str("  </versioning>\n");
    xml.push_str("</metadata>\n");
    xml
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn unescape(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
