use regex::Regex;
use semver::Version;
use std::error::Error;
use std::path::Path;

// Matches "## v1.2.3" or "## [v1.2.3]", with anything after the version
const VERSION_HEADER_PATTERN: &str = r"(?m)^##\s+\[?(v\d+\.\d+\.\d+)\]?.*$";

#[derive(Debug, Clone, PartialEq)]
pub struct ChangelogEntry {
    pub tag: String,
    pub version: Version,
    pub notes: String,
}

pub fn load_changelog(path: &Path) -> Result<String, Box<dyn Error>> {
    if !path.exists() {
        return Err(format!("Changelog {:?} not found", path).into());
    }

    std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read changelog {:?}: {}", path, e).into())
}

pub fn parse_changelog(content: &str) -> Result<ChangelogEntry, Box<dyn Error>> {
    let header = Regex::new(VERSION_HEADER_PATTERN)?;

    let captures = header
        .captures(content)
        .ok_or("Could not find a version header in the changelog")?;

    let tag = captures[1].to_string();
    let version = Version::parse(tag.trim_start_matches('v'))
        .map_err(|e| format!("Invalid version in header {}: {}", tag, e))?;

    // Notes run from the end of the matched header line to the next header,
    // or to the end of the document
    let notes_start = captures.get(0).map(|m| m.end()).unwrap_or(content.len());
    let notes = match header.find_at(content, notes_start) {
        Some(next) => &content[notes_start..next.start()],
        None => &content[notes_start..],
    };

    Ok(ChangelogEntry {
        tag,
        version,
        notes: notes.trim().to_string(),
    })
}
