//! Advisory rules for the tool descriptor family.
//!
//! Tools are single-command descriptors with publishing metadata: a
//! hierarchical name, a command line, licensing, schemas, signatures.
//! Every rule here inspects one field or subtree, returns zero or more
//! warning strings, and runs regardless of what the other rules found.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::{missing_readme, str_field};

/// Common SPDX license identifiers accepted without comment.
///
/// Deliberately not exhaustive: an identifier outside this list draws a
/// "may be non-standard" warning but is never rejected.
pub const SPDX_LICENSES: &[&str] = &[
    "MIT",
    "Apache-2.0",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "ISC",
    "MPL-2.0",
    "GPL-2.0-only",
    "GPL-2.0-or-later",
    "GPL-3.0-only",
    "GPL-3.0-or-later",
    "LGPL-2.1-only",
    "LGPL-3.0-only",
    "AGPL-3.0-only",
    "AGPL-3.0-or-later",
    "Unlicense",
    "CC0-1.0",
    "Zlib",
    "BSL-1.0",
    "EPL-2.0",
];

/// Required fields of each entry in a `signatures` sequence.
const SIGNATURE_FIELDS: &[&str] = &["signer", "algorithm", "type", "value", "created"];

/// Run the tool rule pipeline in its fixed order.
///
/// `dir` is the directory containing the descriptor file. Only run on
/// documents that already passed schema validation.
pub fn tool_warnings(doc: &Value, dir: &Path) -> Vec<String> {
    let mut warnings = Vec::new();
    warnings.extend(name_convention(doc));
    warnings.extend(command_pinning(doc));
    warnings.extend(timeout_format(doc));
    warnings.extend(license_format(doc));
    warnings.extend(image_hygiene(doc));
    warnings.extend(schema_hints(doc));
    warnings.extend(signature_structure(doc));
    warnings.extend(author_structure(doc));
    warnings.extend(example_structure(doc));
    warnings.extend(env_documentation(doc));
    warnings.extend(missing_readme(dir));
    warnings
}

/// Rule 1 — hierarchical name convention.
///
/// Five independent checks over the `name` field; a badly malformed name
/// can fire several of them at once.
fn name_convention(doc: &Value) -> Vec<String> {
    let name = str_field(doc, "name").unwrap_or("");
    let mut warnings = Vec::new();

    if name.is_empty() {
        warnings.push("Tool name is empty".to_string());
    }
    if !name.contains('/') {
        warnings.push(format!(
            "Tool name '{name}' has no '/' separator; expected a hierarchical owner/category/name"
        ));
    }
    if name
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && c != '-' && c != '_' && c != '/')
    {
        warnings.push(format!(
            "Tool name '{name}' contains characters outside alphanumerics, '-', '_', and '/'"
        ));
    }
    if name.contains("//") {
        warnings.push(format!("Tool name '{name}' contains a doubled '/' separator"));
    }
    if name.starts_with('/') || name.ends_with('/') {
        warnings.push(format!("Tool name '{name}' must not start or end with '/'"));
    }

    warnings
}

/// One package-runner/installer idiom the pinning rule knows about.
struct RunnerIdiom {
    /// Human name used in the warning text.
    label: &'static str,
    /// Matches the invocation and captures the first package token.
    invocation: &'static LazyLock<Regex>,
    /// Substring that marks the captured token as version-pinned.
    version_marker: &'static str,
    /// Example of a pinned invocation for the warning text.
    example: &'static str,
}

static NPX_INVOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bnpx\s+(?:-y\s+)?(\S+)").expect("hard-coded pattern compiles"));
static UVX_INVOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\buvx\s+(\S+)").expect("hard-coded pattern compiles"));
static PIP_INSTALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bpip3?\s+install\s+(\S+)").expect("hard-coded pattern compiles")
});

/// The three invocation idioms checked for version pinning.
static RUNNER_IDIOMS: &[RunnerIdiom] = &[
    RunnerIdiom {
        label: "npx",
        invocation: &NPX_INVOCATION,
        version_marker: "@",
        example: "package@1.2.3",
    },
    RunnerIdiom {
        label: "uvx",
        invocation: &UVX_INVOCATION,
        version_marker: "@",
        example: "package@1.2.3",
    },
    RunnerIdiom {
        label: "pip install",
        invocation: &PIP_INSTALL,
        version_marker: "==",
        example: "package==1.2.3",
    },
];

/// Rule 2 — command version pinning.
///
/// Heuristic by design: a run-invocation followed by a bare identifier
/// with no version marker draws one warning per matched idiom. Version
/// spellings the markers do not cover will over-warn, and install idioms
/// outside the fixed list will under-warn; both are documented behavior.
fn command_pinning(doc: &Value) -> Vec<String> {
    let Some(command) = str_field(doc, "command") else {
        return Vec::new();
    };

    let mut warnings = Vec::new();
    for idiom in RUNNER_IDIOMS {
        if let Some(captures) = idiom.invocation.captures(command) {
            let token = &captures[1];
            if !token.contains(idiom.version_marker) {
                warnings.push(format!(
                    "Command uses '{}' without a pinned version ('{token}'); pin it (e.g. {})",
                    idiom.label, idiom.example
                ));
            }
        }
    }
    warnings
}

static DURATION_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]*[smh]$").expect("hard-coded pattern compiles"));

/// Rule 3 — timeout duration convention.
fn timeout_format(doc: &Value) -> Option<String> {
    let timeout = str_field(doc, "timeout")?;
    if DURATION_FORMAT.is_match(timeout) {
        None
    } else {
        Some(format!(
            "Timeout '{timeout}' should follow the duration format '<number><s|m|h>' (e.g. 30s, 5m, 1h)"
        ))
    }
}

/// Rule 4 — license presence and SPDX spelling.
fn license_format(doc: &Value) -> Option<String> {
    match str_field(doc, "license") {
        None => Some(
            "No license specified; consider adding an SPDX identifier (e.g. MIT, Apache-2.0)"
                .to_string(),
        ),
        Some(license) if !SPDX_LICENSES.contains(&license) => Some(format!(
            "License '{license}' is not a common SPDX identifier; it may be non-standard"
        )),
        Some(_) => None,
    }
}

/// Rule 5 — container base-image hygiene.
///
/// Three independent checks over the `from` field; an image reference can
/// draw all of them.
fn image_hygiene(doc: &Value) -> Vec<String> {
    let Some(image) = str_field(doc, "from") else {
        return Vec::new();
    };

    let mut warnings = Vec::new();
    if image.contains(":latest") {
        warnings.push(format!(
            "Image '{image}' uses the 'latest' tag; pin a specific version"
        ));
    }
    if !image.contains(':') {
        warnings.push(format!("Image '{image}' has no tag; pin a specific version"));
    }
    if image.contains("ubuntu") || image.contains("centos") {
        warnings.push(format!(
            "Image '{image}' is a full distribution; consider a minimal image (e.g. alpine, distroless)"
        ));
    }
    warnings
}

/// Rule 6 — schema hints and tags.
fn schema_hints(doc: &Value) -> Vec<String> {
    let mut warnings = Vec::new();
    if doc.get("inputSchema").is_none() {
        warnings.push("Missing 'inputSchema'; callers cannot discover input parameters".to_string());
    }
    if doc.get("outputSchema").is_none() {
        warnings.push("Missing 'outputSchema'; callers cannot discover output structure".to_string());
    }
    let tags_empty = match doc.get("tags") {
        None => true,
        Some(tags) => tags.as_array().is_some_and(|t| t.is_empty()),
    };
    if tags_empty {
        warnings.push("Missing or empty 'tags'; tags improve discoverability".to_string());
    }
    warnings
}

/// Rule 7 — signature block structure.
///
/// Checks sequence shape, per-entry mapping shape, the five required
/// fields, and that `created` parses as an RFC 3339 timestamp. A trailing
/// UTC `Z` is normalized to an explicit `+00:00` offset before parsing;
/// other timezone suffix conventions are out of scope and will warn.
fn signature_structure(doc: &Value) -> Vec<String> {
    let Some(signatures) = doc.get("signatures") else {
        return Vec::new();
    };
    let Some(entries) = signatures.as_array() else {
        return vec!["'signatures' should be a sequence".to_string()];
    };

    let mut warnings = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        let Some(signature) = entry.as_object() else {
            warnings.push(format!("signatures[{i}] should be a mapping"));
            continue;
        };
        for field in SIGNATURE_FIELDS {
            if !signature.contains_key(*field) {
                warnings.push(format!("signatures[{i}] is missing required field '{field}'"));
            }
        }
        if let Some(created) = signature.get("created") {
            if !created.as_str().is_some_and(created_parses) {
                warnings.push(format!(
                    "signatures[{i}] has an invalid 'created' timestamp {created}"
                ));
            }
        }
    }
    warnings
}

/// Parse a signature timestamp, normalizing a trailing `Z` to `+00:00`.
fn created_parses(created: &str) -> bool {
    let normalized = match created.strip_suffix('Z') {
        Some(prefix) => format!("{prefix}+00:00"),
        None => created.to_string(),
    };
    chrono::DateTime::parse_from_rfc3339(&normalized).is_ok()
}

/// Rule 8 — author block structure.
fn author_structure(doc: &Value) -> Vec<String> {
    let Some(authors) = doc.get("authors") else {
        return Vec::new();
    };
    let Some(entries) = authors.as_array() else {
        return vec!["'authors' should be a sequence".to_string()];
    };

    let mut warnings = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        match entry.as_object() {
            None => warnings.push(format!("authors[{i}] should be a mapping")),
            Some(author) if !author.contains_key("name") => {
                warnings.push(format!("authors[{i}] is missing a 'name' field"));
            }
            Some(_) => {}
        }
    }
    warnings
}

/// Rule 9 — example block structure.
fn example_structure(doc: &Value) -> Vec<String> {
    let Some(examples) = doc.get("examples") else {
        return Vec::new();
    };
    let Some(entries) = examples.as_array() else {
        return vec!["'examples' should be a sequence".to_string()];
    };

    let mut warnings = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        match entry.as_object() {
            None => warnings.push(format!("examples[{i}] should be a mapping")),
            Some(example) if !example.contains_key("input") => {
                warnings.push(format!("examples[{i}] is missing an 'input' field"));
            }
            Some(_) => {}
        }
    }
    warnings
}

/// Rule 10 — environment variable documentation.
///
/// Only entries whose value is itself a mapping are inspected; scalar
/// entries are skipped without warning.
fn env_documentation(doc: &Value) -> Vec<String> {
    let Some(env) = doc.get("env").and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut warnings = Vec::new();
    for (key, value) in env {
        let Some(entry) = value.as_object() else {
            continue;
        };
        if !entry.contains_key("description") {
            warnings.push(format!("Environment variable '{key}' has no 'description'"));
        }
        if !entry.contains_key("required") {
            warnings.push(format!("Environment variable '{key}' has no 'required' field"));
        }
    }
    warnings
}
