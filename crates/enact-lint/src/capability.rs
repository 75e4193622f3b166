//! Advisory rules for the capability descriptor family.
//!
//! Capabilities are workflow-style documents whose `run` field holds
//! either a script body or an ordered sequence of steps. The rules here
//! check the shape conventions the schema cannot express.

use std::path::Path;

use serde_json::Value;

use crate::{missing_readme, str_field};

/// Run the capability rule pipeline in its fixed order.
///
/// `dir` is the directory containing the descriptor file. Only run on
/// documents that already passed schema validation.
pub fn capability_warnings(doc: &Value, dir: &Path) -> Vec<String> {
    let mut warnings = Vec::new();
    warnings.extend(missing_readme(dir));
    warnings.extend(workflow_step_shape(doc));
    warnings.extend(run_presence(doc));
    warnings.extend(language_entrypoint(doc));
    warnings
}

/// Workflow capabilities should carry `run` as a sequence of steps, not a
/// scalar script body. An absent `run` also fails this shape check; the
/// separate presence rule fires alongside it.
fn workflow_step_shape(doc: &Value) -> Option<String> {
    if str_field(doc, "type") != Some("workflow") {
        return None;
    }
    if doc.get("run").is_some_and(Value::is_array) {
        return None;
    }
    Some("Workflow capabilities should have 'run' as an array of steps".to_string())
}

/// Every capability needs a `run` field, whatever its type.
fn run_presence(doc: &Value) -> Option<String> {
    if doc.get("run").is_none() {
        Some("Missing 'run' field in capability".to_string())
    } else {
        None
    }
}

/// Python and JavaScript capabilities with an inline script body should
/// declare a `main` entrypoint. Substring heuristics, intentionally: a
/// false positive here costs one advisory line, not a rejection.
fn language_entrypoint(doc: &Value) -> Option<String> {
    let run = str_field(doc, "run")?;
    match str_field(doc, "type") {
        Some("python") if !run.contains("def main") => {
            Some("Python capabilities should define a 'main' function".to_string())
        }
        Some("javascript")
            if !run.contains("function main") && !run.contains("const main =") =>
        {
            Some("JavaScript capabilities should define a 'main' function".to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn no_readme_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn clean_capability_yields_no_warnings() {
        let dir = no_readme_dir();
        std::fs::write(dir.path().join("README.md"), "# cap").unwrap();
        let doc = json!({
            "type": "python",
            "run": "def main():\n    return 42\n"
        });
        assert!(capability_warnings(&doc, dir.path()).is_empty());
    }

    #[test]
    fn workflow_with_scalar_run_warns() {
        let doc = json!({ "type": "workflow", "run": "single-step" });
        let warning = workflow_step_shape(&doc).unwrap();
        assert!(warning.contains("array of steps"));
    }

    #[test]
    fn workflow_with_step_sequence_is_clean() {
        let doc = json!({ "type": "workflow", "run": ["step-one", "step-two"] });
        assert!(workflow_step_shape(&doc).is_none());
    }

    #[test]
    fn workflow_with_absent_run_fires_shape_and_presence() {
        let dir = no_readme_dir();
        let doc = json!({ "type": "workflow" });
        let warnings = capability_warnings(&doc, dir.path());
        assert!(warnings.iter().any(|w| w.contains("array of steps")));
        assert!(warnings.iter().any(|w| w.contains("Missing 'run'")));
    }

    #[test]
    fn run_presence_is_type_independent() {
        assert!(run_presence(&json!({ "type": "shell" })).is_some());
        assert!(run_presence(&json!({ "run": "echo hi" })).is_none());
    }

    #[test]
    fn python_without_def_main_warns() {
        let doc = json!({ "type": "python", "run": "print('hello')" });
        let warning = language_entrypoint(&doc).unwrap();
        assert!(warning.contains("Python"));
    }

    #[test]
    fn javascript_accepts_either_main_spelling() {
        let decl = json!({ "type": "javascript", "run": "function main() {}" });
        assert!(language_entrypoint(&decl).is_none());

        let assign = json!({ "type": "javascript", "run": "const main = () => {};" });
        assert!(language_entrypoint(&assign).is_none());

        let neither = json!({ "type": "javascript", "run": "console.log(1);" });
        assert!(language_entrypoint(&neither).is_some());
    }

    #[test]
    fn entrypoint_rule_skips_non_string_run() {
        // Sequence-valued run bodies are the workflow rule's business.
        let doc = json!({ "type": "python", "run": ["a", "b"] });
        assert!(language_entrypoint(&doc).is_none());
    }

    #[test]
    fn warnings_follow_fixed_rule_order() {
        let dir = no_readme_dir();
        let doc = json!({ "type": "workflow" });
        let warnings = capability_warnings(&doc, dir.path());
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("README.md"));
        assert!(warnings[1].contains("array of steps"));
        assert!(warnings[2].contains("Missing 'run'"));
    }
}
