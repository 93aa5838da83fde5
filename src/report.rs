use std::fmt::Write;

use crate::constants::exit_codes;
use crate::generator::{EntryStatus, GenerationResult, GenerationStatus, Mode};

/// Human-readable summary of a generation run plus its process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    pub exit_code: i32,
}

/// Formats `result` for the terminal. Only recorded reason strings appear in
/// the output, never raw error internals or stack traces.
pub fn report(result: &GenerationResult) -> Report {
    if let GenerationStatus::Aborted { reason } = &result.status {
        return Report {
            text: format!("Generation aborted: {reason}\n"),
            exit_code: exit_codes::GENERATION_FAILURE,
        };
    }

    let mut text = String::new();
    for outcome in &result.outcomes {
        match &outcome.status {
            EntryStatus::Created => {
                let _ = writeln!(text, "created: {}", outcome.path);
            }
            EntryStatus::Skipped { bytes } => {
                let _ = writeln!(text, "planned: {} ({bytes} bytes)", outcome.path);
            }
            EntryStatus::Failed { reason } => {
                let _ = writeln!(text, "failed: {} ({reason})", outcome.path);
            }
        }
    }

    let exit_code = match (&result.status, result.mode) {
        (GenerationStatus::Success, Mode::DryRun) => {
            let _ = writeln!(
                text,
                "\nDry run: {} files planned under '{}'; nothing was written.",
                result.planned(),
                result.root.display()
            );
            exit_codes::SUCCESS
        }
        (GenerationStatus::Success, Mode::Apply) => {
            let _ = writeln!(
                text,
                "\nScaffolded {} files in '{}'.",
                result.created(),
                result.root.display()
            );
            let _ = writeln!(
                text,
                "\nNext steps:\n  cd {}\n  python3 -m http.server 8000\n  open http://localhost:8000\n\nGame logic starts in js/scenes/GameScene.js; see README.md for the rest.",
                result.root.display()
            );
            exit_codes::SUCCESS
        }
        (GenerationStatus::PartialFailure, _) => {
            let _ = writeln!(
                text,
                "\nScaffolded {} of {} files in '{}'; {} failed.",
                result.created(),
                result.planned(),
                result.root.display(),
                result.failed()
            );
            exit_codes::GENERATION_FAILURE
        }
        // Aborted is handled above.
        (GenerationStatus::Aborted { .. }, _) => unreachable!(),
    };

    Report { text, exit_code }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::EntryOutcome;
    use std::path::PathBuf;

    fn outcome(path: &str, status: EntryStatus) -> EntryOutcome {
        EntryOutcome { path: path.to_string(), status }
    }

    fn result(mode: Mode, status: GenerationStatus, outcomes: Vec<EntryOutcome>) -> GenerationResult {
        GenerationResult { root: PathBuf::from("/tmp/my-game"), mode, status, outcomes }
    }

    #[test]
    fn success_maps_to_zero() {
        let r = result(
            Mode::Apply,
            GenerationStatus::Success,
            vec![outcome("index.html", EntryStatus::Created)],
        );
        let report = report(&r);
        assert_eq!(report.exit_code, exit_codes::SUCCESS);
        assert!(report.text.contains("created: index.html"));
        assert!(report.text.contains("Scaffolded 1 files in '/tmp/my-game'"));
    }

    #[test]
    fn dry_run_reports_planned_entries() {
        let r = result(
            Mode::DryRun,
            GenerationStatus::Success,
            vec![outcome("index.html", EntryStatus::Skipped { bytes: 42 })],
        );
        let report = report(&r);
        assert_eq!(report.exit_code, exit_codes::SUCCESS);
        assert!(report.text.contains("planned: index.html (42 bytes)"));
        assert!(report.text.contains("nothing was written"));
    }

    #[test]
    fn partial_failure_maps_to_two_and_lists_both() {
        let r = result(
            Mode::Apply,
            GenerationStatus::PartialFailure,
            vec![
                outcome("index.html", EntryStatus::Created),
                outcome(
                    "css/main.css",
                    EntryStatus::Failed { reason: "permission denied".to_string() },
                ),
            ],
        );
        let report = report(&r);
        assert_eq!(report.exit_code, exit_codes::GENERATION_FAILURE);
        assert!(report.text.contains("created: index.html"));
        assert!(report.text.contains("failed: css/main.css (permission denied)"));
        assert!(report.text.contains("Scaffolded 1 of 2 files"));
    }

    #[test]
    fn aborted_maps_to_two_with_reason_only() {
        let r = result(
            Mode::Apply,
            GenerationStatus::Aborted { reason: "output directory exists".to_string() },
            vec![],
        );
        let report = report(&r);
        assert_eq!(report.exit_code, exit_codes::GENERATION_FAILURE);
        assert_eq!(report.text, "Generation aborted: output directory exists\n");
    }
}
