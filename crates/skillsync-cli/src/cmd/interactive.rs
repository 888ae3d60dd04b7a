use crate::output::status_suffix;
use anyhow::Context;
use skillsync_core::probe::{self, SkillStatus};
use skillsync_core::reconcile::{self, Action, ApplyOutcome};
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::path::Path;

pub fn run(skills_root: &Path, target: &Path) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_loop(skills_root, target, &mut stdin.lock(), &mut stdout.lock())
}

/// Render → await one line of input → act → repeat. The read is the only
/// suspension point; quitting between edits discards pending toggles
/// without touching the filesystem.
fn run_loop<R: BufRead, W: Write>(
    skills_root: &Path,
    target: &Path,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut statuses = probe::snapshot(skills_root, target).context("failed to scan skills")?;
    let mut selected = seed_selection(&statuses);

    loop {
        render(&statuses, &selected, out)?;
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF quits like 'q'
            break;
        }

        match line.trim().to_lowercase().as_str() {
            "q" | "quit" => break,
            "r" | "refresh" => {
                statuses = probe::snapshot(skills_root, target)?;
                selected = seed_selection(&statuses);
            }
            "a" | "apply" => {
                apply_selection(skills_root, target, &statuses, &selected, out)?;
                statuses = probe::snapshot(skills_root, target)?;
                selected = seed_selection(&statuses);
            }
            "" => {}
            other => match other.parse::<usize>() {
                Ok(n) if (1..=statuses.len()).contains(&n) => {
                    let name = &statuses[n - 1].name;
                    if !selected.remove(name) {
                        selected.insert(name.clone());
                    }
                }
                _ => writeln!(
                    out,
                    "Unrecognized input '{other}': enter a number, 'a' to apply, 'r' to refresh, or 'q' to quit."
                )?,
            },
        }
    }
    Ok(())
}

fn seed_selection(statuses: &[SkillStatus]) -> BTreeSet<String> {
    statuses
        .iter()
        .filter(|s| s.status.is_linked())
        .map(|s| s.name.clone())
        .collect()
}

fn linked_names(statuses: &[SkillStatus]) -> Vec<String> {
    statuses
        .iter()
        .filter(|s| s.status.is_linked())
        .map(|s| s.name.clone())
        .collect()
}

fn render<W: Write>(
    statuses: &[SkillStatus],
    selected: &BTreeSet<String>,
    out: &mut W,
) -> anyhow::Result<()> {
    writeln!(out)?;
    if statuses.is_empty() {
        writeln!(out, "No skills found.")?;
    } else {
        writeln!(
            out,
            "Skills ({} of {} linked):",
            linked_names(statuses).len(),
            statuses.len()
        )?;
        for (i, s) in statuses.iter().enumerate() {
            let mark = if selected.contains(&s.name) { "x" } else { " " };
            writeln!(
                out,
                "{:>3}. [{mark}] {}{}",
                i + 1,
                s.name,
                status_suffix(s.status)
            )?;
        }
    }
    writeln!(out, "Toggle by number; 'a' apply, 'r' refresh, 'q' quit.")?;
    Ok(())
}

fn apply_selection<W: Write>(
    skills_root: &Path,
    target: &Path,
    statuses: &[SkillStatus],
    selected: &BTreeSet<String>,
    out: &mut W,
) -> anyhow::Result<()> {
    let current = linked_names(statuses);
    // Desired set in discovery order, so batch output is reproducible.
    let desired: Vec<String> = statuses
        .iter()
        .filter(|s| selected.contains(&s.name))
        .map(|s| s.name.clone())
        .collect();

    let plan = reconcile::plan(&current, &desired);
    if plan.is_empty() {
        writeln!(out, "Nothing to do.")?;
        return Ok(());
    }

    tracing::debug!(
        to_link = plan.to_link.len(),
        to_unlink = plan.to_unlink.len(),
        "applying reconcile plan"
    );
    let outcomes = reconcile::apply(skills_root, target, &plan);
    report(&outcomes, out)
}

fn report<W: Write>(outcomes: &[ApplyOutcome], out: &mut W) -> anyhow::Result<()> {
    for o in outcomes {
        match (&o.error, o.action) {
            (None, Action::Link) => writeln!(out, "  linked:   {}", o.name)?,
            (None, Action::Unlink) => writeln!(out, "  unlinked: {}", o.name)?,
            (Some(e), _) => writeln!(out, "  failed:   {}: {e}", o.name)?,
        }
    }
    let failed = outcomes.iter().filter(|o| !o.succeeded()).count();
    if failed > 0 {
        writeln!(out, "{failed} of {} operations failed.", outcomes.len())?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use skillsync_core::probe::LinkStatus;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn setup(skills: &[&str]) -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let skills_root = dir.path().join("skills");
        let target = dir.path().join("target");
        for name in skills {
            std::fs::create_dir_all(skills_root.join(name)).unwrap();
        }
        (dir, skills_root, target)
    }

    fn drive(skills_root: &Path, target: &Path, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run_loop(skills_root, target, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn quit_without_apply_mutates_nothing() {
        let (_dir, skills_root, target) = setup(&["commit", "pr"]);
        drive(&skills_root, &target, "1\n2\nq\n");
        assert!(!target.exists());
    }

    #[test]
    fn toggle_and_apply_links_skill() {
        let (_dir, skills_root, target) = setup(&["commit", "pr"]);
        let out = drive(&skills_root, &target, "2\na\nq\n");
        assert!(out.contains("linked:   pr"));
        assert_eq!(
            probe::status_of(&skills_root, &target, "pr"),
            LinkStatus::Linked
        );
        assert_eq!(
            probe::status_of(&skills_root, &target, "commit"),
            LinkStatus::Unlinked
        );
    }

    #[test]
    fn toggle_off_and_apply_unlinks_skill() {
        let (_dir, skills_root, target) = setup(&["commit", "pr"]);
        skillsync_core::linker::link(&skills_root, &target, "commit").unwrap();

        let out = drive(&skills_root, &target, "1\na\nq\n");
        assert!(out.contains("unlinked: commit"));
        assert_eq!(
            probe::status_of(&skills_root, &target, "commit"),
            LinkStatus::Unlinked
        );
    }

    #[test]
    fn unchanged_selection_applies_nothing() {
        let (_dir, skills_root, target) = setup(&["commit", "pr"]);
        skillsync_core::linker::link(&skills_root, &target, "pr").unwrap();

        let out = drive(&skills_root, &target, "a\nq\n");
        assert!(out.contains("Nothing to do."));
    }

    #[test]
    fn apply_reports_failures_and_continues() {
        let (_dir, skills_root, target) = setup(&["commit", "pr"]);
        std::fs::create_dir_all(&target).unwrap();
        std::fs::write(target.join("commit"), "occupied").unwrap();

        // Select both: commit fails on the conflict, pr still links.
        let out = drive(&skills_root, &target, "1\n2\na\nq\n");
        assert!(out.contains("failed:   commit"));
        assert!(out.contains("linked:   pr"));
        assert!(out.contains("1 of 2 operations failed."));
        assert_eq!(
            probe::status_of(&skills_root, &target, "pr"),
            LinkStatus::Linked
        );
        assert_eq!(
            std::fs::read_to_string(target.join("commit")).unwrap(),
            "occupied"
        );
    }

    #[test]
    fn selection_is_seeded_from_linked_state() {
        let (_dir, skills_root, target) = setup(&["commit", "pr"]);
        skillsync_core::linker::link(&skills_root, &target, "pr").unwrap();

        let out = drive(&skills_root, &target, "q\n");
        assert!(out.contains("[ ] commit"));
        assert!(out.contains("[x] pr"));
    }

    #[test]
    fn eof_quits_cleanly() {
        let (_dir, skills_root, target) = setup(&["commit"]);
        drive(&skills_root, &target, "1\n");
        assert!(!target.exists());
    }

    #[test]
    fn unrecognized_input_reprompts() {
        let (_dir, skills_root, target) = setup(&["commit"]);
        let out = drive(&skills_root, &target, "banana\n99\nq\n");
        assert_eq!(out.matches("Unrecognized input").count(), 2);
    }
}
