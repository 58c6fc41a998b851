//! REPL integration tests
//!
//! Drives the REPL loop with scripted input.

use std::collections::VecDeque;

use phrasal::foundation::Result;
use phrasal::runtime::{LineEditor, Outcome, ReadResult, Repl, RuntimeConfig, Session};

/// Replays a fixed script, then reports end of input.
struct ScriptedEditor {
    lines: VecDeque<String>,
    history: Vec<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| (*line).to_string()).collect(),
            history: Vec::new(),
        }
    }

    fn next(&mut self) -> ReadResult {
        self.lines.pop_front().map_or(ReadResult::Eof, ReadResult::Line)
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.next())
    }

    fn read_continuation(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.next())
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn repl(lines: &[&str]) -> Repl<ScriptedEditor> {
    Repl::with_editor(ScriptedEditor::new(lines))
        .with_session(Session::new(RuntimeConfig::new().with_banner(false)))
}

#[test]
fn script_runs_to_quit() {
    let mut repl = repl(&[
        r#"{"sentence": {"subject": "dog", "verb": "bark"}}"#,
        r#"{"subject": "cat","#,
        r#" "verb": "purr"}"#,
        r#"{"sentence": {"subject": {"head": "dog"}}}"#,
        ":quit",
        r#"{"sentence": {"verb": "never"}}"#,
    ]);
    repl.run().unwrap();

    let stats = repl.session().stats();
    assert_eq!(stats.generated, 2);
    assert_eq!(stats.rejected, 1);
}

#[test]
fn commands_change_the_session() {
    let mut repl = repl(&[]);
    assert_eq!(
        repl.eval(":depth 3").unwrap(),
        Outcome::Print("max depth 3".to_string())
    );
    assert_eq!(repl.session().config().expansion.max_depth, 3);

    repl.eval(":tree").unwrap();
    let Outcome::Print(text) = repl.eval(r#"{"subject": "dog", "verb": "bark"}"#).unwrap() else {
        panic!("expected output");
    };
    assert!(text.starts_with("Dog barks.\n"));
    assert!(text.contains("(setSubject \"dog\")"));

    assert_eq!(
        repl.eval(":stats").unwrap(),
        Outcome::Print("generated 1, rejected 0".to_string())
    );
}

#[test]
fn eof_ends_the_loop() {
    let mut repl = repl(&[":tree on"]);
    repl.run().unwrap();
    assert!(repl.session().config().show_tree);
}
