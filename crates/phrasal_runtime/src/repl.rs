//! The main REPL implementation.
//!
//! Each input is either a JSON request, possibly spread over several lines,
//! or a `:command` that adjusts the session.

use std::io::{self, Write};

use phrasal_foundation::{Error, ErrorKind, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor, default_keywords, is_complete};
use crate::session::Session;

const HELP: &str = "\
Enter a request such as {\"sentence\": {\"subject\": \"dog\", \"verb\": \"bark\"}}.
The \"sentence\" wrapper may be left out.

Commands:
  :help            Show this help
  :tree [on|off]   Print the phrase tree after each sentence
  :json [on|off]   Print results as JSON
  :depth [N]       Show or set the maximum nesting depth
  :strict [on|off] Reject keys a node does not recognise
  :stats           Show request counters
  :quit            Exit";

/// What the REPL does after evaluating one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text.
    Print(String),
    /// Print nothing.
    Silent,
    /// Leave the loop.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (configuration, engine, counters).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Continuation prompt (for multi-line input).
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor).with_session(session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E) -> Self {
        editor.set_keywords(default_keywords());
        Self {
            editor,
            session: Session::default(),
            show_banner: true,
            prompt: "phrasal> ".to_string(),
            continuation_prompt: "... ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.show_banner = session.config().banner;
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => self.print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let Some(input) = self.read_input()? else {
            return Ok(false);
        };

        if input.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Outcome::Print(text)) => println!("{text}"),
            Ok(Outcome::Silent) => {}
            Ok(Outcome::Quit) => return Ok(false),
            Err(e) => self.print_error(&e),
        }

        Ok(true)
    }

    /// Reads a potentially multi-line input.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let read = if first_line {
                self.editor.read_line(&self.prompt)?
            } else {
                self.editor.read_continuation(&self.continuation_prompt)?
            };

            match read {
                ReadResult::Line(line) => {
                    if !first_line {
                        input.push('\n');
                    }
                    input.push_str(&line);

                    if is_complete(&input) {
                        return Ok(Some(input));
                    }

                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if !first_line {
                        println!("\nInput cancelled.");
                    }
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof => {
                    if first_line {
                        return Ok(None);
                    }
                    return Err(Error::new(ErrorKind::Internal(
                        "unexpected EOF in multi-line input".to_string(),
                    )));
                }
            }
        }
    }

    /// Evaluates one complete input: a command or a request.
    ///
    /// # Errors
    ///
    /// Returns the error that rejected the request.
    pub fn eval(&mut self, input: &str) -> Result<Outcome> {
        let trimmed = input.trim();
        if let Some(command) = trimmed.strip_prefix(':') {
            return Ok(self.command(command));
        }
        let generation = self.session.generate_source(&wrap_sentence(trimmed))?;
        Ok(Outcome::Print(self.session.render(&generation)))
    }

    fn command(&mut self, command: &str) -> Outcome {
        let mut words = command.split_whitespace();
        let name = words.next().unwrap_or_default();
        let argument = words.next();
        let stats = self.session.stats();
        let config = self.session.config_mut();

        match name {
            "help" | "h" | "?" => Outcome::Print(HELP.to_string()),
            "quit" | "q" | "exit" => Outcome::Quit,
            "tree" => match toggle(argument, config.show_tree) {
                Some(on) => {
                    config.show_tree = on;
                    Outcome::Print(format!("tree output {}", on_off(on)))
                }
                None => usage(":tree [on|off]"),
            },
            "json" => match toggle(argument, config.json_output) {
                Some(on) => {
                    config.json_output = on;
                    Outcome::Print(format!("json output {}", on_off(on)))
                }
                None => usage(":json [on|off]"),
            },
            "strict" => match toggle(argument, config.expansion.strict_keys) {
                Some(on) => {
                    config.expansion.strict_keys = on;
                    Outcome::Print(format!("strict keys {}", on_off(on)))
                }
                None => usage(":strict [on|off]"),
            },
            "depth" => match argument.map(str::parse::<usize>) {
                None => Outcome::Print(format!("max depth {}", config.expansion.max_depth)),
                Some(Ok(depth)) if depth > 0 => {
                    config.expansion.max_depth = depth;
                    Outcome::Print(format!("max depth {depth}"))
                }
                Some(_) => usage(":depth N (a positive integer)"),
            },
            "stats" => Outcome::Print(format!(
                "generated {}, rejected {}",
                stats.generated, stats.rejected
            )),
            "" => Outcome::Silent,
            other => Outcome::Print(format!("unknown command :{other} (try :help)")),
        }
    }

    /// Prints an error to stderr.
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31m{}\x1b[0m", self.session.render_error(error));
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mPhrasal\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Enter JSON phrase specifications. Type :help for commands, Ctrl+D to exit.\n");

        let _ = io::stdout().flush();
    }
}

/// Wraps a bare clause specification in a `sentence` object.
///
/// Input that is not a JSON object, or already names a `sentence`, is
/// passed through unchanged.
fn wrap_sentence(input: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(input) {
        Ok(serde_json::Value::Object(map)) if !map.contains_key("sentence") => {
            serde_json::json!({ "sentence": map }).to_string()
        }
        _ => input.to_string(),
    }
}

fn toggle(argument: Option<&str>, current: bool) -> Option<bool> {
    match argument {
        None => Some(!current),
        Some("on" | "true") => Some(true),
        Some("off" | "false") => Some(false),
        Some(_) => None,
    }
}

const fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

fn usage(text: &str) -> Outcome {
    Outcome::Print(format!("usage: {text}"))
}
