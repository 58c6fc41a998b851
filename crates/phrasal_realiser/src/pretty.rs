//! Pretty-printer for recorded phrase trees.
//!
//! Renders a [`PhraseTree`] as an s-expression, one form per invocation.
//!
//! # Example
//!
//! ```
//! use phrasal_realiser::{PhraseElement, PhraseFactory, TreeFactory, pretty::pretty_print};
//!
//! let mut clause = TreeFactory.create_clause();
//! clause.set_subject("dog".into());
//! assert_eq!(pretty_print(&clause), "(clause (setSubject \"dog\"))");
//! ```

use std::fmt::Write;

use crate::tree::{Argument, PhraseTree};

/// Configuration for pretty-printing.
#[derive(Debug, Clone)]
pub struct PrettyConfig {
    /// Number of spaces for each indentation level.
    pub indent_width: usize,
    /// Maximum line width before breaking a form across lines.
    pub max_width: usize,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            max_width: 80,
        }
    }
}

/// Pretty-print a tree on one line.
#[must_use]
pub fn pretty_print(tree: &PhraseTree) -> String {
    let mut out = String::new();
    write_inline(tree, &mut out);
    out
}

/// Pretty-print a tree, breaking forms that exceed the configured width.
#[must_use]
pub fn pretty_print_with_config(tree: &PhraseTree, config: &PrettyConfig) -> String {
    let mut printer = PrettyPrinter {
        config,
        output: String::new(),
        indent_level: 0,
    };
    printer.print_tree(tree);
    printer.output
}

fn write_inline(tree: &PhraseTree, out: &mut String) {
    out.push('(');
    out.push_str(tree.kind().tag());
    for invocation in tree.invocations() {
        let _ = write!(out, " ({} ", invocation.capability);
        write_argument_inline(&invocation.argument, out);
        out.push(')');
    }
    out.push(')');
}

fn write_argument_inline(argument: &Argument, out: &mut String) {
    match argument {
        Argument::Word(word) => {
            let _ = write!(out, "{word:?}");
        }
        Argument::Phrase(tree) => write_inline(tree, out),
        Argument::Feature { feature, value } => {
            let _ = write!(out, "{feature} {:?}", value.to_string());
        }
    }
}

/// Pretty-printer state.
struct PrettyPrinter<'a> {
    config: &'a PrettyConfig,
    output: String,
    indent_level: usize,
}

impl PrettyPrinter<'_> {
    fn print_tree(&mut self, tree: &PhraseTree) {
        let inline = pretty_print(tree);
        if self.current_column() + inline.len() <= self.config.max_width {
            self.output.push_str(&inline);
            return;
        }

        self.output.push('(');
        self.output.push_str(tree.kind().tag());
        self.indent_level += 1;
        for invocation in tree.invocations() {
            self.newline();
            let _ = write!(self.output, "({} ", invocation.capability);
            match &invocation.argument {
                Argument::Phrase(child) => self.print_tree(child),
                other => write_argument_inline(other, &mut self.output),
            }
            self.output.push(')');
        }
        self.indent_level -= 1;
        self.output.push(')');
    }

    fn newline(&mut self) {
        self.output.push('\n');
        let width = self.indent_level * self.config.indent_width;
        self.output.extend(std::iter::repeat_n(' ', width));
    }

    fn current_column(&self) -> usize {
        self.output
            .rfind('\n')
            .map_or(self.output.len(), |i| self.output.len() - i - 1)
    }
}
