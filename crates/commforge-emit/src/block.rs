//! The emitted command grammar.
//!
//! Every command block follows the fixed external contract
//! `<RESULT> = <OPERATION>(<KEY>=<VALUE>, ...);` with `_F(...)` factor
//! blocks for structured sub-arguments and parenthesized tuples for
//! lists. Rendering is fully deterministic: one keyword per line at a
//! fixed indent, factors inline, factor lists one per line. Builders
//! construct [`Command`]s and collect them into [`Section`]s; nothing in
//! this module knows about entities.

use commforge_core::numeric::format_decimal;
use commforge_core::Symbol;
use std::fmt::Write;

/// A value on the right-hand side of a keyword operand.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A bare concept reference (`MAIL`, `M_STEEL`).
    Ref(Symbol),
    /// A quoted string literal (`'MED'`, `'Beam_Group'`).
    Text(String),
    /// A real literal, rendered as canonical decimal.
    Real(f64),
    /// An integer literal.
    Int(i64),
    /// A parenthesized tuple. Single-element tuples keep a trailing
    /// comma so they stay tuples in the solver's reader.
    Tuple(Vec<Value>),
    /// One factor block `_F(...)`, rendered inline.
    Factor(Factor),
    /// A tuple of factor blocks, rendered one per line.
    Factors(Vec<Factor>),
}

impl Value {
    /// Convenience constructor for quoted text.
    pub fn text(text: impl Into<String>) -> Value {
        Value::Text(text.into())
    }
}

/// Keyword entries of one `_F(...)` factor block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Factor {
    entries: Vec<(String, Value)>,
}

impl Factor {
    /// An empty factor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a keyword entry.
    pub fn arg(mut self, key: impl Into<String>, value: Value) -> Self {
        self.entries.push((key.into(), value));
        self
    }

    fn render(&self, out: &mut String, indent: usize) {
        out.push_str("_F(");
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(key);
            out.push('=');
            render_value(value, out, indent);
        }
        out.push(')');
    }
}

/// One command block under construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    result: Option<Symbol>,
    operation: &'static str,
    args: Vec<(String, Value)>,
}

impl Command {
    /// A command assigning its result to a concept symbol.
    pub fn assign(result: Symbol, operation: &'static str) -> Self {
        Self {
            result: Some(result),
            operation,
            args: Vec::new(),
        }
    }

    /// A bare procedure call with no result concept (`DEBUT`, `FIN`).
    pub fn call(operation: &'static str) -> Self {
        Self {
            result: None,
            operation,
            args: Vec::new(),
        }
    }

    /// Append a keyword operand.
    pub fn arg(mut self, key: impl Into<String>, value: Value) -> Self {
        self.args.push((key.into(), value));
        self
    }

    /// The result concept this command defines, if any.
    pub fn result(&self) -> Option<&Symbol> {
        self.result.as_ref()
    }

    /// Render the block text.
    ///
    /// # Examples
    ///
    /// ```
    /// use commforge_core::symbol::sanitize;
    /// use commforge_emit::block::{Command, Value};
    ///
    /// let text = Command::assign(sanitize("mesh a"), "LIRE_MAILLAGE")
    ///     .arg("UNITE", Value::Int(20))
    ///     .arg("FORMAT", Value::text("MED"))
    ///     .render();
    /// assert_eq!(
    ///     text,
    ///     "MESH_A = LIRE_MAILLAGE(\n    UNITE=20,\n    FORMAT='MED',\n);"
    /// );
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(result) = &self.result {
            out.push_str(result.as_str());
            out.push_str(" = ");
        }
        out.push_str(self.operation);
        out.push('(');
        if self.args.is_empty() {
            out.push_str(");");
            return out;
        }
        out.push('\n');
        for (key, value) in &self.args {
            out.push_str("    ");
            out.push_str(key);
            out.push('=');
            render_value(value, &mut out, 4);
            out.push_str(",\n");
        }
        out.push_str(");");
        out
    }
}

fn render_value(value: &Value, out: &mut String, indent: usize) {
    match value {
        Value::Ref(symbol) => out.push_str(symbol.as_str()),
        Value::Text(text) => {
            out.push('\'');
            out.push_str(text);
            out.push('\'');
        }
        Value::Real(v) => out.push_str(&format_decimal(*v)),
        Value::Int(i) => {
            let _ = write!(out, "{i}");
        }
        Value::Tuple(items) => {
            out.push('(');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                render_value(item, out, indent);
            }
            if items.len() == 1 {
                out.push(',');
            }
            out.push(')');
        }
        Value::Factor(factor) => factor.render(out, indent),
        Value::Factors(factors) => {
            out.push_str("(\n");
            for factor in factors {
                for _ in 0..indent + 4 {
                    out.push(' ');
                }
                factor.render(out, indent + 4);
                out.push_str(",\n");
            }
            for _ in 0..indent {
                out.push(' ');
            }
            out.push(')');
        }
    }
}

/// One emitted block: the rendered command plus advisory notes.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    /// Result concept the block defines, if any.
    pub result: Option<Symbol>,
    /// Rendered command text.
    pub text: String,
    /// Advisory notes rendered as comments beside the block.
    pub notes: Vec<String>,
}

impl From<Command> for Block {
    fn from(command: Command) -> Self {
        Block {
            result: command.result().cloned(),
            text: command.render(),
            notes: Vec::new(),
        }
    }
}

/// A named document section: one command family's ordered blocks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Section {
    /// Section title, used in the document header comment.
    pub title: String,
    /// Ordered blocks.
    pub blocks: Vec<Block>,
    /// Advisory notes for the whole section.
    pub notes: Vec<String>,
}

impl Section {
    /// An empty section with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Section {
            title: title.into(),
            blocks: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Append a command as a block.
    pub fn push(&mut self, command: Command) {
        self.blocks.push(command.into());
    }

    /// Whether the section holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commforge_core::symbol::sanitize;

    #[test]
    fn bare_call_renders_compact() {
        assert_eq!(Command::call("FIN").render(), "FIN();");
    }

    #[test]
    fn factors_render_one_per_line() {
        let text = Command::assign(sanitize("modele"), "AFFE_MODELE")
            .arg("MAILLAGE", Value::Ref(sanitize("mail")))
            .arg(
                "AFFE",
                Value::Factors(vec![
                    Factor::new()
                        .arg("GROUP_MA", Value::text("Deck"))
                        .arg("PHENOMENE", Value::text("MECANIQUE"))
                        .arg("MODELISATION", Value::text("DKT")),
                ]),
            )
            .render();
        let expected = "MODELE = AFFE_MODELE(\n\
                        \x20   MAILLAGE=MAIL,\n\
                        \x20   AFFE=(\n\
                        \x20       _F(GROUP_MA='Deck', PHENOMENE='MECANIQUE', MODELISATION='DKT'),\n\
                        \x20   ),\n\
                        );";
        assert_eq!(text, expected);
    }

    #[test]
    fn single_element_tuple_keeps_trailing_comma() {
        let mut out = String::new();
        render_value(&Value::Tuple(vec![Value::text("R")]), &mut out, 0);
        assert_eq!(out, "('R',)");
    }

    #[test]
    fn real_values_render_canonical_decimal() {
        let mut out = String::new();
        render_value(&Value::Real(1e-6), &mut out, 0);
        assert_eq!(out, "0.000001");
    }

    #[test]
    fn render_is_deterministic() {
        let build = || {
            Command::assign(sanitize("charge"), "AFFE_CHAR_MECA")
                .arg(
                    "DDL_IMPO",
                    Value::Factor(
                        Factor::new()
                            .arg("GROUP_MA", Value::text("Base"))
                            .arg("DX", Value::Real(0.0)),
                    ),
                )
                .render()
        };
        assert_eq!(build(), build());
    }
}
