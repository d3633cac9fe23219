//! Output buffer with indentation tracking

use std::fmt;

const INDENT_WIDTH: usize = 4;

/// Generated source text plus the current indentation depth.
///
/// Implements [`fmt::Write`], so `write!`/`writeln!` work directly; every
/// non-empty line is prefixed with the current indentation. Blank lines
/// carry no trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    output: String,
    indent_level: usize,
    at_line_start: bool,
}

impl Default for GeneratedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratedSource {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            at_line_start: true,
        }
    }

    /// Empty buffer at this buffer's indentation, for staging output that
    /// may be discarded
    pub fn scratch(&self) -> Self {
        Self {
            indent_level: self.indent_level,
            ..Self::new()
        }
    }

    /// Get the generated text
    pub fn finish(self) -> String {
        self.output
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Write a full line
    pub fn line(&mut self, text: &str) {
        self.push(text);
        self.newline();
    }

    /// Write each line in turn
    pub fn lines<S: AsRef<str>>(&mut self, lines: impl IntoIterator<Item = S>) {
        for line in lines {
            self.line(line.as_ref());
        }
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Append staged output verbatim
    pub fn append(&mut self, staged: GeneratedSource) {
        if staged.output.is_empty() {
            return;
        }
        self.at_line_start = staged.output.ends_with('\n');
        self.output.push_str(&staged.output);
    }

    fn push(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            self.output
                .extend(std::iter::repeat_n(' ', self.indent_level * INDENT_WIDTH));
            self.at_line_start = false;
        }
        self.output.push_str(text);
    }
}

impl fmt::Write for GeneratedSource {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut segments = s.split('\n');

        if let Some(first) = segments.next() {
            self.push(first);
        }
        for segment in segments {
            self.newline();
            self.push(segment);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::fmt::Write;

    #[test]
    fn GeneratedSource___line___indents_nonempty_lines() {
        let mut out = GeneratedSource::new();

        out.line("class A {");
        out.indent();
        out.line("int a;");
        out.line("");
        out.dedent();
        out.line("}");

        assert_eq!(out.finish(), "class A {\n    int a;\n\n}\n");
    }

    #[test]
    fn GeneratedSource___writeln___indents_each_line() {
        let mut out = GeneratedSource::new();
        out.indent();

        writeln!(out, "a {}\nb", 1).unwrap();

        assert_eq!(out.as_str(), "    a 1\n    b\n");
    }

    #[test]
    fn GeneratedSource___dedent___saturates_at_zero() {
        let mut out = GeneratedSource::new();

        out.dedent();
        out.line("x");

        assert_eq!(out.current_indent(), 0);
        assert_eq!(out.finish(), "x\n");
    }

    #[test]
    fn GeneratedSource___scratch___shares_indent_and_appends() {
        let mut out = GeneratedSource::new();
        out.indent();
        let mut staged = out.scratch();

        staged.line("return 1;");
        out.append(staged);
        out.line("}");

        assert_eq!(out.finish(), "    return 1;\n    }\n");
    }
}
