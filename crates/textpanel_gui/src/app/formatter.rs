//! "Format document" action of the code surface.
//!
//! Brace-based reindentation for scripts and stylesheets, whitespace cleanup
//! for markup. Text inside strings, template literals, and comments is never
//! used for indentation decisions.

use textpanel_core::models::CodeLanguage;

const INDENT: &str = "  ";

/// Format `text` as `language`.
///
/// # Returns
/// The formatted document. Line endings are normalized to `\n`, and a final
/// newline is kept only when the input had one.
pub(crate) fn format_document(language: CodeLanguage, text: &str) -> String {
    match language {
        CodeLanguage::Javascript | CodeLanguage::Scss => reindent_braces(text),
        CodeLanguage::Html => trim_line_ends(text, false),
        CodeLanguage::Markdown => trim_line_ends(text, true),
    }
}

/// Char index in `formatted` that corresponds to `cursor` in `original`.
///
/// Formatting only touches whitespace, so the cursor keeps the same number of
/// non-whitespace chars to its left.
pub(crate) fn map_cursor(original: &str, formatted: &str, cursor: usize) -> usize {
    let anchor = original
        .chars()
        .take(cursor)
        .filter(|ch| !ch.is_whitespace())
        .count();
    if anchor == 0 {
        return 0;
    }
    let mut seen = 0usize;
    for (idx, ch) in formatted.chars().enumerate() {
        if !ch.is_whitespace() {
            seen += 1;
            if seen == anchor {
                return idx + 1;
            }
        }
    }
    formatted.chars().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Code,
    Quoted(char),
    Template,
    BlockComment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bracket {
    Open,
    Close,
}

#[derive(Debug, Default)]
struct LineBrackets {
    events: Vec<Bracket>,
    leading_closers: usize,
}

struct BraceScanner {
    state: ScanState,
}

impl BraceScanner {
    fn new() -> Self {
        Self {
            state: ScanState::Code,
        }
    }

    /// Template literals and block comments carry over line breaks.
    fn inside_multiline(&self) -> bool {
        matches!(self.state, ScanState::Template | ScanState::BlockComment)
    }

    fn scan(&mut self, line: &str) -> LineBrackets {
        let mut found = LineBrackets::default();
        let mut leading = true;
        let mut chars = line.chars().peekable();
        while let Some(ch) = chars.next() {
            match self.state {
                ScanState::Quoted(_) | ScanState::Template if ch == '\\' => {
                    chars.next();
                }
                ScanState::Quoted(quote) => {
                    if ch == quote {
                        self.state = ScanState::Code;
                    }
                }
                ScanState::Template => {
                    if ch == '`' {
                        self.state = ScanState::Code;
                    }
                }
                ScanState::BlockComment => {
                    if ch == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        self.state = ScanState::Code;
                    }
                }
                ScanState::Code => match ch {
                    '/' if chars.peek() == Some(&'/') => break,
                    '/' if chars.peek() == Some(&'*') => {
                        chars.next();
                        self.state = ScanState::BlockComment;
                        leading = false;
                    }
                    '"' | '\'' => {
                        self.state = ScanState::Quoted(ch);
                        leading = false;
                    }
                    '`' => {
                        self.state = ScanState::Template;
                        leading = false;
                    }
                    '{' | '(' | '[' => {
                        found.events.push(Bracket::Open);
                        leading = false;
                    }
                    '}' | ')' | ']' => {
                        found.events.push(Bracket::Close);
                        if leading {
                            found.leading_closers += 1;
                        }
                    }
                    c if c.is_whitespace() => {}
                    _ => leading = false,
                },
            }
        }
        if matches!(self.state, ScanState::Quoted(_)) {
            self.state = ScanState::Code;
        }
        found
    }
}

/// Open indent levels. Each level remembers how many unmatched openers the
/// line that created it left behind, so `(function () {` indents once and
/// `});` dedents once.
#[derive(Debug, Default, Clone)]
struct IndentLevels {
    levels: Vec<usize>,
}

impl IndentLevels {
    fn depth(&self) -> usize {
        self.levels.len()
    }

    fn close(&mut self) {
        if let Some(top) = self.levels.last_mut() {
            *top -= 1;
            if *top == 0 {
                self.levels.pop();
            }
        }
    }

    /// Depth the line should be printed at once its leading closers apply.
    fn depth_after_leading(&self, leading_closers: usize) -> usize {
        let mut preview = self.clone();
        for _ in 0..leading_closers {
            preview.close();
        }
        preview.depth()
    }

    fn apply(&mut self, events: &[Bracket]) {
        let mut opened_here = 0usize;
        for event in events {
            match event {
                Bracket::Open => opened_here += 1,
                Bracket::Close if opened_here > 0 => opened_here -= 1,
                Bracket::Close => self.close(),
            }
        }
        if opened_here > 0 {
            self.levels.push(opened_here);
        }
    }
}

fn finish(mut lines: Vec<String>, had_final_newline: bool) -> String {
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    let mut out = lines.join("\n");
    if had_final_newline && !out.is_empty() {
        out.push('\n');
    }
    out
}

fn reindent_braces(text: &str) -> String {
    let mut scanner = BraceScanner::new();
    let mut levels = IndentLevels::default();
    let mut lines = Vec::new();
    let mut previous_blank = false;

    for line in text.lines() {
        if scanner.inside_multiline() {
            let found = scanner.scan(line);
            levels.apply(&found.events);
            lines.push(line.to_string());
            previous_blank = false;
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !previous_blank && !lines.is_empty() {
                lines.push(String::new());
            }
            previous_blank = true;
            continue;
        }
        previous_blank = false;

        let found = scanner.scan(trimmed);
        let indent = levels.depth_after_leading(found.leading_closers);
        lines.push(format!("{}{}", INDENT.repeat(indent), trimmed));
        levels.apply(&found.events);
    }

    finish(lines, text.ends_with('\n'))
}

fn trim_line_ends(text: &str, keep_hard_breaks: bool) -> String {
    let lines = text
        .lines()
        .map(|line| {
            let trimmed = line.trim_end();
            let trailing = &line[trimmed.len()..];
            if keep_hard_breaks && !trimmed.is_empty() && trailing.starts_with("  ") {
                format!("{trimmed}  ")
            } else {
                trimmed.to_string()
            }
        })
        .collect();
    finish(lines, text.ends_with('\n'))
}
