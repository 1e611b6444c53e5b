//! Match output formatting for the CLI.

use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// A single occurrence, located within the text.
#[derive(Debug, Clone, Serialize)]
pub struct Match {
    /// Byte offset of the match in the text
    pub offset: usize,
    /// 1-based line number
    pub line: usize,
    /// 1-based byte column within the line
    pub column: usize,
}

/// Resolve ascending byte offsets to line/column positions.
///
/// Walks the text's newlines once, so resolution is O(text + matches)
/// regardless of how many matches there are.
pub fn resolve_matches(text: &[u8], offsets: &[usize]) -> Vec<Match> {
    let mut matches = Vec::with_capacity(offsets.len());
    let mut line = 1;
    let mut line_start = 0;
    let mut newlines = memchr::memchr_iter(b'\n', text);
    let mut next_newline = newlines.next();

    for &offset in offsets {
        while let Some(pos) = next_newline {
            if pos >= offset {
                break;
            }
            line += 1;
            line_start = pos + 1;
            next_newline = newlines.next();
        }

        matches.push(Match {
            offset,
            line,
            column: offset - line_start + 1,
        });
    }

    matches
}

/// Print matches as `line:column (byte N)` lines, grep-style.
pub fn print_matches(matches: &[Match], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for m in matches {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(stdout, "{}:{}", m.line, m.column)?;
        stdout.reset()?;
        writeln!(stdout, " (byte {})", m.offset)?;
    }

    Ok(())
}

/// Print matches as a JSON array of records.
pub fn print_matches_json(matches: &[Match]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, matches)?;
    writeln!(handle)?;
    Ok(())
}
