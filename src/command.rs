//! Line-oriented edit controller.
//!
//! ```text
//! set B1 =A1+1     edit a cell (text is the rest of the line, may be empty)
//! clear B1         same as `set B1` with no text
//! get B1           show raw and computed value
//! copy B1          print the computed value as plain text
//! show             render the whole grid
//! # comment        ignored, as are blank lines
//! ```

use cellgrid_core::Document;
use cellgrid_engine::engine::CellRef;
use std::io::Write;

use crate::error::{CliError, Result};
use crate::render::render_table;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Set { at: CellRef, text: String },
    Get(CellRef),
    Copy(CellRef),
    Show,
}

/// Parse one input line. Blank lines and comments yield `None`.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Command>> {
    let parse_err = |message: String| CliError::Parse {
        line: line_no,
        message,
    };

    let line = line.trim_start();
    if line.trim_end().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = split_word(line);
    let verb = verb.to_ascii_lowercase();
    if verb == "show" {
        if !rest.trim().is_empty() {
            return Err(parse_err(format!("unexpected argument: {}", rest.trim())));
        }
        return Ok(Some(Command::Show));
    }

    let (name, rest) = split_word(rest.trim_start());
    if name.is_empty() {
        return Err(parse_err(format!("{verb} requires a cell reference")));
    }
    let at = CellRef::parse_a1(name).map_err(|e| parse_err(e.to_string()))?;

    // A single separator after the reference; the remainder is taken verbatim.
    let text = rest
        .strip_prefix(|c: char| c == ' ' || c == '\t')
        .unwrap_or(rest);

    let command = match verb.as_str() {
        "set" => Command::Set {
            at,
            text: text.to_string(),
        },
        "clear" | "get" | "copy" if !text.trim().is_empty() => {
            return Err(parse_err(format!("unexpected argument: {}", text.trim())));
        }
        "clear" => Command::Set {
            at,
            text: String::new(),
        },
        "get" => Command::Get(at),
        "copy" => Command::Copy(at),
        other => return Err(parse_err(format!("unknown command: {other}"))),
    };
    Ok(Some(command))
}

fn split_word(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], &s[i..]),
        None => (s, ""),
    }
}

/// Run one command against the store, writing any output to `out`.
pub fn execute<W: Write>(doc: &mut Document, command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Set { at, text } => {
            doc.set_raw_value(at, &text)?;
        }
        Command::Get(at) => {
            let cell = doc.get(at)?;
            writeln!(
                out,
                "{at} raw={:?} value={:?}",
                cell.raw_value(),
                cell.computed_value()
            )?;
        }
        Command::Copy(at) => {
            writeln!(out, "{}", doc.copy_value(at)?)?;
        }
        Command::Show => {
            render_table(&doc.snapshot(), out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Option<Command> {
        parse_line(1, line).unwrap()
    }

    #[test]
    fn test_parse_set_keeps_text_verbatim() {
        assert_eq!(
            parse("set A1 =1 + 2"),
            Some(Command::Set {
                at: CellRef::new(0, 0),
                text: "=1 + 2".to_string(),
            })
        );
        assert_eq!(
            parse("SET b2  padded "),
            Some(Command::Set {
                at: CellRef::new(1, 1),
                text: " padded ".to_string(),
            })
        );
        assert_eq!(
            parse("set C3"),
            Some(Command::Set {
                at: CellRef::new(2, 2),
                text: String::new(),
            })
        );
    }

    #[test]
    fn test_parse_other_commands() {
        assert_eq!(parse("get A10"), Some(Command::Get(CellRef::new(0, 9))));
        assert_eq!(parse("  copy g1"), Some(Command::Copy(CellRef::new(6, 0))));
        assert_eq!(
            parse("clear D4"),
            Some(Command::Set {
                at: CellRef::new(3, 3),
                text: String::new(),
            })
        );
        assert_eq!(parse("show"), Some(Command::Show));
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("# set A1 1"), None);
    }

    #[test]
    fn test_parse_errors_carry_line_number() {
        for line in ["frobnicate A1", "get", "get 1A", "copy A1 extra", "show A1"] {
            match parse_line(7, line) {
                Err(CliError::Parse { line: 7, .. }) => {}
                other => panic!("{line}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_execute_round_trip() {
        let mut doc = Document::default();
        let mut out = Vec::new();
        for line in ["set A1 12.5", "set B1 =A1*2", "copy A1", "copy B1", "get B1"] {
            let command = parse(line).unwrap();
            execute(&mut doc, command, &mut out).unwrap();
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "12.5\n25\nB1 raw=\"=A1*2\" value=\"25\"\n"
        );
    }

    #[test]
    fn test_execute_out_of_range() {
        let mut doc = Document::default();
        let mut out = Vec::new();
        let err = execute(&mut doc, parse("set H1 1").unwrap(), &mut out).unwrap_err();
        assert!(matches!(err, CliError::Cellgrid(_)));
        assert!(out.is_empty());
    }
}
