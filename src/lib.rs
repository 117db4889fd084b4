#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// The slice of `source` this span covers.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start.0 as usize..self.end.0 as usize)
    }
}

/// Finds the line containing byte `position`, returning its 1-based number,
/// its text and the offset of `position` within it.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nclass A {\n\n  Testing { }\n";

        let (line_number, line, line_pos) = get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(content, 34).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "  Testing { }\n");
        assert_eq!(line_pos, 9);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(get_line_at_position("abc", 3).is_none());
        assert!(get_line_at_position("", 0).is_none());
    }

    #[test]
    fn test_render_error() {
        use crate::errors::errors::ErrorImpl;

        let source = "class A {\n  a : Int <- $;\n};\n";
        let error = Error::new(
            ErrorImpl::IllegalCharacter { character: '$', line: 2 },
            Position(23, Rc::new(String::from("a.cl"))),
        );

        let rendered = render_error(&error, source, "a.cl");
        let lines = rendered.lines().collect::<Vec<&str>>();

        assert_eq!(lines[0], "Error: IllegalCharacter");
        assert_eq!(lines[1], "-> a.cl");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | a : Int <- $;");
        assert_eq!(lines[4], "  | -----------^");
    }

    #[test]
    fn test_render_error_after_block_comment() {
        let source = "(* a\nb *)\n$";
        let (_, _, errors) = crate::lexer::lexer::tokenize(source);

        // the scanner's counter skips the comment's newline, the rendered
        // line comes from the byte offset
        assert_eq!(errors[0].get_line(), 2);
        assert_eq!(errors[0].get_position().0, 10);

        let rendered = render_error(&errors[0], source, "a.cl");
        let lines = rendered.lines().collect::<Vec<&str>>();
        assert_eq!(lines[3], "3 | $");
        assert_eq!(lines[4], "  | ^");
    }
}

/// Renders `error` against the source it came from:
///
/// ```text
/// Error: IllegalCharacter
/// -> main.cl
///   |
/// 2 | a : Int <- $;
///   | -----------^
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        out.push_str(&format!("   {}\n", error.get_kind()));
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
