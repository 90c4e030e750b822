#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Finds the line containing byte `position` of `source`.
///
/// Returns the 1-based line number, the line text (including its newline)
/// and the offset of `position` within that line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position >= source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((index + 1, line.to_string(), position - start));
        }

        start = end;
    }

    None
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::{Error, ErrorImpl};

    const SOURCE: &str = "Hello, world!\nvar x;\n\n  Testing { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 32).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "  Testing { }\n");
        assert_eq!(line_pos, 10);

        assert!(super::get_line_at_position(SOURCE, SOURCE.len()).is_none());
    }

    #[test]
    fn test_format_error() {
        let source = "var a = 1;\n  var b = #;\n";
        let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '#' }, 2, 21);

        let rendered = super::format_error(&error, source, "main.lox");

        assert_eq!(
            rendered,
            "Error: UnexpectedCharacter\n-> main.lox\n  |\n2 | var b = #;\n  | --------^\n"
        );
    }

    #[test]
    fn test_format_error_with_tip() {
        let source = "print \"open";
        let error = Error::new(ErrorImpl::UnterminatedString, 1, 6);

        let rendered = super::format_error(&error, source, "repl");

        assert!(rendered
            .starts_with("Error: UnterminatedString (add a closing `\"` to end the string)\n"));
        assert!(rendered.ends_with("1 | print \"open\n  | ------^\n"));
    }

    #[test]
    fn test_format_error_out_of_range() {
        let error = Error::new(ErrorImpl::UnterminatedString, 1, 40);

        let rendered = super::format_error(&error, "\"", "repl");

        assert_eq!(rendered, "Error: UnterminatedString (add a closing `\"` to end the string)\n-> repl\n");
    }
}

/// Renders `error` with the offending source line and a caret under it.
///
/// ```text
/// Error: UnexpectedCharacter
/// -> main.lox
///   |
/// 2 | var b = #;
///   | --------^
/// ```
pub fn format_error(error: &Error, source: &str, file_name: &str) -> String {
    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", file_name));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position())
    else {
        return rendered;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    rendered
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
