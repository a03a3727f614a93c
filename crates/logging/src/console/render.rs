//! crates/logging/src/console/render.rs
//! Plain-text rendering of console argument lists.

use std::fmt::Write as _;

use crate::segment::{LINE_BREAK, LogArg};

/// Renders an argument list the way a text console would display it.
///
/// Format specifiers in the first argument are substituted from the
/// following arguments: `%c` consumes one argument and drops it (styles have
/// no plain-text equivalent), `%s`, `%d`, `%i`, `%f`, `%o` and `%O` consume
/// one argument and insert its text, and `%%` is a literal percent sign.
/// Arguments left over are appended separated by a space, except next to a
/// line break. Line breaks are normalised to `\n`.
///
/// ```
/// use logscope::{LogArg, render_plain};
///
/// let args = ["%cGreen text%c", "color:green", "%s"].map(LogArg::from);
/// assert_eq!(render_plain(&args), "Green text");
/// ```
#[must_use]
pub fn render_plain(args: &[LogArg]) -> String {
    let mut rendered = String::new();
    let mut remaining = args.iter();
    let mut previous_break = false;

    if let Some(first) = remaining.next() {
        match first {
            LogArg::Text(template) => substitute(template, &mut remaining, &mut rendered),
            other => {
                let _ = write!(rendered, "{other}");
            }
        }
        previous_break = first.is_line_break();
    }

    for arg in remaining {
        let is_break = arg.is_line_break();
        if !rendered.is_empty() && !previous_break && !is_break {
            rendered.push(' ');
        }
        let _ = write!(rendered, "{arg}");
        previous_break = is_break;
    }

    rendered.replace(LINE_BREAK, "\n")
}

fn substitute<'a>(
    template: &str,
    args: &mut impl Iterator<Item = &'a LogArg>,
    rendered: &mut String,
) {
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            rendered.push(ch);
            continue;
        }

        match chars.peek().copied() {
            Some('c') => {
                chars.next();
                args.next();
            }
            Some(spec @ ('s' | 'd' | 'i' | 'f' | 'o' | 'O')) => {
                chars.next();
                match args.next() {
                    Some(arg) => {
                        let _ = write!(rendered, "{arg}");
                    }
                    None => {
                        rendered.push('%');
                        rendered.push(spec);
                    }
                }
            }
            Some('%') => {
                chars.next();
                rendered.push('%');
            }
            _ => rendered.push('%'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::ErrorValue;
    use serde_json::json;

    fn texts(values: &[&str]) -> Vec<LogArg> {
        values.iter().copied().map(LogArg::from).collect()
    }

    #[test]
    fn style_directives_consume_their_arguments() {
        let args = texts(&["%cRed%c %cBlue%c", "color:red", "%s", "color:blue", "%s"]);
        assert_eq!(render_plain(&args), "Red Blue");
    }

    #[test]
    fn leftover_arguments_are_space_separated() {
        let args = vec![
            LogArg::from("User:"),
            LogArg::Object(json!({ "id": 7 })),
            LogArg::Error(ErrorValue::new("denied", vec!["expired token".into()])),
        ];
        assert_eq!(render_plain(&args), r#"User: {"id":7} Error: denied: expired token"#);
    }

    #[test]
    fn line_breaks_are_not_padded() {
        let args = texts(&["First line", "\r\n", "Second line"]);
        assert_eq!(render_plain(&args), "First line\nSecond line");
    }

    #[test]
    fn string_specifier_inserts_the_next_argument() {
        let args = texts(&["%s loaded in %dms", "config", "12"]);
        assert_eq!(render_plain(&args), "config loaded in 12ms");
    }

    #[test]
    fn specifiers_without_arguments_are_kept() {
        assert_eq!(render_plain(&texts(&["100%s"])), "100%s");
        assert_eq!(render_plain(&texts(&["100%"])), "100%");
        assert_eq!(render_plain(&texts(&["100%%"])), "100%");
    }

    #[test]
    fn leading_object_is_rendered_as_json() {
        let args = vec![LogArg::Object(json!([1, 2])), LogArg::from("after")];
        assert_eq!(render_plain(&args), "[1,2] after");
    }

    #[test]
    fn empty_list_renders_empty() {
        assert_eq!(render_plain(&[]), "");
    }
}
