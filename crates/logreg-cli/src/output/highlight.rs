//! ANSI syntax highlighting for pretty-printed JSON payloads.

const KEY: &str = "\u{1b}[36m";
const STRING: &str = "\u{1b}[32m";
const NUMBER: &str = "\u{1b}[33m";
const LITERAL: &str = "\u{1b}[35m";
const RESET: &str = "\u{1b}[0m";

/// Colorize a pretty-printed JSON string: keys cyan, string values green,
/// numbers yellow, booleans and null magenta. Structural characters stay
/// uncolored. The input is expected to be valid serialized JSON.
#[must_use]
pub fn highlight_json(pretty: &str) -> String {
    let chars: Vec<char> = pretty.chars().collect();
    let mut out = String::with_capacity(pretty.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '"' => {
                let start = i;
                i += 1;
                while i < chars.len() {
                    match chars[i] {
                        '\\' => i += 2,
                        '"' => {
                            i += 1;
                            break;
                        }
                        _ => i += 1,
                    }
                }
                let end = i.min(chars.len());
                let token: String = chars[start..end].iter().collect();

                let mut lookahead = end;
                while chars.get(lookahead) == Some(&' ') {
                    lookahead += 1;
                }
                let code = if chars.get(lookahead) == Some(&':') {
                    KEY
                } else {
                    STRING
                };
                out.push_str(code);
                out.push_str(&token);
                out.push_str(RESET);
            }
            '-' | '0'..='9' => {
                let start = i;
                while i < chars.len()
                    && matches!(chars[i], '0'..='9' | '-' | '+' | '.' | 'e' | 'E')
                {
                    i += 1;
                }
                out.push_str(NUMBER);
                out.extend(&chars[start..i]);
                out.push_str(RESET);
            }
            't' | 'f' | 'n' => {
                let rest: String = chars[i..].iter().take(5).collect();
                if let Some(literal) = ["true", "false", "null"]
                    .iter()
                    .find(|lit| rest.starts_with(**lit))
                {
                    out.push_str(LITERAL);
                    out.push_str(literal);
                    out.push_str(RESET);
                    i += literal.len();
                } else {
                    out.push(chars[i]);
                    i += 1;
                }
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keys_and_string_values_get_distinct_codes() {
        let out = highlight_json(r#"{"status": "shipped"}"#);
        assert_eq!(
            out,
            "{\u{1b}[36m\"status\"\u{1b}[0m: \u{1b}[32m\"shipped\"\u{1b}[0m}"
        );
    }

    #[test]
    fn numbers_and_literals_colored() {
        let out = highlight_json(r#"{"qty": 42, "done": true, "note": null}"#);
        assert!(out.contains("\u{1b}[33m42\u{1b}[0m"));
        assert!(out.contains("\u{1b}[35mtrue\u{1b}[0m"));
        assert!(out.contains("\u{1b}[35mnull\u{1b}[0m"));
    }

    #[test]
    fn escaped_quotes_stay_inside_strings() {
        let out = highlight_json(r#"{"msg": "say \"hi\""}"#);
        assert!(out.contains("\u{1b}[32m\"say \\\"hi\\\"\"\u{1b}[0m"));
    }

    #[test]
    fn multiline_pretty_json_keeps_structure() {
        let pretty = serde_json::to_string_pretty(&serde_json::json!({"a": 1})).unwrap();
        let out = highlight_json(&pretty);
        assert_eq!(out.lines().count(), pretty.lines().count());
    }
}
