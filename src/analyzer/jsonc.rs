//! JSON-with-comments sanitizer
//!
//! Project files follow the tsconfig dialect: `//` and `/* */` comments and
//! trailing commas are accepted. This module rewrites such text into strict
//! JSON so it can go through `serde_json`. String literals are left intact.

use serde::de::DeserializeOwned;

use crate::types::Result;

/// Parse tsconfig-dialect JSON into `T`.
pub fn from_str<T: DeserializeOwned>(text: &str) -> Result<T> {
    let strict = fix_trailing_commas(&strip_comments(text));
    Ok(serde_json::from_str(&strict)?)
}

/// Remove `//` line comments and `/* */` block comments outside strings.
///
/// Line comments keep their terminating newline so error positions reported
/// by `serde_json` stay on the right line.
pub fn strip_comments(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let chars: Vec<char> = s.chars().collect();

    let mut i = 0;
    let mut in_string = false;
    while i < chars.len() {
        let ch = chars[i];

        if in_string {
            result.push(ch);
            if ch == '\\' && i + 1 < chars.len() {
                result.push(chars[i + 1]);
                i += 2;
                continue;
            }
            if ch == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        match (ch, chars.get(i + 1)) {
            ('"', _) => {
                in_string = true;
                result.push(ch);
                i += 1;
            }
            ('/', Some('/')) => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            ('/', Some('*')) => {
                i += 2;
                while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                    if chars[i] == '\n' {
                        result.push('\n');
                    }
                    i += 1;
                }
                i += 2;
            }
            _ => {
                result.push(ch);
                i += 1;
            }
        }
    }

    result
}

/// Drop commas that directly precede `]` or `}` (whitespace allowed between).
pub fn fix_trailing_commas(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let chars: Vec<char> = s.chars().collect();

    let mut i = 0;
    let mut in_string = false;
    while i < chars.len() {
        let ch = chars[i];

        if in_string {
            if ch == '\\' && i + 1 < chars.len() {
                result.push(ch);
                result.push(chars[i + 1]);
                i += 2;
                continue;
            }
            if ch == '"' {
                in_string = false;
            }
        } else if ch == '"' {
            in_string = true;
        } else if ch == ',' {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }

            if j < chars.len() && (chars[j] == ']' || chars[j] == '}') {
                i += 1;
                continue;
            }
        }

        result.push(ch);
        i += 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_strip_line_and_block_comments() {
        let input = "{\n  // line\n  \"a\": 1, /* block */ \"b\": 2\n}";
        let value: Value = from_str(input).unwrap();
        assert_eq!(value["a"], 1);
        assert_eq!(value["b"], 2);
    }

    #[test]
    fn test_comment_markers_inside_strings_survive() {
        let input = r#"{ "include": ["src/**/*.ts", "http://x//y", "/* not */"] }"#;
        let value: Value = from_str(input).unwrap();
        assert_eq!(value["include"][1], "http://x//y");
        assert_eq!(value["include"][2], "/* not */");
    }

    #[test]
    fn test_trailing_commas() {
        let input = "{ \"include\": [\"a\", \"b\",\n ], }";
        let value: Value = from_str(input).unwrap();
        assert_eq!(value["include"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_comma_inside_string_kept() {
        assert_eq!(fix_trailing_commas(r#"["a,]"]"#), r#"["a,]"]"#);
    }

    #[test]
    fn test_escaped_quote_in_string() {
        let input = r#"{ "a": "say \"hi\" // not a comment" }"#;
        let value: Value = from_str(input).unwrap();
        assert_eq!(value["a"], "say \"hi\" // not a comment");
    }

    #[test]
    fn test_invalid_json_errors() {
        assert!(from_str::<Value>("{ include: [] }").is_err());
    }
}
