use crate::utils::error::{PageError, Result};
use std::str::FromStr;

/// Parsed form of the selector subset the behaviors use: an optional tag
/// name followed by any number of `#id`, `.class`, `[attr]` and
/// `[attr="value"]` parts. Combinators (descendant, child, sibling) are
/// not supported; all parts must hold on the same element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<AttrFilter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttrFilter {
    pub name: String,
    /// `None` matches mere presence of the attribute.
    pub value: Option<String>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(parse_error(input, "selector is empty"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(parse_error(input, "combinators are not supported"));
        }

        let chars: Vec<char> = trimmed.chars().collect();
        let mut sel = Selector::default();
        let mut i = 0;

        if i < chars.len() && is_ident_char(chars[i]) {
            sel.tag = Some(take_ident(&chars, &mut i));
        }

        while i < chars.len() {
            match chars[i] {
                '#' => {
                    i += 1;
                    let id = take_ident(&chars, &mut i);
                    if id.is_empty() {
                        return Err(parse_error(input, "'#' must be followed by an identifier"));
                    }
                    sel.id = Some(id);
                }
                '.' => {
                    i += 1;
                    let class = take_ident(&chars, &mut i);
                    if class.is_empty() {
                        return Err(parse_error(input, "'.' must be followed by a class name"));
                    }
                    sel.classes.push(class);
                }
                '[' => {
                    i += 1;
                    let filter = take_attr_filter(input, &chars, &mut i)?;
                    sel.attrs.push(filter);
                }
                other => {
                    return Err(parse_error(
                        input,
                        format!("unexpected character '{other}'"),
                    ));
                }
            }
        }

        Ok(sel)
    }
}

impl FromStr for Selector {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self> {
        Selector::parse(s)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &[char], i: &mut usize) -> String {
    let start = *i;
    while *i < chars.len() && is_ident_char(chars[*i]) {
        *i += 1;
    }
    chars[start..*i].iter().collect()
}

fn take_attr_filter(input: &str, chars: &[char], i: &mut usize) -> Result<AttrFilter> {
    let name = take_ident(chars, i);
    if name.is_empty() {
        return Err(parse_error(input, "'[' must be followed by an attribute name"));
    }

    match chars.get(*i) {
        Some(&']') => {
            *i += 1;
            Ok(AttrFilter { name, value: None })
        }
        Some(&'=') => {
            *i += 1;
            let quote = match chars.get(*i).copied() {
                Some(q) if q == '"' || q == '\'' => {
                    *i += 1;
                    Some(q)
                }
                _ => None,
            };
            let start = *i;
            let terminator = quote.unwrap_or(']');
            while *i < chars.len() && chars[*i] != terminator {
                *i += 1;
            }
            if *i == chars.len() {
                return Err(parse_error(input, "unterminated attribute value"));
            }
            let value: String = chars[start..*i].iter().collect();
            *i += 1;
            if quote.is_some() {
                if chars.get(*i) != Some(&']') {
                    return Err(parse_error(input, "expected ']' after attribute value"));
                }
                *i += 1;
            }
            Ok(AttrFilter {
                name,
                value: Some(value),
            })
        }
        _ => Err(parse_error(input, "expected ']' or '=' in attribute filter")),
    }
}

fn parse_error(input: &str, message: impl Into<String>) -> PageError {
    PageError::SelectorError {
        selector: input.to_string(),
        message: message.into(),
    }
}
