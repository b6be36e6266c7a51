//! Formula body tokenizer.
//!
//! A body is first reduced to the permitted character set (ASCII letters and
//! digits, `+ - * / . ( )` and `=`); everything else is dropped. The remaining
//! text is split into numbers, operators, parentheses and reference tokens.
//! An uppercase letter directly followed by a digit is always a reference,
//! even inside a longer run such as `AB12` (which reads as `A`, `B1`, `2`).
//! Any other letter is an unknown symbol and fails the formula.

use super::cell_ref::{CellRef, GridShape, decode};
use super::error::FormulaError;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Ref(CellRef),
    Op(char),
    LParen,
    RParen,
}

fn is_permitted(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '*' | '/' | '.' | '(' | ')' | '=')
}

/// Drop every character that may not appear in a formula body.
pub fn sanitize(body: &str) -> String {
    body.chars().filter(|&c| is_permitted(c)).collect()
}

/// Sanitize and tokenize a formula body, decoding references against `shape`.
pub fn tokenize(body: &str, shape: GridShape) -> Result<Vec<Token>, FormulaError> {
    let chars: Vec<char> = sanitize(body).chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        match c {
            'A'..='Z' if next.is_some_and(|d| d.is_ascii_digit()) => {
                let token: String = chars[i..i + 2].iter().collect();
                tokens.push(Token::Ref(decode(&token, shape)?));
                i += 2;
            }
            c if c.is_ascii_alphabetic() => {
                let end = symbol_end(&chars, i);
                return Err(FormulaError::UnknownSymbol(chars[i..end].iter().collect()));
            }
            c if c.is_ascii_digit() || c == '.' => {
                let end = number_end(&chars, i);
                let text: String = chars[i..end].iter().collect();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| FormulaError::MalformedNumber(text.clone()))?;
                tokens.push(Token::Number(value));
                i = end;
            }
            '+' | '-' | '*' | '/' => {
                tokens.push(Token::Op(c));
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            other => return Err(FormulaError::UnexpectedToken(other)),
        }
    }

    if tokens.is_empty() {
        return Err(FormulaError::Empty);
    }
    Ok(tokens)
}

/// End of a run of letters, stopping before the next reference token.
fn symbol_end(chars: &[char], start: usize) -> usize {
    let mut end = start + 1;
    while end < chars.len() && chars[end].is_ascii_alphabetic() {
        let starts_ref = chars[end].is_ascii_uppercase()
            && chars.get(end + 1).is_some_and(|d| d.is_ascii_digit());
        if starts_ref {
            break;
        }
        end += 1;
    }
    end
}

/// End of a numeric literal: digits, an optional fraction and an optional
/// lowercase exponent. A second `.` is swallowed so the literal fails to parse.
fn number_end(chars: &[char], start: usize) -> usize {
    let digits_from = |mut i: usize| {
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = digits_from(start);
    while chars.get(end) == Some(&'.') {
        end = digits_from(end + 1);
    }
    if chars.get(end) == Some(&'e') {
        let sign = usize::from(matches!(chars.get(end + 1), Some('+' | '-')));
        if chars.get(end + 1 + sign).is_some_and(|d| d.is_ascii_digit()) {
            end = digits_from(end + 1 + sign);
        }
    }
    end
}
