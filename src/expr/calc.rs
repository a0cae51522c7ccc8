//! A deliberately small expression evaluator for `calc(...)` defaults.
//!
//! Supports integer literals, single- or double-quoted strings, `+ - * / %`,
//! unary minus, parentheses and `.` for string concatenation. Arithmetic
//! binds tighter than concatenation, so `"port " . 8000 + 80` is `port 8080`.
//! An optional leading `return` and trailing `;` are accepted.

use crate::error::{AuttajaError, Result};

/// Deepest nesting of parentheses and unary minus accepted.
const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Int(i64),
    Str(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Dot,
    LParen,
    RParen,
}

#[derive(Debug, Clone, PartialEq)]
enum CalcValue {
    Int(i64),
    Str(String),
}

impl CalcValue {
    fn into_string(self) -> String {
        match self {
            CalcValue::Int(i) => i.to_string(),
            CalcValue::Str(s) => s,
        }
    }

    fn as_int(&self, source: &str) -> Result<i64> {
        match self {
            CalcValue::Int(i) => Ok(*i),
            CalcValue::Str(s) => s.trim().parse().map_err(|_| {
                calc_error(source, &format!("\"{}\" is not a number", s))
            }),
        }
    }
}

fn calc_error(source: &str, reason: &str) -> AuttajaError {
    AuttajaError::ConfigError(format!("cannot evaluate calc({}): {}", source, reason))
}

/// Evaluate `source` and render the result as a string.
pub fn evaluate(source: &str) -> Result<String> {
    let body = strip_statement(source);
    let tokens = tokenize(body, source)?;
    if tokens.is_empty() {
        return Err(calc_error(source, "empty expression"));
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        source,
    };
    let value = parser.concat()?;
    if parser.pos != parser.tokens.len() {
        return Err(calc_error(source, "unexpected trailing input"));
    }
    Ok(value.into_string())
}

fn strip_statement(source: &str) -> &str {
    let mut body = source.trim();
    if let Some(rest) = body.strip_prefix("return")
        && rest.starts_with(char::is_whitespace)
    {
        body = rest.trim_start();
    }
    body.strip_suffix(';').unwrap_or(body).trim_end()
}

fn tokenize(body: &str, source: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = body.chars().peekable();

    while let Some(&ch) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '0'..='9' => {
                let mut digits = String::new();
                while let Some(&d) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    digits.push(d);
                    chars.next();
                }
                let mut lookahead = chars.clone();
                if lookahead.next() == Some('.')
                    && lookahead.next().is_some_and(|c| c.is_ascii_digit())
                {
                    return Err(calc_error(source, "only integer numbers are supported"));
                }
                let value = digits
                    .parse()
                    .map_err(|_| calc_error(source, "integer literal out of range"))?;
                tokens.push(Token::Int(value));
            }
            '"' | '\'' => {
                chars.next();
                let mut text = String::new();
                let mut closed = false;
                while let Some(c) = chars.next() {
                    if c == ch {
                        closed = true;
                        break;
                    }
                    if c == '\\'
                        && let Some(escaped) = chars.next()
                    {
                        text.push(escaped);
                        continue;
                    }
                    text.push(c);
                }
                if !closed {
                    return Err(calc_error(source, "unterminated string literal"));
                }
                tokens.push(Token::Str(text));
            }
            _ => {
                let token = match ch {
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '*' => Token::Star,
                    '/' => Token::Slash,
                    '%' => Token::Percent,
                    '.' => Token::Dot,
                    '(' => Token::LParen,
                    ')' => Token::RParen,
                    other => {
                        return Err(calc_error(
                            source,
                            &format!("unsupported character '{}'", other),
                        ));
                    }
                };
                chars.next();
                tokens.push(token);
            }
        }
    }

    Ok(tokens)
}

struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    source: &'a str,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn descend(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(calc_error(self.source, "expression is nested too deeply"));
        }
        Ok(())
    }

    fn concat(&mut self) -> Result<CalcValue> {
        let mut value = self.additive()?;
        while self.peek() == Some(&Token::Dot) {
            self.pos += 1;
            let rhs = self.additive()?;
            value = CalcValue::Str(value.into_string() + &rhs.into_string());
        }
        Ok(value)
    }

    fn additive(&mut self) -> Result<CalcValue> {
        let mut value = self.term()?;
        while let Some(op) = self.peek().cloned() {
            if op != Token::Plus && op != Token::Minus {
                break;
            }
            self.pos += 1;
            let rhs = self.term()?.as_int(self.source)?;
            let lhs = value.as_int(self.source)?;
            let result = if op == Token::Plus {
                lhs.checked_add(rhs)
            } else {
                lhs.checked_sub(rhs)
            };
            value = CalcValue::Int(result.ok_or_else(|| calc_error(self.source, "overflow"))?);
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<CalcValue> {
        let mut value = self.unary()?;
        while let Some(op) = self.peek().cloned() {
            if op != Token::Star && op != Token::Slash && op != Token::Percent {
                break;
            }
            self.pos += 1;
            let rhs = self.unary()?.as_int(self.source)?;
            let lhs = value.as_int(self.source)?;
            if op != Token::Star && rhs == 0 {
                return Err(calc_error(self.source, "division by zero"));
            }
            let result = match op {
                Token::Star => lhs.checked_mul(rhs),
                Token::Slash => lhs.checked_div(rhs),
                _ => lhs.checked_rem(rhs),
            };
            value = CalcValue::Int(result.ok_or_else(|| calc_error(self.source, "overflow"))?);
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<CalcValue> {
        if self.peek() == Some(&Token::Minus) {
            self.pos += 1;
            self.descend()?;
            let value = self.unary()?.as_int(self.source)?;
            self.depth -= 1;
            return value
                .checked_neg()
                .map(CalcValue::Int)
                .ok_or_else(|| calc_error(self.source, "overflow"));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<CalcValue> {
        match self.next() {
            Some(Token::Int(i)) => Ok(CalcValue::Int(i)),
            Some(Token::Str(s)) => Ok(CalcValue::Str(s)),
            Some(Token::LParen) => {
                self.descend()?;
                let value = self.concat()?;
                if self.next() != Some(Token::RParen) {
                    return Err(calc_error(self.source, "expected ')'"));
                }
                self.depth -= 1;
                Ok(value)
            }
            Some(token) => Err(calc_error(
                self.source,
                &format!("unexpected token {:?}", token),
            )),
            None => Err(calc_error(self.source, "unexpected end of expression")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_arithmetic_with_precedence() {
        assert_eq!(evaluate("1 + 2 * 3").unwrap(), "7");
        assert_eq!(evaluate("(1 + 2) * 3").unwrap(), "9");
        assert_eq!(evaluate("-4 + 10 % 3").unwrap(), "-3");
        assert_eq!(evaluate("7 / 2").unwrap(), "3");
    }

    #[test]
    fn concatenates_strings_and_numbers() {
        assert_eq!(evaluate("'db_' . 'test'").unwrap(), "db_test");
        assert_eq!(evaluate("\"port \" . 8000 + 80").unwrap(), "port 8080");
    }

    #[test]
    fn accepts_return_statement_form() {
        assert_eq!(evaluate("return 40 + 2;").unwrap(), "42");
        assert_eq!(evaluate("return \"abc\";").unwrap(), "abc");
    }

    #[test]
    fn numeric_strings_take_part_in_arithmetic() {
        assert_eq!(evaluate("'40' + 2").unwrap(), "42");
    }

    #[test]
    fn rejects_code_like_input() {
        let err = evaluate("system('rm -rf /')").unwrap_err();
        assert!(matches!(err, AuttajaError::ConfigError(_)));
    }

    #[test]
    fn rejects_division_by_zero() {
        let err = evaluate("1 / 0").unwrap_err();
        assert!(err.to_string().contains("division by zero"));
        assert!(evaluate("1 % 0").is_err());
    }

    #[test]
    fn rejects_malformed_expressions() {
        assert!(evaluate("").is_err());
        assert!(evaluate("1 +").is_err());
        assert!(evaluate("(1 + 2").is_err());
        assert!(evaluate("1 2").is_err());
        assert!(evaluate("'open").is_err());
        assert!(evaluate("1.5").is_err());
        assert!(evaluate("'a' * 2").is_err());
    }

    #[test]
    fn rejects_excessive_nesting() {
        let minus = format!("{}1", "-".repeat(100_000));
        let err = evaluate(&minus).unwrap_err();
        assert!(err.to_string().contains("nested too deeply"));

        let parens = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        assert!(evaluate(&parens).is_err());

        let moderate = format!("{}1{}", "(".repeat(20), ")".repeat(20));
        assert_eq!(evaluate(&format!("--{}", moderate)).unwrap(), "1");
    }

    #[test]
    fn reports_overflow() {
        let err = evaluate("9223372036854775807 + 1").unwrap_err();
        assert!(err.to_string().contains("overflow"));
    }
}
