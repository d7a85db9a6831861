//! Token reassembly and the arithmetic evaluator.
//!
//! The evaluator deliberately supports only three expression shapes: a lone
//! value, a two-token power, and a single binary operation. Anything else is
//! `Unresolved`. Extending the grammar means adding an explicit case to the
//! dispatch below, never loosening the fallback.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::SolveError;
use crate::models::Solution;

/// Matches any character that is not a decimal digit or decimal point.
fn separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^.0-9]").unwrap())
}

/// Splits `joined` on every separator character, keeping each separator as
/// its own token. Empty segments between adjacent separators (and at the
/// string ends) are kept, so malformed input surfaces later as an
/// `InvalidToken` instead of being silently repaired.
fn split_keeping_separators(joined: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for sep in separator_re().find_iter(joined) {
        tokens.push(joined[last..sep.start()].to_string());
        tokens.push(sep.as_str().to_string());
        last = sep.end();
    }
    tokens.push(joined[last..].to_string());

    tokens
}

/// Rebuilds an evaluator-ready token list from per-glyph tokens.
///
/// Sequences of up to 3 tokens already match a supported shape and pass
/// through unchanged. Longer sequences are assumed to be over-segmented
/// multi-digit numbers with operators in between: the tokens are joined and
/// re-split on operator boundaries, merging adjacent digits.
pub fn reassemble(tokens: Vec<String>) -> Vec<String> {
    if tokens.len() <= 3 {
        return tokens;
    }

    let joined: String = tokens.concat();
    split_keeping_separators(&joined)
}

fn parse_number(token: &str) -> Result<f64, SolveError> {
    token
        .parse::<f64>()
        .map_err(|_| SolveError::InvalidToken { token: token.to_string() })
}

/// Evaluates a reconstructed token list.
///
/// Pure dispatch on token count: one token is a value, two tokens are a
/// power, three tokens are a binary operation on the middle token. Every
/// other shape (including three tokens with an unrecognized middle) is
/// `Unresolved`.
pub fn solve(tokens: &[String]) -> Result<Solution, SolveError> {
    match tokens {
        [a] => Ok(Solution::Value(parse_number(a)?)),
        [a, b] => {
            let base = parse_number(a)?;
            let exponent = parse_number(b)?;
            Ok(Solution::Value(base.powf(exponent)))
        }
        [a, op, b] => {
            let op = op.as_str();
            if !matches!(op, "*" | "/" | "+" | "-") {
                return Ok(Solution::Unresolved);
            }

            let lhs = parse_number(a)?;
            let rhs = parse_number(b)?;
            let value = match op {
                "*" => lhs * rhs,
                "/" => {
                    if rhs == 0.0 {
                        return Err(SolveError::DivisionByZero);
                    }
                    lhs / rhs
                }
                "+" => lhs + rhs,
                "-" => lhs - rhs,
                _ => unreachable!(),
            };
            Ok(Solution::Value(value))
        }
        _ => Ok(Solution::Unresolved),
    }
}
