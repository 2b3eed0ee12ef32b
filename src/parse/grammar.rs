use winnow::combinator::{alt, cut_err, delimited, opt, preceded, repeat};
use winnow::error::{ErrMode, ModalResult};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use crate::types::{BoolExpr, RefToken};

use super::parser::ParsedRule;

// -- Reference tokens -------------------------------------------------------

/// One positional reference: one or more digits, then at most one
/// uppercase letter. Digits are the one-based position; the letter maps
/// A -> 0, B -> 1, ... Positions are 1-based in rule text, so a digit run
/// of `0` (or one that overflows the index type) references nothing and
/// fails the parse.
fn reference(input: &mut &str) -> ModalResult<RefToken> {
    let digits = take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    let letter = opt(one_of('A'..='Z')).parse_next(input)?;
    let position = digits
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| ErrMode::from_input(input).cut())?;
    let choice = letter.map(|l| l as usize - 'A' as usize);
    Ok(RefToken::new(position, choice))
}

/// Literal operator text between references: any run of non-digit
/// characters. Validated against the operator whitelist separately.
fn segment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(0.., |c: char| !c.is_ascii_digit()).parse_next(input)
}

/// Split a rule into interleaved segments and references. At least one
/// reference is required; an expression must name a position.
pub(crate) fn template(input: &mut &str) -> ModalResult<ParsedRule> {
    let head = segment.parse_next(input)?;
    let pairs: Vec<(RefToken, &str)> = repeat(1.., (reference, segment)).parse_next(input)?;

    let mut tokens = Vec::with_capacity(pairs.len());
    let mut segments = Vec::with_capacity(pairs.len() + 1);
    segments.push(head.to_owned());
    for (token, seg) in pairs {
        tokens.push(token);
        segments.push(seg.to_owned());
    }
    Ok(ParsedRule { tokens, segments })
}

// -- Boolean reduction (precedence: | < & < ! < primary) --------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

fn literal(input: &mut &str) -> ModalResult<BoolExpr> {
    alt((
        "true".value(BoolExpr::Literal(true)),
        "false".value(BoolExpr::Literal(false)),
    ))
    .parse_next(input)
}

fn primary(input: &mut &str) -> ModalResult<BoolExpr> {
    ws.parse_next(input)?;
    alt((delimited('(', bool_expr, (ws, ')')), literal)).parse_next(input)
}

fn unary(input: &mut &str) -> ModalResult<BoolExpr> {
    ws.parse_next(input)?;
    if opt('!').parse_next(input)?.is_some() {
        let inner = cut_err(unary).parse_next(input)?;
        Ok(BoolExpr::Not(Box::new(inner)))
    } else {
        primary(input)
    }
}

fn and_expr(input: &mut &str) -> ModalResult<BoolExpr> {
    let first = unary(input)?;
    let rest: Vec<BoolExpr> =
        repeat(0.., preceded((ws, '&'), cut_err(unary))).parse_next(input)?;
    Ok(rest
        .into_iter()
        .fold(first, |acc, r| BoolExpr::And(Box::new(acc), Box::new(r))))
}

fn or_expr(input: &mut &str) -> ModalResult<BoolExpr> {
    let first = and_expr(input)?;
    let rest: Vec<BoolExpr> =
        repeat(0.., preceded((ws, '|'), cut_err(and_expr))).parse_next(input)?;
    Ok(rest
        .into_iter()
        .fold(first, |acc, r| BoolExpr::Or(Box::new(acc), Box::new(r))))
}

/// Parse a fully substituted expression (only parentheses, `|`, `&`, `!`,
/// whitespace, and the literals `true`/`false`) into a [`BoolExpr`].
pub(crate) fn bool_expr(input: &mut &str) -> ModalResult<BoolExpr> {
    let expr = or_expr.parse_next(input)?;
    ws.parse_next(input)?;
    Ok(expr)
}
