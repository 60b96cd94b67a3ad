//! Host shell line splitting
//!
//! Mirrors what the game's shell hands to console commands: the line is
//! split on whitespace, double-quoted sections are grouped and their
//! quotes stripped, and single quotes are left for the quote resolver.

use nom::branch::alt;
use nom::bytes::complete::{take_till, take_till1};
use nom::character::complete::{char, multispace0};
use nom::combinator::rest;
use nom::multi::{many0, many1};
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};

/// `"..."` with the quotes removed
fn closed_quote(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_till(|c: char| c == '"'), char('"')).parse(input)
}

/// A double quote that is never closed runs to the end of the line
fn open_quote(input: &str) -> IResult<&str, &str> {
    preceded(char('"'), rest).parse(input)
}

fn bare(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace() || c == '"').parse(input)
}

/// One whitespace-separated token, possibly made of several quoted parts
fn token(input: &str) -> IResult<&str, String> {
    many1(alt((closed_quote, bare, open_quote)))
        .map(|parts: Vec<&str>| parts.concat())
        .parse(input)
}

/// Split a console line the way the host shell does
pub fn split_host_line(line: &str) -> Vec<String> {
    match many0(preceded(multispace0, token)).parse(line) {
        Ok((_, tokens)) => tokens,
        Err(_) => line.split_whitespace().map(str::to_string).collect(),
    }
}
