use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, line_ending, space0};
use nom::combinator::{all_consuming, eof, map_res, opt, recognize};
use nom::multi::{many0, many1, separated_list0, separated_list1};
use nom::sequence::{delimited, pair, preceded, separated_pair, terminated, tuple};
use nom::{Finish, IResult, Parser};

use crate::packet::{Packet, Value};

pub fn base10_numeric<N>(input: &str) -> IResult<&str, N>
where
    N: FromStr,
{
    map_res(recognize(pair(opt(char('-')), digit1)), N::from_str).parse(input)
}

pub fn nom_error_to_owned<I>(e: nom::error::Error<&I>) -> nom::error::Error<I::Owned>
where
    I: ToOwned + ?Sized,
    I::Owned: 'static,
{
    let nom::error::Error { input, code } = e;
    nom::error::Error {
        input: input.to_owned(),
        code,
    }
}

// Lifetime hacks to make the `?` operator usable with nom results.
pub fn nom_parse_to_owned<I, O, P>(
    mut parser: P,
    input: &I,
) -> Result<O, nom::error::Error<I::Owned>>
where
    I: ToOwned + ?Sized,
    I::Owned: 'static,
    P: for<'i> Parser<&'i I, O, nom::error::Error<&'i I>>,
{
    match parser.parse(input).finish() {
        Ok((_i, o)) => Ok(o),
        Err(e) => Err(nom_error_to_owned(e)),
    }
}

pub fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

pub fn value(input: &str) -> IResult<&str, Value> {
    alt((
        delimited(
            pair(tag("["), space0),
            separated_list0(tuple((space0, tag(","), space0)), value),
            pair(space0, tag("]")),
        )
        .map(Value::List),
        base10_numeric.map(Value::Integer),
    ))
    .parse(input)
}

pub(crate) fn complete_value(input: &str) -> IResult<&str, Value> {
    all_consuming(value).parse(input)
}

fn packet(input: &str) -> IResult<&str, Packet> {
    value.map(Packet::from).parse(input)
}

fn packet_pair(input: &str) -> IResult<&str, (Packet, Packet)> {
    separated_pair(packet, line_ending, packet).parse(input)
}

// An unpaired packet on the last line is accepted and dropped.
pub fn parse_pairs(input: &str) -> IResult<&str, Vec<(Packet, Packet)>> {
    preceded(
        many0(line_ending),
        terminated(
            separated_list0(many1(line_ending), packet_pair),
            tuple((many0(line_ending), opt(packet), many0(line_ending), eof)),
        ),
    )
    .parse(input)
}

pub fn parse_packets(input: &str) -> IResult<&str, Vec<Packet>> {
    preceded(
        many0(line_ending),
        terminated(
            separated_list1(many1(line_ending), packet),
            tuple((many0(line_ending), eof)),
        ),
    )
    .parse(input)
}
