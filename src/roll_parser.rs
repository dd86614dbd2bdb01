use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{char, digit1, multispace0, multispace1},
    combinator::{all_consuming, map_res, value},
    multi::separated_list1,
    sequence::{delimited, preceded},
};

use crate::rules::scoring::NUM_DICE;

/// Parses five face values such as `"1 2 3 4 5"` or `"6,6, 2,3,1"`.
///
/// Only the shape is checked here; faces outside 1..=6 are left for
/// [`RollScorer::from_faces`](crate::rules::scoring::RollScorer::from_faces) to reject.
pub fn parse_faces(input: &str) -> anyhow::Result<[u32; NUM_DICE]> {
    let res = all_consuming(delimited(multispace0, faces, multispace0)).parse(input);

    let faces = match res {
        Ok((_, faces)) => faces,
        Err(_) => anyhow::bail!("Failed to parse dice faces from {:?}", input),
    };

    match <[u32; NUM_DICE]>::try_from(faces) {
        Ok(faces) => Ok(faces),
        Err(faces) => anyhow::bail!("Expected {} dice, found {}", NUM_DICE, faces.len()),
    }
}

fn faces(input: &str) -> IResult<&str, Vec<u32>> {
    separated_list1(separator, face).parse(input)
}

fn face(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |s: &str| s.parse::<u32>()).parse(input)
}

fn separator(input: &str) -> IResult<&str, ()> {
    alt((
        value((), preceded(multispace0, preceded(char(','), multispace0))),
        value((), multispace1),
    ))
    .parse(input)
}
