use std::cmp::Ordering;

use itertools::Itertools;
use tracing::debug;

use crate::error::{Error, Result};
use crate::packet::{Packet, DIVIDERS};
use crate::parser::{nom_parse_to_owned, parse_packets, parse_pairs};

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct Answers {
    pub part_one: usize,
    pub part_two: usize,
}

pub fn ordered_pair_sum(pairs: &[(Packet, Packet)]) -> usize {
    pairs
        .iter()
        .enumerate()
        .filter(|(_, (left, right))| left.order(right) == Ordering::Less)
        .map(|(i, _)| i + 1)
        .sum()
}

pub fn divider_product(mut packets: Vec<Packet>) -> Result<usize> {
    let dividers = DIVIDERS.map(Packet::divider);

    packets.extend(dividers.iter().cloned());
    packets.sort_by(Packet::order);

    let positions = packets
        .iter()
        .positions(|p| dividers.contains(p))
        .map(|i| i + 1)
        .collect_vec();
    debug!(?positions, "located divider packets");

    for divider in &dividers {
        if !packets.iter().any(|p| p == divider) {
            return Err(Error::MissingDivider(divider.data.clone()));
        }
    }

    positions
        .into_iter()
        .try_fold(1usize, usize::checked_mul)
        .ok_or(Error::Overflow)
}

// Both parses must succeed before either part is computed.
pub fn solve(input: &str) -> Result<Answers> {
    let pairs = nom_parse_to_owned(parse_pairs, input)?;
    let packets = nom_parse_to_owned(parse_packets, input)?;
    debug!(pairs = pairs.len(), packets = packets.len(), "parsed input");

    let part_one = ordered_pair_sum(&pairs);
    let part_two = divider_product(packets)?;

    Ok(Answers { part_one, part_two })
}
