use std::cmp::Ordering;
use std::fmt;
use std::slice;
use std::str::FromStr;

use itertools::Itertools;

use crate::parser::{complete_value, nom_parse_to_owned};

pub const DIVIDERS: [i64; 2] = [2, 6];

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Value {
    Integer(i64),
    List(Vec<Value>),
}

use Value::*;

impl Value {
    // Not `Ord`: `[1]` and `[[1]]` compare `Equal` here but are not `==`.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (List(left), List(right)) => compare_lists(left, right),
            (Integer(left), Integer(right)) => left.cmp(right),
            (List(left), right @ Integer(_)) => compare_lists(left, slice::from_ref(right)),
            (left @ Integer(_), List(right)) => compare_lists(slice::from_ref(left), right),
        }
    }
}

fn compare_lists(left: &[Value], right: &[Value]) -> Ordering {
    left.iter()
        .zip(right)
        .map(|(l, r)| l.compare(r))
        .find(|o| o.is_ne())
        .unwrap_or_else(|| left.len().cmp(&right.len()))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer(n) => write!(f, "{}", n),
            List(items) => write!(f, "[{}]", items.iter().format(",")),
        }
    }
}

impl FromStr for Value {
    type Err = nom::error::Error<String>;

    fn from_str(s: &str) -> Result<Value, Self::Err> {
        nom_parse_to_owned(complete_value, s.trim())
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Packet {
    pub data: Value,
}

impl Packet {
    pub fn divider(n: i64) -> Packet {
        Packet {
            data: List(vec![List(vec![Integer(n)])]),
        }
    }

    pub fn order(&self, other: &Packet) -> Ordering {
        self.data.compare(&other.data)
    }
}

impl From<Value> for Packet {
    fn from(data: Value) -> Packet {
        Packet { data }
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}
