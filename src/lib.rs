pub mod config;
pub mod error;
pub mod logger;
pub mod packet;
pub mod parser;
pub mod ranking;

pub use error::{Error, Result};
pub use packet::{Packet, Value};
pub use ranking::{divider_product, ordered_pair_sum, solve, Answers};
