//! Domain model for the Notion blocks this service reads.

mod block;
pub mod blocks;
pub mod common;

pub use block::{Block, BlockVisitor};
pub use blocks::*;
pub use common::*;
