#![allow(clippy::needless_pass_by_value)]

pub mod analyze;
pub mod resolve;
pub mod score;
