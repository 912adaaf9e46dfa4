use anyhow::Result;

use crate::models::VideoId;
use crate::resolver;

pub fn run(input: &str) -> Result<VideoId> {
    Ok(resolver::resolve(input)?)
}
