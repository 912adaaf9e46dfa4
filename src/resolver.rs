use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;
use crate::models::VideoId;

/// Known URL shapes, tried in order. The first capture group is the id.
///
/// The host must be a YouTube domain (optionally behind a scheme and
/// subdomains) and the id must not run on into further id characters.
static URL_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        r"^(?:https?://)?(?:[A-Za-z0-9-]+\.)*(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/v/)([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
        r"^(?:https?://)?(?:[A-Za-z0-9-]+\.)*youtube\.com/watch\?(?:[^#]*&)?v=([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
        r"^(?:https?://)?(?:[A-Za-z0-9-]+\.)*youtu\.be/([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
    ]
    .map(|pattern| Regex::new(pattern).unwrap_or_else(|err| panic!("bad pattern {pattern}: {err}")))
});

/// Normalizes a watch/short/embed URL or a bare id into a [`VideoId`].
pub fn resolve(input: &str) -> Result<VideoId, Error> {
    let input = input.trim();

    if let Some(id) = VideoId::parse(input) {
        return Ok(id);
    }

    URL_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(input))
        .and_then(|captures| captures.get(1))
        .and_then(|m| VideoId::parse(m.as_str()))
        .ok_or_else(|| Error::InvalidReference(input.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("dQw4w9WgXcQ")]
    #[case("oO8w6XcXJUs")]
    #[case("a-b_c-d_e-f")]
    #[case("  dQw4w9WgXcQ\n")]
    fn test_bare_id_is_returned_unchanged(#[case] input: &str) {
        assert_eq!(resolve(input).unwrap().as_str(), input.trim());
    }

    #[rstest]
    #[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    #[case("https://youtube.com/watch?v=dQw4w9WgXcQ&t=42s")]
    #[case("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ")]
    #[case("https://youtu.be/dQw4w9WgXcQ?t=5")]
    #[case("youtu.be/dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/embed/dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/v/dQw4w9WgXcQ?version=3")]
    #[case("https://m.youtube.com/watch?v=dQw4w9WgXcQ")]
    #[case("http://www.youtube.com/watch?v=dQw4w9WgXcQ#comments")]
    fn test_url_shapes(#[case] input: &str) {
        assert_eq!(resolve(input).unwrap().as_str(), "dQw4w9WgXcQ");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("dQw4w9WgXc")]
    #[case("dQw4w9WgXcQQ")]
    #[case("https://vimeo.com/watch?v=dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/watch?v=short")]
    #[case("https://www.youtube.com/channel/UC38IQsAvIsxxjztdMZQtwHA")]
    #[case("https://notyoutube.com/watch?v=dQw4w9WgXcQ")]
    #[case("https://evil.example/?u=youtu.be/dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/watch?v=dQw4w9WgXcQQ")]
    #[case("https://youtu.be/dQw4w9WgXcQXYZ")]
    #[case("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQQ")]
    fn test_malformed_input_is_rejected(#[case] input: &str) {
        assert!(matches!(resolve(input), Err(Error::InvalidReference(_))));
    }
}
