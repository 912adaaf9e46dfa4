use crate::error::Error;
use crate::models::{Comment, FetchRequest, VideoId};

/// Largest page the listing endpoint will serve in one call.
pub const MAX_PAGE_SIZE: u32 = 100;

/// One page of a comment listing.
#[derive(Debug, Clone, Default)]
pub struct CommentPage {
    pub comments: Vec<Comment>,
    /// Opaque continuation token; `None` when no further pages exist.
    pub next_page_token: Option<String>,
}

/// A paginated source of top-level comments, ordered by relevance.
pub trait CommentSource {
    fn fetch_page(
        &self,
        video_id: &VideoId,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<CommentPage, Error>;
}

/// Walks the listing until `request.max_comments()` comments are collected
/// or the source runs out of pages. Items keep the order they arrive in.
///
/// Any page failure aborts the whole fetch; no partial list is returned.
pub fn fetch_comments<S>(source: &S, request: &FetchRequest) -> Result<Vec<Comment>, Error>
where
    S: CommentSource + ?Sized,
{
    let max = request.max_comments() as usize;
    let mut comments: Vec<Comment> = Vec::with_capacity(max);
    let mut page_token: Option<String> = None;

    log::info!(
        "Fetching up to {max} comments for video {}",
        request.video_id()
    );

    loop {
        let remaining = max - comments.len();
        let page_size = u32::try_from(remaining)
            .unwrap_or(MAX_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);

        let page = source.fetch_page(request.video_id(), page_size, page_token.as_deref())?;
        let received = page.comments.len();
        comments.extend(page.comments.into_iter().take(remaining));
        log::debug!("Received {received} comments, {} collected", comments.len());

        if comments.len() >= max {
            log::debug!("Reached requested maximum of {max} comments");
            break;
        }

        match page.next_page_token {
            Some(token) if received > 0 => page_token = Some(token),
            Some(_) => {
                log::warn!("Listing returned an empty page with a continuation token; stopping");
                break;
            }
            None => {
                log::debug!("No further pages");
                break;
            }
        }
    }

    Ok(comments)
}
