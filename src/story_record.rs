use super::*;

/// One story from the front page, in the order the page lists it.
///
/// Fields that cannot be read from the markup hold their zero value, so job
/// postings come through with no points, no user and no discussion link.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub(crate) struct StoryRecord {
  pub(crate) comment_count: u64,
  pub(crate) comments_url: String,
  pub(crate) points: u64,
  pub(crate) rank: u64,
  pub(crate) title: String,
  pub(crate) url: String,
  pub(crate) user: String,
}

impl StoryRecord {
  pub(crate) fn discussion_url(&self) -> Option<&str> {
    Some(self.comments_url.as_str()).filter(|url| !url.is_empty())
  }
}
