use super::*;

/// How the discussion link is picked out of a story's metadata row.
///
/// The two rules agree on ordinary stories. They part ways on rows whose
/// only `item?id=` anchor is the age link, such as job postings:
/// `last-item-link` reports that link as the discussion page with zero
/// comments, while `comment-text` reports no discussion page at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub(crate) enum CommentLinkPolicy {
  /// Last anchor whose text mentions "comment" or is exactly "discuss".
  ///
  /// The submitter link comes earlier in the row, so a username containing
  /// "comment" never wins over the discussion link.
  #[default]
  CommentText,
  /// Last anchor in the row, kept only if it points at an item page.
  LastItemLink,
}

impl CommentLinkPolicy {
  pub(crate) fn select<'a>(
    self,
    subtext: ElementRef<'a>,
    anchor: &Selector,
  ) -> Option<ElementRef<'a>> {
    match self {
      Self::CommentText => subtext
        .select(anchor)
        .filter(|link| {
          let text = normalize_whitespace(&element_text(*link));
          text.contains("comment") || text == "discuss"
        })
        .last(),
      Self::LastItemLink => subtext.select(anchor).last().filter(|link| {
        link
          .value()
          .attr("href")
          .is_some_and(|href| href.starts_with(ITEM_PATH_PREFIX))
      }),
    }
  }
}
