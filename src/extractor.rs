use super::*;

/// Turns the HTML of a Hacker News listing page into story records.
///
/// Each story is a primary row (`tr.athing`) holding rank, title and link,
/// followed by a metadata row whose `td.subtext` cell holds score, submitter
/// and the discussion link. Any field missing from that markup falls back to
/// its zero value; only input that is not HTML at all is rejected.
pub(crate) struct Extractor {
  anchor: Selector,
  comment_link: CommentLinkPolicy,
  rank: Selector,
  row: Selector,
  score: Selector,
  subtext: Selector,
  title_link: Selector,
  user: Selector,
}

impl Extractor {
  const ANCHOR: &str = "a";
  const RANK: &str = "span.rank";
  const ROW: &str = "tr.athing";
  const SCORE: &str = "span.score";
  const SUBTEXT: &str = "td.subtext";
  const TITLE_LINK: &str = "span.titleline > a";
  const USER: &str = "a.hnuser";

  pub(crate) fn extract(
    &self,
    html: &str,
  ) -> Result<Vec<StoryRecord>, Error> {
    if html.trim().is_empty() {
      return Err(Error::MalformedInput {
        reason: "document is empty",
      });
    }

    if !html.contains('<') {
      return Err(Error::MalformedInput {
        reason: "document contains no markup",
      });
    }

    let document = Html::parse_document(&wrap_fragment(html));

    if !document.errors.is_empty() {
      debug!(
        count = document.errors.len(),
        "recovered from malformed markup"
      );
    }

    let records = document
      .select(&self.row)
      .map(|row| self.extract_record(row))
      .collect::<Vec<_>>();

    info!(stories = records.len(), "extracted front page");

    Ok(records)
  }

  fn extract_record(&self, row: ElementRef) -> StoryRecord {
    let rank = row
      .select(&self.rank)
      .next()
      .and_then(|rank| parse_rank(&element_text(rank)))
      .unwrap_or_default();

    let title_link = row.select(&self.title_link).next();

    let title = title_link
      .map(|link| element_text(link).trim().to_string())
      .unwrap_or_default();

    let url = title_link
      .and_then(|link| link.value().attr("href"))
      .unwrap_or_default()
      .to_string();

    let Some(subtext) = Self::metadata_row(row)
      .and_then(|metadata| metadata.select(&self.subtext).next())
    else {
      debug!(rank, "story has no metadata row");

      return StoryRecord {
        rank,
        title,
        url,
        ..StoryRecord::default()
      };
    };

    let points = subtext
      .select(&self.score)
      .next()
      .and_then(|score| parse_points(&element_text(score)))
      .unwrap_or_default();

    let user = subtext
      .select(&self.user)
      .next()
      .map(|user| element_text(user).trim().to_string())
      .unwrap_or_default();

    let (comments_url, comment_count) = self
      .comment_link
      .select(subtext, &self.anchor)
      .and_then(|link| {
        link.value().attr("href").map(|href| {
          (
            format!("{SITE_ORIGIN}{href}"),
            parse_comment_count(&element_text(link)).unwrap_or_default(),
          )
        })
      })
      .unwrap_or_default();

    StoryRecord {
      comment_count,
      comments_url,
      points,
      rank,
      title,
      url,
      user,
    }
  }

  /// The element right after a story row, unless that element starts the
  /// next story.
  fn metadata_row(row: ElementRef) -> Option<ElementRef> {
    row
      .next_siblings()
      .find_map(ElementRef::wrap)
      .filter(|sibling| {
        !sibling.value().classes().any(|class| class == "athing")
      })
  }

  pub(crate) fn new(comment_link: CommentLinkPolicy) -> Result<Self, Error> {
    Ok(Self {
      anchor: Self::selector(Self::ANCHOR)?,
      comment_link,
      rank: Self::selector(Self::RANK)?,
      row: Self::selector(Self::ROW)?,
      score: Self::selector(Self::SCORE)?,
      subtext: Self::selector(Self::SUBTEXT)?,
      title_link: Self::selector(Self::TITLE_LINK)?,
      user: Self::selector(Self::USER)?,
    })
  }

  fn selector(selector: &'static str) -> Result<Selector, Error> {
    Selector::parse(selector).map_err(|error| Error::Selector {
      message: error.to_string(),
      selector,
    })
  }
}
