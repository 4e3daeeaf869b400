use super::*;

pub(crate) fn element_text(element: ElementRef) -> String {
  element.text().collect()
}

/// Collapses runs of whitespace, including the `&nbsp;` Hacker News puts
/// between a count and its label, into single spaces.
pub(crate) fn normalize_whitespace(text: &str) -> String {
  text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn parse_comment_count(text: &str) -> Option<u64> {
  let text = normalize_whitespace(text);

  if text == "discuss" {
    return Some(0);
  }

  strip_label(&text, &[" comments", " comment"]).parse().ok()
}

pub(crate) fn parse_points(text: &str) -> Option<u64> {
  strip_label(&normalize_whitespace(text), &[" points", " point"])
    .parse()
    .ok()
}

pub(crate) fn parse_rank(text: &str) -> Option<u64> {
  let text = text.trim();

  text.strip_suffix('.').unwrap_or(text).parse().ok()
}

fn strip_label<'a>(text: &'a str, labels: &[&str]) -> &'a str {
  labels
    .iter()
    .find_map(|label| text.strip_suffix(label))
    .unwrap_or(text)
}

/// HTML tree construction drops `<tr>` and `<td>` tags found outside a
/// table, so bare story rows are wrapped in one before parsing.
pub(crate) fn wrap_fragment(html: &str) -> Cow<'_, str> {
  if html.to_ascii_lowercase().contains("<table") {
    Cow::Borrowed(html)
  } else {
    Cow::Owned(format!("<table>{html}</table>"))
  }
}
