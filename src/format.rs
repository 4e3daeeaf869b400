use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub(crate) enum Format {
  /// Pretty-printed JSON array
  Json,
  /// One block per story followed by a summary line
  #[default]
  Text,
}

impl Format {
  pub(crate) fn render(
    self,
    records: &[StoryRecord],
    writer: &mut impl Write,
  ) -> Result {
    match self {
      Self::Json => {
        serde_json::to_writer_pretty(&mut *writer, records)?;
        writeln!(writer)?;
      }
      Self::Text => {
        for record in records {
          writeln!(writer, "#{}: {}", record.rank, record.title)?;
          writeln!(writer, "URL: {}", record.url)?;
          writeln!(
            writer,
            "Comments URL: {}",
            record.discussion_url().unwrap_or("N/A")
          )?;
          writeln!(writer)?;
          writeln!(
            writer,
            "Points: {} | User: {} | Comments: {}",
            record.points, record.user, record.comment_count
          )?;
          writeln!(writer)?;
        }

        writeln!(
          writer,
          "Successfully scraped {} items from Hacker News",
          records.len()
        )?;
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn render(format: Format, records: &[StoryRecord]) -> String {
    let mut output = Vec::new();
    format.render(records, &mut output).unwrap();
    String::from_utf8(output).unwrap()
  }

  fn sample_records() -> Vec<StoryRecord> {
    vec![
      StoryRecord {
        comment_count: 5,
        comments_url: "https://news.ycombinator.com/item?id=1".into(),
        points: 42,
        rank: 1,
        title: "Foo".into(),
        url: "http://example.com".into(),
        user: "bob".into(),
      },
      StoryRecord {
        rank: 2,
        title: "Acme is hiring".into(),
        url: "https://acme.example/jobs".into(),
        ..StoryRecord::default()
      },
    ]
  }

  #[test]
  fn text_lists_each_story_then_a_summary() {
    assert_eq!(
      render(Format::Text, &sample_records()),
      "\
#1: Foo
URL: http://example.com
Comments URL: https://news.ycombinator.com/item?id=1

Points: 42 | User: bob | Comments: 5

#2: Acme is hiring
URL: https://acme.example/jobs
Comments URL: N/A

Points: 0 | User:  | Comments: 0

Successfully scraped 2 items from Hacker News
"
    );
  }

  #[test]
  fn text_reports_zero_items_for_empty_page() {
    assert_eq!(
      render(Format::Text, &[]),
      "Successfully scraped 0 items from Hacker News\n"
    );
  }

  #[test]
  fn json_renders_an_array_of_records() {
    let value =
      serde_json::from_str::<serde_json::Value>(&render(
        Format::Json,
        &sample_records(),
      ))
      .unwrap();

    let stories = value.as_array().unwrap();

    assert_eq!(stories.len(), 2);
    assert_eq!(stories[0]["user"], "bob");
    assert_eq!(stories[1]["comments_url"], "");
  }
}
