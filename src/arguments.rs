use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "hn-scrape",
  version,
  about = "Scrape the stories on the Hacker News front page"
)]
pub(crate) struct Arguments {
  /// Rule used to find each story's discussion link
  #[arg(
    long,
    env = "HN_SCRAPE_COMMENT_LINK",
    value_enum,
    default_value_t = CommentLinkPolicy::CommentText
  )]
  pub(crate) comment_link: CommentLinkPolicy,
  /// Output format
  #[arg(
    long,
    env = "HN_SCRAPE_FORMAT",
    value_enum,
    default_value_t = Format::Text
  )]
  pub(crate) format: Format,
  /// Read saved HTML from this file instead of fetching, `-` for stdin
  #[arg(long, value_name = "FILE")]
  pub(crate) input: Option<PathBuf>,
  /// Request timeout in seconds
  #[arg(long, env = "HN_SCRAPE_TIMEOUT", default_value_t = 30)]
  pub(crate) timeout: u64,
  /// Page to fetch
  #[arg(long, env = "HN_SCRAPE_URL", default_value = SITE_ORIGIN)]
  pub(crate) url: String,
  /// User-Agent header sent with the request
  #[arg(long, env = "HN_SCRAPE_USER_AGENT", default_value = USER_AGENT)]
  pub(crate) user_agent: String,
}

impl Arguments {
  async fn load_html(&self) -> Result<String> {
    match &self.input {
      Some(path) if path.as_os_str() == "-" => {
        io::read_to_string(io::stdin())
          .context("failed to read HTML from stdin")
      }
      Some(path) => fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display())),
      None => {
        let client =
          Client::new(&self.user_agent, Duration::from_secs(self.timeout))
            .context("failed to build HTTP client")?;

        client
          .fetch_front_page(&self.url)
          .await
          .with_context(|| format!("failed to fetch {}", self.url))
      }
    }
  }

  pub(crate) async fn run(self) -> Result {
    let html = self.load_html().await?;

    let records = Extractor::new(self.comment_link)?
      .extract(&html)
      .context("failed to extract stories")?;

    if records.is_empty() {
      warn!("no stories found on the page");
    }

    let mut stdout = io::stdout().lock();

    self.format.render(&records, &mut stdout)?;

    stdout.flush()?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, std::ffi::OsStr};

  #[test]
  fn defaults_target_the_front_page() {
    let arguments = Arguments::try_parse_from(["hn-scrape"]).unwrap();

    assert_eq!(arguments.comment_link, CommentLinkPolicy::CommentText);
    assert_eq!(arguments.format, Format::Text);
    assert_eq!(arguments.input, None);
    assert_eq!(arguments.timeout, 30);
    assert_eq!(arguments.url, "https://news.ycombinator.com/");
    assert_eq!(arguments.user_agent, USER_AGENT);
  }

  #[test]
  fn flags_override_defaults() {
    let arguments = Arguments::try_parse_from([
      "hn-scrape",
      "--comment-link",
      "last-item-link",
      "--format",
      "json",
      "--input",
      "page.html",
    ])
    .unwrap();

    assert_eq!(arguments.comment_link, CommentLinkPolicy::LastItemLink);
    assert_eq!(arguments.format, Format::Json);
    assert_eq!(arguments.input, Some(PathBuf::from("page.html")));
  }

  #[test]
  fn unknown_policy_is_rejected() {
    assert!(
      Arguments::try_parse_from(["hn-scrape", "--comment-link", "first"])
        .is_err()
    );
  }

  #[tokio::test]
  async fn load_html_reads_input_file() {
    let path = std::env::temp_dir()
      .join(format!("hn_scrape_input_{}.html", process::id()));

    fs::write(&path, "<table></table>").unwrap();

    let arguments = Arguments::try_parse_from([
      OsStr::new("hn-scrape"),
      OsStr::new("--input"),
      path.as_os_str(),
    ])
    .unwrap();

    let html = arguments.load_html().await;

    let _ = fs::remove_file(&path);

    assert_eq!(html.unwrap(), "<table></table>");
  }

  #[tokio::test]
  async fn load_html_reports_missing_file() {
    let arguments = Arguments::try_parse_from([
      "hn-scrape",
      "--input",
      "/nonexistent/hn-scrape/front_page.html",
    ])
    .unwrap();

    let error = arguments.load_html().await.unwrap_err();

    assert!(error.to_string().starts_with("failed to read"));
  }
}
