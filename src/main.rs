use {
  anyhow::{Context, anyhow},
  arguments::Arguments,
  clap::{Parser, ValueEnum},
  client::Client,
  comment_link_policy::CommentLinkPolicy,
  crossterm::style::Stylize,
  error::Error,
  extractor::Extractor,
  format::Format,
  reqwest::StatusCode,
  scraper::{ElementRef, Html, Selector},
  serde::Serialize,
  std::{
    backtrace::BacktraceStatus,
    borrow::Cow,
    fs,
    io::{self, IsTerminal, Write},
    path::PathBuf,
    process,
    time::Duration,
  },
  story_record::StoryRecord,
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  utils::{
    element_text, normalize_whitespace, parse_comment_count, parse_points,
    parse_rank, wrap_fragment,
  },
};

mod arguments;
mod client;
mod comment_link_policy;
mod error;
mod extractor;
mod format;
mod story_record;
mod utils;

const DEFAULT_LOG_FILTER: &str = "warn";

const ITEM_PATH_PREFIX: &str = "item?id=";

const SITE_ORIGIN: &str = "https://news.ycombinator.com/";

const USER_AGENT: &str =
  "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_tracing() -> Result {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .try_init()
    .map_err(|error| anyhow!("failed to initialize tracing: {error}"))
}

fn label(text: &str, use_color: bool) -> String {
  if use_color {
    text.to_string().bold().red().to_string()
  } else {
    text.to_string()
  }
}

fn report(
  error: &anyhow::Error,
  use_color: bool,
  writer: &mut impl Write,
) -> io::Result<()> {
  writeln!(writer, "{} {error}", label("error:", use_color))?;

  let mut causes = error.chain().skip(1).peekable();

  if causes.peek().is_some() {
    writeln!(writer)?;
    writeln!(writer, "{}", label("because:", use_color))?;
  }

  for cause in causes {
    writeln!(writer, "{} {cause}", label("-", use_color))?;
  }

  let backtrace = error.backtrace();

  if backtrace.status() == BacktraceStatus::Captured {
    writeln!(writer, "{}", label("backtrace:", use_color))?;
    writeln!(writer, "{backtrace}")?;
  }

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  initialize_tracing()?;

  arguments.run().await
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let stderr = io::stderr();

    let use_color = stderr.is_terminal();

    let _ = report(&error, use_color, &mut stderr.lock());

    process::exit(1);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn render_report(error: &anyhow::Error) -> String {
    let mut output = Vec::new();
    report(error, false, &mut output).unwrap();
    String::from_utf8(output).unwrap()
  }

  #[test]
  fn report_lists_the_cause_chain() {
    let error = Err::<(), _>(Error::MalformedInput {
      reason: "document is empty",
    })
    .context("failed to extract stories")
    .unwrap_err();

    assert!(render_report(&error).starts_with(
      "\
error: failed to extract stories

because:
- input is not an HTML document: document is empty
"
    ));
  }

  #[test]
  fn report_without_causes_is_a_single_line() {
    let error = anyhow!("no stories");

    assert!(render_report(&error).starts_with("error: no stories\n"));
    assert!(!render_report(&error).contains("because:"));
  }

  #[test]
  fn label_is_plain_without_color() {
    assert_eq!(label("error:", false), "error:");
  }
}
