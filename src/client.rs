use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Client {
  client: reqwest::Client,
}

impl Client {
  pub(crate) async fn fetch_front_page(
    &self,
    url: &str,
  ) -> Result<String, Error> {
    debug!(url, "fetching front page");

    let response = self.client.get(url).send().await?;

    let status = response.status();

    if status != StatusCode::OK {
      return Err(Error::Status {
        status,
        url: url.to_string(),
      });
    }

    let body = response.text().await?;

    info!(url, bytes = body.len(), "fetched front page");

    Ok(body)
  }

  pub(crate) fn new(
    user_agent: &str,
    timeout: Duration,
  ) -> Result<Self, Error> {
    Ok(Self {
      client: reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()?,
    })
  }
}
