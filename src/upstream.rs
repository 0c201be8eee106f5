use url::Url;

pub const DEFAULT_UPSTREAM_URL: &str = "https://pokeapi.co/api/v2";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream url '{0}' can't have path segments appended")]
    InvalidBaseUrl(Url),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Whatever the upstream answered, including non-2xx statuses.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub body: Vec<u8>,
    pub status: u16,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().user_agent(USER_AGENT).build()
}

/// Issues one GET per call against a fixed base url. No retries, timeouts
/// and redirects are reqwest's defaults.
pub struct UpstreamClient {
    req_client: reqwest::Client,
    base_url: Url,
}

impl UpstreamClient {
    pub fn new(req_client: reqwest::Client, base_url: Url) -> Result<Self, UpstreamError> {
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidBaseUrl(base_url));
        }

        Ok(Self {
            req_client,
            base_url,
        })
    }

    /// Appends `segments` (each percent-encoded) to the base url and encodes
    /// `query` as `application/x-www-form-urlencoded`.
    pub fn url(&self, segments: &[&str], query: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }

    pub async fn fetch(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<UpstreamResponse, UpstreamError> {
        let url = self.url(segments, query);
        tracing::debug!(%url, "Fetching from upstream");

        let response = self.req_client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(UpstreamResponse { body, status })
    }
}
