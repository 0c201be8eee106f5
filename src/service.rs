use crate::{
    macros::yeet_error,
    models::{Page, PokemonInfo, PokemonList, ResultEnvelope},
    normalizer,
    upstream::{UpstreamClient, UpstreamError, UpstreamResponse},
};

const RESOURCE_PATH: &str = "pokemon";
/// Reported when the upstream couldn't be reached, there is no upstream status to mirror.
pub const TRANSPORT_FAILURE_STATUS: u16 = 502;

/// Looks resources up upstream and hands the answer to the normalizer.
pub struct PokemonService {
    upstream: UpstreamClient,
}

impl PokemonService {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }

    /// The name is forwarded as given, validation is left to the upstream.
    pub async fn get_pokemon(&self, name: &str) -> ResultEnvelope<PokemonInfo> {
        let res = self.upstream.fetch(&[RESOURCE_PATH, name], &[]).await;
        let response = yeet_error!(res.map_err(transport_failure));
        log_failed_status(&response);

        normalizer::normalize_record(&response.body, response.status, response.is_success())
    }

    pub async fn get_pokemon_list(&self, page: Page) -> ResultEnvelope<PokemonList> {
        let query = [
            ("limit", page.limit.to_string()),
            ("offset", page.offset.to_string()),
        ];
        let res = self.upstream.fetch(&[RESOURCE_PATH], &query).await;
        let response = yeet_error!(res.map_err(transport_failure));
        log_failed_status(&response);

        normalizer::normalize_listing(&response.body, response.status, response.is_success(), page)
    }
}

fn log_failed_status(response: &UpstreamResponse) {
    if !response.is_success() {
        tracing::info!(status = response.status, "Upstream answered with an error status");
    }
}

fn transport_failure<T>(error: UpstreamError) -> ResultEnvelope<T> {
    tracing::warn!(%error, "Failed to reach upstream");
    ResultEnvelope::failure(
        format!("Failed to reach upstream: {error}"),
        TRANSPORT_FAILURE_STATUS,
    )
}
