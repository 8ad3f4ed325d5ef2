use std::{num::NonZeroU32, sync::Arc};

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use serde::Deserialize;
use tracing::debug;

use crate::models::MovieInfo;

/// OMDb marks missing posters with a literal "N/A" rather than omitting the
/// field.
const NO_IMAGE: &str = "N/A";

pub struct OmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl OmdbClient {
    pub fn new(client: reqwest::Client, api_key: String, base_url: String, rps: u32) -> Self {
        if api_key.trim().is_empty() {
            tracing::warn!("no OMDB_API_KEY provided - every lookup will fall back to title-only");
        }

        let limiter =
            Arc::new(RateLimiter::direct(Quota::per_second(NonZeroU32::new(rps.max(1)).unwrap())));
        Self { client, api_key, base_url, limiter }
    }

    /// Looks up a title on OMDb. A negative lookup is a normal outcome, not
    /// an error: transport failures, timeouts, malformed payloads, and an
    /// explicit "not found" from the service all come back as `None`.
    pub async fn lookup(&self, title: &str) -> Option<MovieInfo> {
        self.limiter.until_ready().await;

        match self.fetch(title).await {
            Ok(info) => info,
            Err(err) => {
                debug!(title = %title, error = %err, "omdb lookup failed");
                None
            }
        }
    }

    async fn fetch(&self, title: &str) -> anyhow::Result<Option<MovieInfo>> {
        let resp: OmdbResponse = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(into_info(resp))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OmdbResponse {
    response: Option<String>,
    title: Option<String>,
    director: Option<String>,
    year: Option<String>,
    poster: Option<String>,
}

fn into_info(resp: OmdbResponse) -> Option<MovieInfo> {
    if resp.response.as_deref() != Some("True") {
        return None;
    }
    let name = resp.title?;

    Some(MovieInfo {
        name,
        director: resp.director,
        year: resp.year.as_deref().and_then(parse_year),
        poster_url: resp.poster.filter(|p| p != NO_IMAGE),
    })
}

/// OMDb returns `Year` as a string and uses ranges like "1999–2001" for
/// series. Only a fully numeric value is taken as the release year.
fn parse_year(raw: &str) -> Option<i32> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(
        response: &str,
        title: Option<&str>,
        director: Option<&str>,
        year: Option<&str>,
        poster: Option<&str>,
    ) -> OmdbResponse {
        OmdbResponse {
            response: Some(response.to_string()),
            title: title.map(str::to_string),
            director: director.map(str::to_string),
            year: year.map(str::to_string),
            poster: poster.map(str::to_string),
        }
    }

    #[test]
    fn successful_match_maps_all_fields() {
        let resp = response(
            "True",
            Some("Inception"),
            Some("Christopher Nolan"),
            Some("2010"),
            Some("http://img.omdbapi.com/inception.jpg"),
        );
        let info = into_info(resp).unwrap();
        assert_eq!(info.name, "Inception");
        assert_eq!(info.director.as_deref(), Some("Christopher Nolan"));
        assert_eq!(info.year, Some(2010));
        assert_eq!(info.poster_url.as_deref(), Some("http://img.omdbapi.com/inception.jpg"));
    }

    #[test]
    fn explicit_not_found_is_negative() {
        let resp = response("False", None, None, None, None);
        assert_eq!(into_info(resp), None);
    }

    #[test]
    fn missing_title_on_success_is_treated_as_malformed() {
        let resp = response("True", None, None, Some("2010"), None);
        assert_eq!(into_info(resp), None);
    }

    #[test]
    fn non_numeric_year_is_dropped() {
        let resp = response("True", Some("The Sopranos"), None, Some("1999–2007"), None);
        let info = into_info(resp).unwrap();
        assert_eq!(info.year, None);
    }

    #[test]
    fn no_image_sentinel_becomes_absent_poster() {
        let resp = response("True", Some("Obscure Film"), Some("Nobody"), Some("1971"), Some("N/A"));
        let info = into_info(resp).unwrap();
        assert_eq!(info.poster_url, None);
    }

    #[test]
    fn empty_year_is_dropped() {
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("20a0"), None);
        assert_eq!(parse_year("1968"), Some(1968));
    }
}
