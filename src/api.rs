// API client module: a small blocking HTTP client that talks to the RAWG
// catalog through the RapidAPI gateway. Every request carries the two
// RapidAPI headers. Only the first page of each endpoint is fetched.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;

const HOST_HEADER: &str = "x-rapidapi-host";
const KEY_HEADER: &str = "x-rapidapi-key";

/// Simple API client holding a reqwest blocking client with the RapidAPI
/// headers already installed as defaults.
#[derive(Clone)]
pub struct RawgClient {
    client: Client,
    base_url: String,
}

/// A genre tag. RAWG also sends `id`, `slug` and counts; only the name is
/// used.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub name: String,
}

/// One entry of the game catalog.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub name: String,
    /// RAWG sends `null` for games without artwork.
    #[serde(default)]
    pub background_image: Option<String>,
    pub genres: Vec<Genre>,
}

impl Game {
    /// Whether one of this game's genre tags is exactly `genre`.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g.name == genre)
    }
}

/// Response envelope shared by the list endpoints. `count`, `next` and
/// `previous` are ignored since pagination is not followed.
#[derive(Deserialize, Debug)]
pub struct Page<T> {
    pub results: Vec<T>,
}

impl RawgClient {
    /// Create a client from the resolved configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let headers = rapidapi_headers(&config.api_host, &config.api_key)?;
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(RawgClient {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// GET /genres and return the genres in API order.
    pub fn genres(&self) -> Result<Vec<Genre>> {
        let page: Page<Genre> = self.get("genres")?;
        Ok(page.results)
    }

    /// GET /games (first page only) and return the games in API order.
    pub fn games(&self) -> Result<Vec<Game>> {
        let page: Page<Game> = self.get("games")?;
        Ok(page.results)
    }

    fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Page<T>> {
        let url = format!("{}/{}", &self.base_url, endpoint);
        debug!(%url, "sending request");
        let res = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to send {} request", endpoint))?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            warn!(%status, endpoint, "request rejected");
            anyhow::bail!("Fetching {} failed: {} - {}", endpoint, status, txt);
        }
        let page: Page<T> = res
            .json()
            .with_context(|| format!("Parsing {} response json", endpoint))?;
        debug!(endpoint, results = page.results.len(), "decoded response");
        Ok(page)
    }
}

/// Build the header map every RAWG request needs.
fn rapidapi_headers(host: &str, key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HOST_HEADER,
        HeaderValue::from_str(host).context("API host is not a valid header value")?,
    );
    let mut key = HeaderValue::from_str(key).context("API key is not a valid header value")?;
    key.set_sensitive(true);
    headers.insert(KEY_HEADER, key);
    Ok(headers)
}
