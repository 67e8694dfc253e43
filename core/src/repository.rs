//! Country repository: endpoint construction plus fetch-then-map.

use std::future::Future;

use tracing::debug;

use crate::client::CountryClient;
use crate::dto::CountryDto;
use crate::error::CountryError;
use crate::fetcher::Fetcher;
use crate::mapper::map_countries;
use crate::model::Country;

/// Source of the full, unsorted country list.
pub trait CountryRepository: Send + Sync {
    fn fetch_all_countries(&self) -> impl Future<Output = Result<Vec<Country>, CountryError>> + Send;
}

/// Repository backed by the REST Countries API.
#[derive(Debug, Clone)]
pub struct RemoteCountryRepository<F> {
    client: CountryClient,
    fetcher: F,
}

impl<F: Fetcher> RemoteCountryRepository<F> {
    pub fn new(client: CountryClient, fetcher: F) -> Self {
        Self { client, fetcher }
    }

    pub fn client(&self) -> &CountryClient {
        &self.client
    }
}

impl<F: Fetcher> CountryRepository for RemoteCountryRepository<F> {
    async fn fetch_all_countries(&self) -> Result<Vec<Country>, CountryError> {
        let url = self.client.list_countries_url()?;
        let dtos: Vec<CountryDto> = self.fetcher.fetch(&url).await?;
        debug!(count = dtos.len(), "decoded country records");
        Ok(map_countries(dtos))
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use serde::de::DeserializeOwned;
    use url::Url;

    use super::*;
    use crate::error::ErrorKind;

    /// Fetcher that decodes a canned body or returns a canned error, and
    /// records the URLs it was asked for.
    struct StubFetcher {
        outcome: Result<String, CountryError>,
        requested: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn body(body: &str) -> Self {
            Self {
                outcome: Ok(body.to_string()),
                requested: Mutex::new(Vec::new()),
            }
        }

        fn failing(err: CountryError) -> Self {
            Self {
                outcome: Err(err),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    impl Fetcher for StubFetcher {
        async fn fetch<T>(&self, url: &Url) -> Result<T, CountryError>
        where
            T: DeserializeOwned + Send,
        {
            self.requested.lock().unwrap().push(url.to_string());
            let body = self.outcome.clone()?;
            serde_json::from_str(&body).map_err(CountryError::decoding)
        }
    }

    fn repository(fetcher: StubFetcher) -> RemoteCountryRepository<StubFetcher> {
        RemoteCountryRepository::new(CountryClient::default(), fetcher)
    }

    #[tokio::test]
    async fn fetch_all_countries_maps_every_record() {
        let body = r#"[
            {"name":{"common":"Canada","official":"Canada"},"flags":{"png":"https://test.com/ca.png"},"capital":["Ottawa"],"continents":["North America"],"population":38000000},
            {"name":{"common":"Antarctica"},"flags":{"png":"https://test.com/aq.png"},"capital":null,"continents":null,"population":null}
        ]"#;
        let repo = repository(StubFetcher::body(body));

        let countries = repo.fetch_all_countries().await.unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].name, "Canada");
        assert_eq!(countries[0].capital, "Ottawa");
        assert_eq!(countries[0].continent, "North America");
        assert_eq!(countries[0].population, 38_000_000);
        assert_eq!(countries[1].name, "Antarctica");
        assert_eq!(countries[1].capital, "N/A");
        assert_eq!(countries[1].continent, "N/A");
        assert_eq!(countries[1].population, 0);
    }

    #[tokio::test]
    async fn requests_the_fixed_field_selection() {
        let repo = repository(StubFetcher::body("[]"));
        repo.fetch_all_countries().await.unwrap();
        let requested = repo.fetcher.requested.lock().unwrap().clone();
        assert_eq!(
            requested,
            ["https://restcountries.com/v3.1/all?fields=name,flags,capital,continents,population"]
        );
    }

    #[tokio::test]
    async fn results_are_not_sorted() {
        let body = r#"[
            {"name":{"common":"Japan"},"flags":{"png":"jp"}},
            {"name":{"common":"Canada"},"flags":{"png":"ca"}}
        ]"#;
        let countries = repository(StubFetcher::body(body)).fetch_all_countries().await.unwrap();
        assert_eq!(countries[0].name, "Japan");
        assert_eq!(countries[1].name, "Canada");
    }

    #[tokio::test]
    async fn network_failure_propagates_unchanged() {
        let repo = repository(StubFetcher::failing(CountryError::network(io::Error::other("offline"))));
        let err = repo.fetch_all_countries().await.unwrap_err();
        assert!(matches!(err, CountryError::Network(_)));
    }

    #[tokio::test]
    async fn server_failure_keeps_status() {
        let repo = repository(StubFetcher::failing(CountryError::Server { status: 503 }));
        let err = repo.fetch_all_countries().await.unwrap_err();
        assert!(matches!(err, CountryError::Server { status: 503 }));
    }

    #[tokio::test]
    async fn invalid_json_is_decoding_error() {
        let repo = repository(StubFetcher::body("invalid json"));
        let err = repo.fetch_all_countries().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decoding);
    }

    #[tokio::test]
    async fn invalid_base_url_fails_before_fetching() {
        let repo = RemoteCountryRepository::new(CountryClient::new("::"), StubFetcher::body("[]"));
        let err = repo.fetch_all_countries().await.unwrap_err();
        assert!(matches!(err, CountryError::InvalidUrl(_)));
        assert!(repo.fetcher.requested.lock().unwrap().is_empty());
    }
}
