//! Client core for the REST Countries list/detail screens.
//!
//! # Overview
//! Fetches every country from `GET {base}/all?fields=...`, decodes the
//! transfer schema, maps it to display-ready `Country` values, and drives a
//! four-state `LoadingState` for the rendering layer.
//!
//! # Design
//! - `CountryListState` → `CountryRepository` → `Fetcher` → network, with the
//!   mapper applied on the way back. Each layer is a trait seam so tests can
//!   stand in for the layer below.
//! - `CountryClient` exposes the same request/response rules without I/O
//!   (`build_*` / `parse_*`), for hosts that execute HTTP themselves.
//! - One request per load: no retries, caching or request deduplication.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod dto;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod mapper;
pub mod model;
pub mod repository;
pub mod state;

pub use client::{decode_response, CountryClient, DEFAULT_BASE_URL, LIST_FIELDS};
pub use dto::{CountryDto, FlagsDto, NameDto};
pub use error::{CountryError, ErrorKind};
pub use fetcher::{Fetcher, HttpFetcher};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use mapper::map_countries;
pub use model::{sorted_by_name, Country, NOT_AVAILABLE};
pub use repository::{CountryRepository, RemoteCountryRepository};
pub use state::{CountryListState, LoadingState};
