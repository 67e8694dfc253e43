//! Transfer schema for the REST Countries `/all` endpoint.
//!
//! # Design
//! These types mirror the wire JSON exactly, field names included. Optional
//! fields stay `Option` here; substituting display defaults is the mapper's
//! job, so decoding never invents data. Unknown fields are ignored so the
//! API can grow without breaking the client.

use serde::{Deserialize, Serialize};

/// One country record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDto {
    pub name: NameDto,
    pub flags: FlagsDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continents: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameDto {
    pub common: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official: Option<String>,
}

/// Flag image locations. Only `png` is used downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagsDto {
    pub png: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}
