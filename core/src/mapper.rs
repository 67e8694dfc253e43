//! Transfer schema to domain mapping.
//!
//! Mapping is total: every record becomes exactly one `Country`, in input
//! order, with absent optional data replaced by fixed defaults.

use crate::dto::CountryDto;
use crate::model::{Country, NOT_AVAILABLE};

impl From<CountryDto> for Country {
    fn from(dto: CountryDto) -> Self {
        Country::new(
            dto.name.common,
            dto.flags.png,
            first_or_placeholder(dto.capital),
            first_or_placeholder(dto.continents),
            dto.population.unwrap_or(0),
        )
    }
}

/// Map a decoded payload, preserving length and order.
pub fn map_countries(dtos: Vec<CountryDto>) -> Vec<Country> {
    dtos.into_iter().map(Country::from).collect()
}

fn first_or_placeholder(values: Option<Vec<String>>) -> String {
    values
        .and_then(|v| v.into_iter().next())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{FlagsDto, NameDto};

    fn dto(
        name: &str,
        capital: Option<&[&str]>,
        continents: Option<&[&str]>,
        population: Option<u64>,
    ) -> CountryDto {
        let owned = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        CountryDto {
            name: NameDto { common: name.to_string(), official: None },
            flags: FlagsDto {
                png: format!("https://test.com/{name}.png"),
                svg: None,
                alt: None,
            },
            capital: capital.map(owned),
            continents: continents.map(owned),
            population,
        }
    }

    #[test]
    fn maps_populated_record() {
        let country = Country::from(dto("France", Some(&["Paris"]), Some(&["Europe"]), Some(67_000_000)));
        assert_eq!(country.name, "France");
        assert_eq!(country.flag_url, "https://test.com/France.png");
        assert_eq!(country.capital, "Paris");
        assert_eq!(country.continent, "Europe");
        assert_eq!(country.population, 67_000_000);
    }

    #[test]
    fn missing_optionals_fall_back_to_defaults() {
        let country = Country::from(dto("Antarctica", None, None, None));
        assert_eq!(country.name, "Antarctica");
        assert_eq!(country.capital, "N/A");
        assert_eq!(country.continent, "N/A");
        assert_eq!(country.population, 0);
    }

    #[test]
    fn empty_lists_fall_back_to_defaults() {
        let country = Country::from(dto("Nowhere", Some(&[]), Some(&[]), Some(5)));
        assert_eq!(country.capital, "N/A");
        assert_eq!(country.continent, "N/A");
        assert_eq!(country.population, 5);
    }

    #[test]
    fn only_first_list_element_is_kept() {
        let country = Country::from(dto(
            "South Africa",
            Some(&["Pretoria", "Bloemfontein", "Cape Town"]),
            Some(&["Africa"]),
            Some(59_308_690),
        ));
        assert_eq!(country.capital, "Pretoria");

        let country = Country::from(dto("Russia", Some(&["Moscow"]), Some(&["Europe", "Asia"]), None));
        assert_eq!(country.continent, "Europe");
    }

    #[test]
    fn map_countries_preserves_length_and_order() {
        let dtos = vec![
            dto("Japan", Some(&["Tokyo"]), Some(&["Asia"]), Some(125)),
            dto("Canada", Some(&["Ottawa"]), None, None),
            dto("France", None, Some(&["Europe"]), Some(67)),
        ];
        let countries = map_countries(dtos);
        let names: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Japan", "Canada", "France"]);
    }

    #[test]
    fn mapping_same_record_twice_gives_distinct_ids() {
        let record = dto("Canada", Some(&["Ottawa"]), Some(&["North America"]), Some(38));
        let a = Country::from(record.clone());
        let b = Country::from(record);
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn map_countries_of_empty_payload_is_empty() {
        assert!(map_countries(Vec::new()).is_empty());
    }
}
