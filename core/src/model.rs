//! Domain model consumed by the rendering layer.

use uuid::Uuid;

/// Placeholder shown when the API has no capital or continent for a country.
pub const NOT_AVAILABLE: &str = "N/A";

/// A country as displayed in the list and detail screens.
///
/// `id` is generated on every mapping and is only meant to key rows within
/// one loaded list; it does not survive a reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: Uuid,
    pub name: String,
    pub flag_url: String,
    pub capital: String,
    pub continent: String,
    pub population: u64,
}

impl Country {
    /// Build a country with a fresh identity.
    pub fn new(
        name: impl Into<String>,
        flag_url: impl Into<String>,
        capital: impl Into<String>,
        continent: impl Into<String>,
        population: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            flag_url: flag_url.into(),
            capital: capital.into(),
            continent: continent.into(),
            population,
        }
    }

    /// Population with a space between thousands groups, e.g. `"38 000 000"`.
    pub fn formatted_population(&self) -> String {
        let digits = self.population.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(' ');
            }
            out.push(ch);
        }
        out
    }
}

/// Sort ascending by name using plain string ordering. The sort is stable,
/// so countries sharing a name keep their relative order.
pub fn sorted_by_name(mut countries: Vec<Country>) -> Vec<Country> {
    countries.sort_by(|a, b| a.name.cmp(&b.name));
    countries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, population: u64) -> Country {
        Country::new(name, "https://test.com/flag.png", "Capital", "Continent", population)
    }

    #[test]
    fn formatted_population_groups_thousands() {
        assert_eq!(country("A", 123_456_789).formatted_population(), "123 456 789");
        assert_eq!(country("A", 38_000_000).formatted_population(), "38 000 000");
        assert_eq!(country("A", 1_000).formatted_population(), "1 000");
        assert_eq!(country("A", 999).formatted_population(), "999");
        assert_eq!(country("A", 0).formatted_population(), "0");
    }

    #[test]
    fn new_generates_distinct_ids() {
        assert_ne!(country("A", 1).id, country("A", 1).id);
    }

    #[test]
    fn sorted_by_name_orders_ascending() {
        let sorted = sorted_by_name(vec![country("France", 1), country("Canada", 2), country("Japan", 3)]);
        let names: Vec<&str> = sorted.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Canada", "France", "Japan"]);
    }

    #[test]
    fn sorted_by_name_is_case_sensitive() {
        let sorted = sorted_by_name(vec![country("aruba", 1), country("Zambia", 2), country("Åland Islands", 3)]);
        let names: Vec<&str> = sorted.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Zambia", "aruba", "Åland Islands"]);
    }

    #[test]
    fn sorted_by_name_is_stable() {
        let sorted = sorted_by_name(vec![country("Congo", 1), country("Chad", 2), country("Congo", 3)]);
        let populations: Vec<u64> = sorted.iter().map(|c| c.population).collect();
        assert_eq!(populations, [2, 1, 3]);
    }
}
