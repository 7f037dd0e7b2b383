// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Static city directory.
//!
//! Maps human-readable city names, ids and aliases to IANA zone identifiers.
//! The conversion engine only ever sees the resulting [`ZoneId`]; everything
//! else on a [`City`] is for display and search.

mod data;

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use serde::Serialize;
use timesync_tz::{Result, ZoneId};

pub use data::CITIES;

/// A city record. Immutable and `'static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct City {
    pub id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub country_code: &'static str,
    pub continent: &'static str,
    /// IANA zone identifier, e.g. `"Asia/Kolkata"`
    pub zone: &'static str,
    pub aliases: &'static [&'static str],
}

impl City {
    pub fn zone_id(&self) -> Result<ZoneId> {
        ZoneId::parse(self.zone)
    }

    /// Whether `query` (already lowercased) appears in any searchable field.
    fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.country.to_lowercase().contains(query)
            || self.country_code.to_lowercase().contains(query)
            || self.zone.to_lowercase().contains(query)
            || self.aliases.iter().any(|alias| alias.to_lowercase().contains(query))
    }
}

/// A resolved location: a known city, or a bare zone id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub label: String,
    pub zone: ZoneId,
    pub city: Option<&'static City>,
}

static BY_ID: Lazy<HashMap<&'static str, &'static City>> =
    Lazy::new(|| CITIES.iter().map(|city| (city.id, city)).collect());

/// Lowercased names first, then aliases; a name always wins over an alias.
static BY_NAME: Lazy<HashMap<String, &'static City>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(CITIES.len() * 2);
    for city in CITIES {
        map.entry(city.name.to_lowercase()).or_insert(city);
    }
    for city in CITIES {
        for alias in city.aliases {
            map.entry(alias.to_lowercase()).or_insert(city);
        }
    }
    map
});

pub fn all() -> &'static [City] {
    CITIES
}

pub fn by_id(id: &str) -> Option<&'static City> {
    BY_ID.get(id.trim()).copied()
}

/// Look a city up by display name or alias, the way widget URLs spell them:
/// case-insensitive, `+` standing for a space, surrounding blanks ignored.
pub fn by_name(name: &str) -> Option<&'static City> {
    BY_NAME.get(&normalize(name)).copied()
}

/// First city located in `zone`.
pub fn by_zone(zone: &str) -> Option<&'static City> {
    CITIES.iter().find(|city| city.zone == zone)
}

/// Case-insensitive substring search over name, country, country code, zone
/// and aliases. A blank query returns the whole directory.
pub fn search(query: &str) -> Vec<&'static City> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return CITIES.iter().collect();
    }
    CITIES.iter().filter(|city| city.matches(&query)).collect()
}

/// Cities grouped by continent, continents in alphabetical order.
pub fn by_continent() -> BTreeMap<&'static str, Vec<&'static City>> {
    let mut groups: BTreeMap<&'static str, Vec<&'static City>> = BTreeMap::new();
    for city in CITIES {
        groups.entry(city.continent).or_default().push(city);
    }
    groups
}

/// Resolve a user- or URL-supplied token: city id first, then city name or
/// alias, then a raw IANA zone identifier. Anything else is `None`.
pub fn resolve(token: &str) -> Option<Place> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    if let Some(city) = by_id(token).or_else(|| by_name(token)) {
        return city.zone_id().ok().map(|zone| Place {
            label: city.name.to_string(),
            zone,
            city: Some(city),
        });
    }
    ZoneId::parse(token).ok().map(|zone| Place {
        label: zone.name().to_string(),
        zone,
        city: None,
    })
}

fn normalize(name: &str) -> String {
    name.replace('+', " ").trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_city_has_a_valid_zone() {
        for city in all() {
            assert!(city.zone_id().is_ok(), "{} has invalid zone {}", city.id, city.zone);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        assert_eq!(BY_ID.len(), CITIES.len());
    }

    #[test]
    fn test_by_id() {
        assert_eq!(by_id("new-york").unwrap().zone, "America/New_York");
        assert_eq!(by_id("delhi").unwrap().name, "New Delhi");
        assert!(by_id("atlantis").is_none());
    }

    #[test]
    fn test_by_name_normalizes() {
        assert_eq!(by_name("New+York").unwrap().id, "new-york");
        assert_eq!(by_name("  new york ").unwrap().id, "new-york");
        assert_eq!(by_name("SÃO PAULO").unwrap().id, "sao-paulo");
        assert_eq!(by_name("Sao+Paulo").unwrap().id, "sao-paulo");
    }

    #[test]
    fn test_by_name_aliases() {
        assert_eq!(by_name("NYC").unwrap().id, "new-york");
        assert_eq!(by_name("bombay").unwrap().id, "mumbai");
        assert_eq!(by_name("Bengaluru").unwrap().id, "bangalore");
    }

    #[test]
    fn test_by_zone() {
        assert_eq!(by_zone("Asia/Kolkata").unwrap().id, "mumbai");
        assert!(by_zone("Antarctica/Troll").is_none());
    }

    #[test]
    fn test_search() {
        let hits: Vec<_> = search("india").iter().map(|c| c.id).collect();
        assert_eq!(hits, vec!["mumbai", "delhi", "bangalore"]);

        let hits: Vec<_> = search("windy").iter().map(|c| c.id).collect();
        assert_eq!(hits, vec!["chicago"]);

        assert_eq!(search("  ").len(), CITIES.len());
        assert!(search("zzzz").is_empty());
    }

    #[test]
    fn test_by_continent() {
        let groups = by_continent();
        assert_eq!(groups.len(), 6);
        assert_eq!(groups["Oceania"].len(), 3);
        let continents: Vec<_> = groups.keys().copied().collect();
        assert_eq!(
            continents,
            vec!["Africa", "Asia", "Europe", "North America", "Oceania", "South America"]
        );
    }

    #[test]
    fn test_resolve_order() {
        let place = resolve("tokyo").unwrap();
        assert_eq!(place.label, "Tokyo");
        assert_eq!(place.zone.name(), "Asia/Tokyo");

        let place = resolve("Hong+Kong").unwrap();
        assert_eq!(place.city.unwrap().id, "hong-kong");

        let place = resolve("America/Denver").unwrap();
        assert!(place.city.is_none());
        assert_eq!(place.label, "America/Denver");

        assert!(resolve("Gotham").is_none());
        assert!(resolve("").is_none());
    }
}
