// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::City;

/// Every city the directory knows about, grouped by continent.
pub static CITIES: &[City] = &[
    // North America
    City {
        id: "new-york",
        name: "New York",
        country: "United States",
        country_code: "US",
        continent: "North America",
        zone: "America/New_York",
        aliases: &["NYC", "New York City", "Manhattan"],
    },
    City {
        id: "los-angeles",
        name: "Los Angeles",
        country: "United States",
        country_code: "US",
        continent: "North America",
        zone: "America/Los_Angeles",
        aliases: &["LA", "Los Angeles", "City of Angels"],
    },
    City {
        id: "chicago",
        name: "Chicago",
        country: "United States",
        country_code: "US",
        continent: "North America",
        zone: "America/Chicago",
        aliases: &["Chi-town", "Windy City"],
    },
    City {
        id: "toronto",
        name: "Toronto",
        country: "Canada",
        country_code: "CA",
        continent: "North America",
        zone: "America/Toronto",
        aliases: &[],
    },
    City {
        id: "vancouver",
        name: "Vancouver",
        country: "Canada",
        country_code: "CA",
        continent: "North America",
        zone: "America/Vancouver",
        aliases: &[],
    },
    City {
        id: "mexico-city",
        name: "Mexico City",
        country: "Mexico",
        country_code: "MX",
        continent: "North America",
        zone: "America/Mexico_City",
        aliases: &["Ciudad de México", "CDMX"],
    },
    // South America
    City {
        id: "sao-paulo",
        name: "São Paulo",
        country: "Brazil",
        country_code: "BR",
        continent: "South America",
        zone: "America/Sao_Paulo",
        aliases: &["Sao Paulo"],
    },
    City {
        id: "buenos-aires",
        name: "Buenos Aires",
        country: "Argentina",
        country_code: "AR",
        continent: "South America",
        zone: "America/Argentina/Buenos_Aires",
        aliases: &[],
    },
    City {
        id: "bogota",
        name: "Bogotá",
        country: "Colombia",
        country_code: "CO",
        continent: "South America",
        zone: "America/Bogota",
        aliases: &["Bogota"],
    },
    City {
        id: "lima",
        name: "Lima",
        country: "Peru",
        country_code: "PE",
        continent: "South America",
        zone: "America/Lima",
        aliases: &[],
    },
    // Europe
    City {
        id: "london",
        name: "London",
        country: "United Kingdom",
        country_code: "GB",
        continent: "Europe",
        zone: "Europe/London",
        aliases: &[],
    },
    City {
        id: "paris",
        name: "Paris",
        country: "France",
        country_code: "FR",
        continent: "Europe",
        zone: "Europe/Paris",
        aliases: &[],
    },
    City {
        id: "berlin",
        name: "Berlin",
        country: "Germany",
        country_code: "DE",
        continent: "Europe",
        zone: "Europe/Berlin",
        aliases: &[],
    },
    City {
        id: "madrid",
        name: "Madrid",
        country: "Spain",
        country_code: "ES",
        continent: "Europe",
        zone: "Europe/Madrid",
        aliases: &[],
    },
    City {
        id: "rome",
        name: "Rome",
        country: "Italy",
        country_code: "IT",
        continent: "Europe",
        zone: "Europe/Rome",
        aliases: &["Roma"],
    },
    City {
        id: "amsterdam",
        name: "Amsterdam",
        country: "Netherlands",
        country_code: "NL",
        continent: "Europe",
        zone: "Europe/Amsterdam",
        aliases: &[],
    },
    City {
        id: "moscow",
        name: "Moscow",
        country: "Russia",
        country_code: "RU",
        continent: "Europe",
        zone: "Europe/Moscow",
        aliases: &["Moskva"],
    },
    City {
        id: "istanbul",
        name: "Istanbul",
        country: "Turkey",
        country_code: "TR",
        continent: "Europe",
        zone: "Europe/Istanbul",
        aliases: &[],
    },
    // Asia
    City {
        id: "tokyo",
        name: "Tokyo",
        country: "Japan",
        country_code: "JP",
        continent: "Asia",
        zone: "Asia/Tokyo",
        aliases: &[],
    },
    City {
        id: "shanghai",
        name: "Shanghai",
        country: "China",
        country_code: "CN",
        continent: "Asia",
        zone: "Asia/Shanghai",
        aliases: &[],
    },
    City {
        id: "beijing",
        name: "Beijing",
        country: "China",
        country_code: "CN",
        continent: "Asia",
        zone: "Asia/Shanghai",
        aliases: &["Peking"],
    },
    City {
        id: "singapore",
        name: "Singapore",
        country: "Singapore",
        country_code: "SG",
        continent: "Asia",
        zone: "Asia/Singapore",
        aliases: &[],
    },
    City {
        id: "hong-kong",
        name: "Hong Kong",
        country: "Hong Kong",
        country_code: "HK",
        continent: "Asia",
        zone: "Asia/Hong_Kong",
        aliases: &[],
    },
    City {
        id: "seoul",
        name: "Seoul",
        country: "South Korea",
        country_code: "KR",
        continent: "Asia",
        zone: "Asia/Seoul",
        aliases: &[],
    },
    City {
        id: "mumbai",
        name: "Mumbai",
        country: "India",
        country_code: "IN",
        continent: "Asia",
        zone: "Asia/Kolkata",
        aliases: &["Bombay"],
    },
    City {
        id: "delhi",
        name: "New Delhi",
        country: "India",
        country_code: "IN",
        continent: "Asia",
        zone: "Asia/Kolkata",
        aliases: &["Delhi"],
    },
    City {
        id: "bangalore",
        name: "Bangalore",
        country: "India",
        country_code: "IN",
        continent: "Asia",
        zone: "Asia/Kolkata",
        aliases: &["Bengaluru"],
    },
    City {
        id: "dubai",
        name: "Dubai",
        country: "United Arab Emirates",
        country_code: "AE",
        continent: "Asia",
        zone: "Asia/Dubai",
        aliases: &[],
    },
    City {
        id: "bangkok",
        name: "Bangkok",
        country: "Thailand",
        country_code: "TH",
        continent: "Asia",
        zone: "Asia/Bangkok",
        aliases: &["Krung Thep"],
    },
    City {
        id: "jakarta",
        name: "Jakarta",
        country: "Indonesia",
        country_code: "ID",
        continent: "Asia",
        zone: "Asia/Jakarta",
        aliases: &[],
    },
    // Africa
    City {
        id: "cairo",
        name: "Cairo",
        country: "Egypt",
        country_code: "EG",
        continent: "Africa",
        zone: "Africa/Cairo",
        aliases: &["Al Qāhirah"],
    },
    City {
        id: "johannesburg",
        name: "Johannesburg",
        country: "South Africa",
        country_code: "ZA",
        continent: "Africa",
        zone: "Africa/Johannesburg",
        aliases: &["Joburg", "Jo'burg"],
    },
    City {
        id: "lagos",
        name: "Lagos",
        country: "Nigeria",
        country_code: "NG",
        continent: "Africa",
        zone: "Africa/Lagos",
        aliases: &[],
    },
    City {
        id: "nairobi",
        name: "Nairobi",
        country: "Kenya",
        country_code: "KE",
        continent: "Africa",
        zone: "Africa/Nairobi",
        aliases: &[],
    },
    // Oceania
    City {
        id: "sydney",
        name: "Sydney",
        country: "Australia",
        country_code: "AU",
        continent: "Oceania",
        zone: "Australia/Sydney",
        aliases: &[],
    },
    City {
        id: "melbourne",
        name: "Melbourne",
        country: "Australia",
        country_code: "AU",
        continent: "Oceania",
        zone: "Australia/Melbourne",
        aliases: &[],
    },
    City {
        id: "auckland",
        name: "Auckland",
        country: "New Zealand",
        country_code: "NZ",
        continent: "Oceania",
        zone: "Pacific/Auckland",
        aliases: &[],
    },
];
