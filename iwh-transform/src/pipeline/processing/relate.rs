use std::collections::{BTreeSet, HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use iwh_core::domain::{Company, CompanyIndustry, Industry, Internship, InternshipLocation, Location};

static LOCATION_SEGMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\n]").unwrap());

/// Parses a raw location cell into a (city, state, country) triple.
///
/// The segment after " - " is a season/term annotation ("Summer 2025") and is
/// stripped first. The remainder splits on comma or newline: three tokens map
/// positionally, two tokens leave the country empty, anything else keeps only
/// the first token as the city.
pub fn parse_location(raw: &str) -> (String, String, String) {
    let head = raw.split(" - ").next().unwrap_or("").trim();
    let parts: Vec<&str> = LOCATION_SEGMENT_RE.split(head).map(str::trim).collect();
    match parts.as_slice() {
        [city, state, country] => (city.to_string(), state.to_string(), country.to_string()),
        [city, state] => (city.to_string(), state.to_string(), String::new()),
        _ => (
            parts.first().copied().unwrap_or("").to_string(),
            String::new(),
            String::new(),
        ),
    }
}

/// Derives the Location dimension and the Internship↔Location junction.
///
/// Internships without a location cell are skipped entirely. Distinct parsed
/// triples dedup exactly (no fuzzy matching); location ids are assigned 1..N
/// in sorted-triple order so they are reproducible across runs. `is_remote`
/// is a fixed placeholder until the sources expose remote flags.
pub fn extract_locations(internships: &[Internship]) -> (Vec<Location>, Vec<InternshipLocation>) {
    let mut triples: BTreeSet<(String, String, String)> = BTreeSet::new();
    let mut observed: Vec<(u32, (String, String, String))> = Vec::new();

    for internship in internships {
        let Some(raw) = internship.location.as_deref() else {
            continue;
        };
        let triple = parse_location(raw);
        triples.insert(triple.clone());
        observed.push((internship.internship_id, triple));
    }

    let locations: Vec<Location> = triples
        .into_iter()
        .enumerate()
        .map(|(index, (city, state, country))| Location {
            location_id: index as u32 + 1,
            city,
            state,
            country,
        })
        .collect();

    let by_triple: HashMap<(&str, &str, &str), u32> = locations
        .iter()
        .map(|l| {
            (
                (l.city.as_str(), l.state.as_str(), l.country.as_str()),
                l.location_id,
            )
        })
        .collect();

    let links = observed
        .into_iter()
        .map(|(internship_id, (city, state, country))| InternshipLocation {
            internship_id,
            location_id: by_triple[&(city.as_str(), state.as_str(), country.as_str())],
            is_remote: false,
        })
        .collect();

    debug!(locations = locations.len(), "extracted location dimension");
    (locations, links)
}

/// Derives the Industry dimension and the Company↔Industry junction from the
/// comma-separated industries column.
///
/// Tokens are trimmed and empty tokens discarded; names dedup exactly
/// (case-sensitive, no synonym resolution) and industry ids are assigned 1..N
/// in sorted-name order. One junction row is emitted per observed
/// (company, token) pair — a token repeated within one company's list emits a
/// repeated junction row unless `dedupe_pairs` collapses the junction to
/// distinct pairs.
pub fn extract_industries(
    companies: &[Company],
    dedupe_pairs: bool,
) -> (Vec<Industry>, Vec<CompanyIndustry>) {
    let mut names: BTreeSet<String> = BTreeSet::new();
    let mut observed: Vec<(u32, String)> = Vec::new();

    for company in companies {
        let Some(raw) = company.industries.as_deref() else {
            continue;
        };
        for token in raw.split(',') {
            let name = token.trim();
            if name.is_empty() {
                continue;
            }
            names.insert(name.to_string());
            observed.push((company.company_id, name.to_string()));
        }
    }

    let industries: Vec<Industry> = names
        .into_iter()
        .enumerate()
        .map(|(index, name)| Industry {
            industry_id: index as u32 + 1,
            name,
        })
        .collect();

    let by_name: HashMap<&str, u32> = industries
        .iter()
        .map(|i| (i.name.as_str(), i.industry_id))
        .collect();

    let mut seen: HashSet<(u32, u32)> = HashSet::new();
    let mut junction: Vec<CompanyIndustry> = Vec::new();
    for (company_id, name) in observed {
        let row = CompanyIndustry {
            company_id,
            industry_id: by_name[name.as_str()],
        };
        if dedupe_pairs && !seen.insert((row.company_id, row.industry_id)) {
            continue;
        }
        junction.push(row);
    }

    debug!(
        industries = industries.len(),
        junction_rows = junction.len(),
        "extracted industry dimension"
    );
    (industries, junction)
}
