use std::collections::{HashMap, HashSet};

use tracing::debug;

use iwh_core::domain::{
    Company, CompanyIndustry, DegreeRequirement, Industry, Internship, InternshipLocation,
    Location, WarehouseSnapshot,
};

use super::clean::CleanInternship;

/// Builds the final Internship table: left-join to resolved company ids on
/// normalized slug, project to the output columns (the join key and the raw
/// company name are dropped), deduplicate full rows keeping the first
/// occurrence, then assign internship ids 1..N in surviving row order.
///
/// The raw location text participates in row identity, so two listings that
/// differ only in location text stay distinct rows even when they later parse
/// to the same location triple.
pub fn build_internships(
    cleaned: Vec<CleanInternship>,
    companies: &[Company],
) -> Vec<Internship> {
    let by_slug: HashMap<&str, u32> = companies
        .iter()
        .map(|c| (c.normalized_slug.as_str(), c.company_id))
        .collect();

    let mut seen: HashSet<RowKey> = HashSet::new();
    let mut internships: Vec<Internship> = Vec::new();

    for record in cleaned {
        let company_id = by_slug.get(record.normalized_slug.as_str()).copied();
        let key = RowKey::new(&record, company_id);
        if !seen.insert(key) {
            continue;
        }
        internships.push(Internship {
            internship_id: internships.len() as u32 + 1,
            company_id,
            title: record.title,
            location: record.location,
            hourly_rate: record.hourly_rate,
            monthly_pay: record.monthly_pay,
            degree_requirement: record.degree_requirement,
            perks_clean: record.perks_clean,
            apply_link: record.apply_link,
        });
    }

    debug!(internships = internships.len(), "assembled internship table");
    internships
}

pub fn build_snapshot(
    internships: Vec<Internship>,
    companies: Vec<Company>,
    locations: Vec<Location>,
    internship_locations: Vec<InternshipLocation>,
    industries: Vec<Industry>,
    company_industries: Vec<CompanyIndustry>,
) -> WarehouseSnapshot {
    WarehouseSnapshot {
        internships,
        companies,
        locations,
        internship_locations,
        industries,
        company_industries,
    }
}

/// Full-row identity over the projected internship columns. Float cells
/// compare by bit pattern so the key can live in a `HashSet`.
#[derive(PartialEq, Eq, Hash)]
struct RowKey {
    company_id: Option<u32>,
    title: Option<String>,
    location: Option<String>,
    hourly_rate_bits: Option<u64>,
    monthly_pay_bits: Option<u64>,
    degree_requirement: Option<DegreeRequirement>,
    perks_clean: Option<String>,
    apply_link: Option<String>,
}

impl RowKey {
    fn new(record: &CleanInternship, company_id: Option<u32>) -> Self {
        Self {
            company_id,
            title: record.title.clone(),
            location: record.location.clone(),
            hourly_rate_bits: record.hourly_rate.map(f64::to_bits),
            monthly_pay_bits: record.monthly_pay.map(f64::to_bits),
            degree_requirement: record.degree_requirement,
            perks_clean: record.perks_clean.clone(),
            apply_link: record.apply_link.clone(),
        }
    }
}
