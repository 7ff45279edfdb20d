use once_cell::sync::Lazy;
use regex::Regex;

use iwh_core::domain::{
    DegreeRequirement, RawCompanyRecord, RawInternshipRecord, RawReviewRecord,
};

use super::slug::normalize_slug;

static DEGREE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?P<kw>undergrad|masters|phd)\b").unwrap());

// Perk cells carry either a real line break or the escaped two-character
// sequence, depending on how the scraper staged them.
static PERKS_SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\n|\n").unwrap());

/// Internship listing after field cleaning, keyed by the normalized slug.
#[derive(Debug, Clone, Default)]
pub struct CleanInternship {
    pub normalized_slug: String,
    pub company_name: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub hourly_rate: Option<f64>,
    pub monthly_pay: Option<f64>,
    pub degree_requirement: Option<DegreeRequirement>,
    pub perks_clean: Option<String>,
    pub apply_link: Option<String>,
}

/// Levels-style company profile after field cleaning.
#[derive(Debug, Clone, Default)]
pub struct CleanCompanyProfile {
    pub normalized_slug: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub year_founded: Option<f64>,
    pub num_employees: Option<f64>,
    pub headquarters: Option<String>,
}

/// Simplify-style review profile after field cleaning.
#[derive(Debug, Clone, Default)]
pub struct CleanReviewProfile {
    pub normalized_slug: String,
    pub company_name: Option<String>,
    pub overview: Option<String>,
    pub founded_year: Option<f64>,
    pub company_size: Option<String>,
    pub company_stage: Option<String>,
    pub total_funding: Option<String>,
    pub simplify_headquarters: Option<String>,
    pub simplify_url: Option<String>,
    pub simplify_take: Option<String>,
    pub believer_points: Option<String>,
    pub critic_points: Option<String>,
    pub what_makes_unique: Option<String>,
    pub benefits: Option<String>,
    pub about_text: Option<String>,
    pub simplify_rating: Option<String>,
    pub competitive_edge: Option<String>,
    pub growth_potential: Option<String>,
    pub rating_differentiation: Option<String>,
    pub industries: Option<String>,
}

/// Best-effort numeric coercion. Tolerates currency symbols, thousands
/// separators and surrounding whitespace; anything that still fails to parse
/// degrades to `None` rather than an error.
pub fn coerce_numeric(cell: Option<&str>) -> Option<f64> {
    let raw = cell?.trim();
    if raw.is_empty() {
        return None;
    }
    let stripped: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    stripped.trim().parse::<f64>().ok()
}

/// Splits a leading degree requirement off a perks cell.
///
/// The cell is trimmed and stripped of enclosing quotes, then split into at
/// most two parts on the first separator. A leading degree keyword yields
/// `(Some(degree), Some(rest))`; a keyword-only cell yields
/// `(Some(degree), Some(""))`; no keyword yields `(None, Some(text))`; a
/// missing cell yields `(None, None)`.
pub fn split_perks(cell: Option<&str>) -> (Option<DegreeRequirement>, Option<String>) {
    let Some(raw) = cell else {
        return (None, None);
    };
    let text = raw.trim().trim_matches('"');

    let mut parts = PERKS_SEPARATOR_RE.splitn(text, 2);
    let head = parts.next().unwrap_or("");
    let tail = parts.next();

    match leading_degree(head) {
        Some(degree) => match tail {
            Some(rest) => (Some(degree), Some(rest.trim().to_string())),
            None => (Some(degree), Some(String::new())),
        },
        None => (None, Some(text.to_string())),
    }
}

fn leading_degree(text: &str) -> Option<DegreeRequirement> {
    let caps = DEGREE_RE.captures(text)?;
    match caps.name("kw")?.as_str().to_ascii_lowercase().as_str() {
        "undergrad" => Some(DegreeRequirement::Undergrad),
        "masters" => Some(DegreeRequirement::Masters),
        _ => Some(DegreeRequirement::PhD),
    }
}

fn trim_cell(cell: Option<String>) -> Option<String> {
    cell.map(|s| s.trim().to_string())
}

fn clean_slug_cell(cell: Option<String>) -> Option<String> {
    cell.map(|s| s.trim().to_lowercase())
}

pub fn clean_internships(records: Vec<RawInternshipRecord>) -> Vec<CleanInternship> {
    records
        .into_iter()
        .map(|record| {
            let company_slug = clean_slug_cell(record.company_slug);
            let (degree_requirement, perks_clean) = split_perks(record.perks.as_deref());
            CleanInternship {
                normalized_slug: normalize_slug(company_slug.as_deref()),
                company_name: trim_cell(record.company_name),
                title: record.title,
                location: record.location,
                hourly_rate: coerce_numeric(record.hourly_rate.as_deref()),
                monthly_pay: coerce_numeric(record.monthly_pay.as_deref()),
                degree_requirement,
                perks_clean,
                apply_link: record.apply_link,
            }
        })
        .collect()
}

pub fn clean_company_profiles(records: Vec<RawCompanyRecord>) -> Vec<CleanCompanyProfile> {
    records
        .into_iter()
        .map(|record| {
            let company_slug = clean_slug_cell(record.company_slug);
            CleanCompanyProfile {
                normalized_slug: normalize_slug(company_slug.as_deref()),
                description: record.description,
                website: record.website,
                twitter: record.twitter,
                linkedin: record.linkedin,
                year_founded: coerce_numeric(record.year_founded.as_deref()),
                num_employees: coerce_numeric(record.num_employees.as_deref()),
                headquarters: record.headquarters,
            }
        })
        .collect()
}

pub fn clean_review_profiles(records: Vec<RawReviewRecord>) -> Vec<CleanReviewProfile> {
    records
        .into_iter()
        .map(|record| CleanReviewProfile {
            normalized_slug: normalize_slug(record.company_simplify_slug.as_deref()),
            company_name: trim_cell(record.company_name),
            overview: record.overview,
            founded_year: coerce_numeric(record.founded_year.as_deref()),
            company_size: record.company_size,
            company_stage: record.company_stage,
            total_funding: record.total_funding,
            simplify_headquarters: record.simplify_headquarters,
            simplify_url: record.simplify_url,
            simplify_take: record.simplify_take,
            believer_points: record.believer_points,
            critic_points: record.critic_points,
            what_makes_unique: record.what_makes_unique,
            benefits: record.benefits,
            about_text: record.about_text,
            simplify_rating: record.simplify_rating,
            competitive_edge: record.competitive_edge,
            growth_potential: record.growth_potential,
            rating_differentiation: record.rating_differentiation,
            industries: record.industries,
        })
        .collect()
}
