use serde::{Deserialize, Serialize};

/// One internship listing row as delivered by the scraper. All cells are
/// optional because the listing table is scraped free text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawInternshipRecord {
    pub company_slug: Option<String>,
    pub company_name: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub hourly_rate: Option<String>,
    pub monthly_pay: Option<String>,
    pub perks: Option<String>,
    pub apply_link: Option<String>,
}

/// Company metadata scraped from the levels-style company pages (source A).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCompanyRecord {
    pub company_slug: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub year_founded: Option<String>,
    pub num_employees: Option<String>,
    pub headquarters: Option<String>,
}

/// Company review profile scraped from the simplify-style pages (source B).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawReviewRecord {
    pub company_name: Option<String>,
    pub company_simplify_slug: Option<String>,
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
    pub overview: Option<String>,
    pub founded_year: Option<String>,
    pub company_size: Option<String>,
    pub company_stage: Option<String>,
    pub total_funding: Option<String>,
    pub simplify_headquarters: Option<String>,
    pub industries: Option<String>,
}

/// Closed set of degree requirements a listing can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DegreeRequirement {
    Undergrad,
    Masters,
    PhD,
}

impl DegreeRequirement {
    pub fn as_str(&self) -> &'static str {
        match self {
            DegreeRequirement::Undergrad => "Undergrad",
            DegreeRequirement::Masters => "Masters",
            DegreeRequirement::PhD => "PhD",
        }
    }
}

impl std::fmt::Display for DegreeRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Internship {
    pub internship_id: u32,
    pub company_id: Option<u32>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub hourly_rate: Option<f64>,
    pub monthly_pay: Option<f64>,
    pub degree_requirement: Option<DegreeRequirement>,
    pub perks_clean: Option<String>,
    pub apply_link: Option<String>,
}

/// One row per distinct normalized slug after the two-source outer join.
/// Fields from the two sources are kept as separate columns; a company seen
/// in only one source carries `None` for the other source's columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub company_id: u32,
    pub normalized_slug: String,
    pub company_name: Option<String>,
    pub description: Option<String>,
    pub overview: Option<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub year_founded: Option<f64>,
    pub founded_year: Option<f64>,
    pub num_employees: Option<f64>,
    pub company_size: Option<String>,
    pub headquarters: Option<String>,
    pub simplify_headquarters: Option<String>,
    pub company_stage: Option<String>,
    pub total_funding: Option<String>,
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

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub location_id: u32,
    pub city: String,
    pub state: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    pub industry_id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyIndustry {
    pub company_id: u32,
    pub industry_id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternshipLocation {
    pub internship_id: u32,
    pub location_id: u32,
    pub is_remote: bool,
}

/// The complete relational snapshot of one transform run. Handed to the
/// loader as a unit; a run either produces all six tables or nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WarehouseSnapshot {
    pub internships: Vec<Internship>,
    pub companies: Vec<Company>,
    pub locations: Vec<Location>,
    pub internship_locations: Vec<InternshipLocation>,
    pub industries: Vec<Industry>,
    pub company_industries: Vec<CompanyIndustry>,
}

impl WarehouseSnapshot {
    pub fn table_counts(&self) -> [(&'static str, usize); 6] {
        [
            ("internships", self.internships.len()),
            ("companies", self.companies.len()),
            ("locations", self.locations.len()),
            ("internship_locations", self.internship_locations.len()),
            ("industries", self.industries.len()),
            ("company_industries", self.company_industries.len()),
        ]
    }
}
