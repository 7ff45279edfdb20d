//! Metrics for the transform stage, following Prometheus naming conventions.

use std::fmt;

/// Enum representing all metric names used by the transform.
/// This eliminates magic strings and provides compile-time safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Clean metrics
    CleanInternshipsProcessed,
    CleanCompanyProfilesProcessed,
    CleanReviewProfilesProcessed,
    CleanDegreeRequirementsFound,

    // Resolve metrics
    ResolveCompaniesResolved,
    ResolveSingleSourceCompanies,

    // Relate metrics
    RelateIndustriesExtracted,
    RelateCompanyIndustryRows,
    RelateLocationsExtracted,
    RelateInternshipLocationRows,

    // Assemble metrics
    AssembleInternshipsKept,
    AssembleDuplicateRowsDropped,
    AssembleSnapshotsLoaded,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::CleanInternshipsProcessed => "iwh_clean_internships_processed_total",
            MetricName::CleanCompanyProfilesProcessed => {
                "iwh_clean_company_profiles_processed_total"
            }
            MetricName::CleanReviewProfilesProcessed => "iwh_clean_review_profiles_processed_total",
            MetricName::CleanDegreeRequirementsFound => "iwh_clean_degree_requirements_found_total",

            MetricName::ResolveCompaniesResolved => "iwh_resolve_companies_resolved_total",
            MetricName::ResolveSingleSourceCompanies => "iwh_resolve_single_source_companies_total",

            MetricName::RelateIndustriesExtracted => "iwh_relate_industries_extracted_total",
            MetricName::RelateCompanyIndustryRows => "iwh_relate_company_industry_rows_total",
            MetricName::RelateLocationsExtracted => "iwh_relate_locations_extracted_total",
            MetricName::RelateInternshipLocationRows => "iwh_relate_internship_location_rows_total",

            MetricName::AssembleInternshipsKept => "iwh_assemble_internships_kept_total",
            MetricName::AssembleDuplicateRowsDropped => "iwh_assemble_duplicate_rows_dropped_total",
            MetricName::AssembleSnapshotsLoaded => "iwh_assemble_snapshots_loaded_total",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub mod clean {
    use super::MetricName;

    pub fn internships_processed(count: usize) {
        ::metrics::counter!(MetricName::CleanInternshipsProcessed.as_str()).increment(count as u64);
    }

    pub fn company_profiles_processed(count: usize) {
        ::metrics::counter!(MetricName::CleanCompanyProfilesProcessed.as_str())
            .increment(count as u64);
    }

    pub fn review_profiles_processed(count: usize) {
        ::metrics::counter!(MetricName::CleanReviewProfilesProcessed.as_str())
            .increment(count as u64);
    }

    pub fn degree_requirements_found(count: usize) {
        ::metrics::counter!(MetricName::CleanDegreeRequirementsFound.as_str())
            .increment(count as u64);
    }
}

pub mod resolve {
    use super::MetricName;

    pub fn companies_resolved(count: usize) {
        ::metrics::counter!(MetricName::ResolveCompaniesResolved.as_str()).increment(count as u64);
    }

    pub fn single_source_companies(count: usize) {
        ::metrics::counter!(MetricName::ResolveSingleSourceCompanies.as_str())
            .increment(count as u64);
    }
}

pub mod relate {
    use super::MetricName;

    pub fn industries_extracted(count: usize) {
        ::metrics::counter!(MetricName::RelateIndustriesExtracted.as_str())
            .increment(count as u64);
    }

    pub fn company_industry_rows(count: usize) {
        ::metrics::counter!(MetricName::RelateCompanyIndustryRows.as_str())
            .increment(count as u64);
    }

    pub fn locations_extracted(count: usize) {
        ::metrics::counter!(MetricName::RelateLocationsExtracted.as_str()).increment(count as u64);
    }

    pub fn internship_location_rows(count: usize) {
        ::metrics::counter!(MetricName::RelateInternshipLocationRows.as_str())
            .increment(count as u64);
    }
}

pub mod assemble {
    use super::MetricName;

    pub fn internships_kept(count: usize) {
        ::metrics::counter!(MetricName::AssembleInternshipsKept.as_str()).increment(count as u64);
    }

    pub fn duplicate_rows_dropped(count: usize) {
        ::metrics::counter!(MetricName::AssembleDuplicateRowsDropped.as_str())
            .increment(count as u64);
    }

    pub fn snapshot_loaded() {
        ::metrics::counter!(MetricName::AssembleSnapshotsLoaded.as_str()).increment(1);
    }
}
