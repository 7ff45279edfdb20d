use std::collections::HashSet;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use iwh_core::storage::{RecordSource, WarehouseSink};

use crate::observability::metrics;
use crate::pipeline::processing::{assemble, clean, relate, resolve};
use crate::pipeline::transform_config::TransformConfig;

/// Use case for one complete transform run: fetch the three raw record sets,
/// clean, resolve, relate, assemble, and hand the snapshot to the sink.
///
/// The transform itself is synchronous and pure; only the collaborator seams
/// are async. A source or sink failure terminates the run — there is no
/// partial-result contract, so the sink sees the complete snapshot or nothing.
pub struct TransformUseCase {
    source: Box<dyn RecordSource>,
    sink: Box<dyn WarehouseSink>,
    config: TransformConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransformRunSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub internships: usize,
    pub companies: usize,
    pub locations: usize,
    pub internship_locations: usize,
    pub industries: usize,
    pub company_industries: usize,
}

impl TransformUseCase {
    pub fn new(
        source: Box<dyn RecordSource>,
        sink: Box<dyn WarehouseSink>,
        config: TransformConfig,
    ) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }

    pub async fn run(&self) -> Result<TransformRunSummary> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        info!(%run_id, "🔄 Starting transform run");

        let raw_internships = self.source.fetch_internships().await?;
        let raw_profiles = self.source.fetch_company_profiles().await?;
        let raw_reviews = self.source.fetch_review_profiles().await?;
        info!(
            internships = raw_internships.len(),
            company_profiles = raw_profiles.len(),
            review_profiles = raw_reviews.len(),
            "Fetched raw record sets"
        );

        let cleaned = clean::clean_internships(raw_internships);
        let profiles = clean::clean_company_profiles(raw_profiles);
        let reviews = clean::clean_review_profiles(raw_reviews);
        metrics::clean::internships_processed(cleaned.len());
        metrics::clean::company_profiles_processed(profiles.len());
        metrics::clean::review_profiles_processed(reviews.len());
        metrics::clean::degree_requirements_found(
            cleaned
                .iter()
                .filter(|i| i.degree_requirement.is_some())
                .count(),
        );

        let levels_slugs: HashSet<String> =
            profiles.iter().map(|p| p.normalized_slug.clone()).collect();
        let review_slugs: HashSet<String> =
            reviews.iter().map(|r| r.normalized_slug.clone()).collect();
        let single_source = levels_slugs.symmetric_difference(&review_slugs).count();

        let companies = resolve::resolve_companies(profiles, reviews);
        metrics::resolve::companies_resolved(companies.len());
        metrics::resolve::single_source_companies(single_source);
        info!(
            companies = companies.len(),
            single_source, "Resolved company entities"
        );

        let cleaned_count = cleaned.len();
        let internships = assemble::build_internships(cleaned, &companies);
        metrics::assemble::internships_kept(internships.len());
        metrics::assemble::duplicate_rows_dropped(cleaned_count - internships.len());

        let (industries, company_industries) =
            relate::extract_industries(&companies, self.config.dedupe_company_industries);
        metrics::relate::industries_extracted(industries.len());
        metrics::relate::company_industry_rows(company_industries.len());

        let (locations, internship_locations) = relate::extract_locations(&internships);
        metrics::relate::locations_extracted(locations.len());
        metrics::relate::internship_location_rows(internship_locations.len());

        let snapshot = assemble::build_snapshot(
            internships,
            companies,
            locations,
            internship_locations,
            industries,
            company_industries,
        );
        for (table, rows) in snapshot.table_counts() {
            info!(table, rows, "Assembled output table");
        }

        self.sink.load(&snapshot).await?;
        metrics::assemble::snapshot_loaded();

        let finished_at = Utc::now();
        info!(%run_id, "✅ Transform run completed");

        Ok(TransformRunSummary {
            run_id,
            started_at,
            finished_at,
            internships: snapshot.internships.len(),
            companies: snapshot.companies.len(),
            locations: snapshot.locations.len(),
            internship_locations: snapshot.internship_locations.len(),
            industries: snapshot.industries.len(),
            company_industries: snapshot.company_industries.len(),
        })
    }
}
