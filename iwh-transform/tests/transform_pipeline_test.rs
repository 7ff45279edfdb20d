use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use iwh_core::common::error::Result;
use iwh_core::domain::{
    RawCompanyRecord, RawInternshipRecord, RawReviewRecord, WarehouseSnapshot,
};
use iwh_core::storage::{RecordSource, WarehouseSink};
use iwh_transform::app::TransformUseCase;
use iwh_transform::pipeline::transform_config::TransformConfig;

struct FixtureSource {
    internships: Vec<RawInternshipRecord>,
    profiles: Vec<RawCompanyRecord>,
    reviews: Vec<RawReviewRecord>,
}

#[async_trait]
impl RecordSource for FixtureSource {
    async fn fetch_internships(&self) -> Result<Vec<RawInternshipRecord>> {
        Ok(self.internships.clone())
    }

    async fn fetch_company_profiles(&self) -> Result<Vec<RawCompanyRecord>> {
        Ok(self.profiles.clone())
    }

    async fn fetch_review_profiles(&self) -> Result<Vec<RawReviewRecord>> {
        Ok(self.reviews.clone())
    }
}

struct CaptureSink {
    snapshot: Arc<tokio::sync::Mutex<Option<WarehouseSnapshot>>>,
}

#[async_trait]
impl WarehouseSink for CaptureSink {
    async fn load(&self, snapshot: &WarehouseSnapshot) -> Result<()> {
        *self.snapshot.lock().await = Some(snapshot.clone());
        Ok(())
    }
}

async fn run_transform(
    source: FixtureSource,
    config: TransformConfig,
) -> (WarehouseSnapshot, iwh_transform::app::TransformRunSummary) {
    let captured = Arc::new(tokio::sync::Mutex::new(None));
    let sink = CaptureSink {
        snapshot: captured.clone(),
    };
    let use_case = TransformUseCase::new(Box::new(source), Box::new(sink), config);
    let summary = use_case.run().await.unwrap();
    let snapshot = captured.lock().await.take().unwrap();
    (snapshot, summary)
}

fn internship(slug: &str, title: &str, location: &str, perks: &str) -> RawInternshipRecord {
    RawInternshipRecord {
        company_slug: Some(slug.to_string()),
        company_name: Some(slug.to_uppercase()),
        title: Some(title.to_string()),
        location: Some(location.to_string()),
        hourly_rate: Some("$45".to_string()),
        monthly_pay: None,
        perks: Some(perks.to_string()),
        apply_link: Some(format!("https://example.com/{slug}")),
    }
}

fn profile(slug: &str) -> RawCompanyRecord {
    RawCompanyRecord {
        company_slug: Some(slug.to_string()),
        description: Some(format!("{slug} builds things")),
        year_founded: Some("2,001".to_string()),
        num_employees: Some("5000".to_string()),
        ..Default::default()
    }
}

fn review(slug: &str, industries: &str) -> RawReviewRecord {
    RawReviewRecord {
        company_name: Some(slug.to_uppercase()),
        company_simplify_slug: Some(slug.to_string()),
        simplify_url: Some(format!("https://simplify.jobs/c/{slug}")),
        founded_year: Some("1999".to_string()),
        industries: Some(industries.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn shared_location_distinct_internships() {
    // Two listings identical in every projected column except the raw
    // location text; both texts parse to the same (city, state, country).
    let source = FixtureSource {
        internships: vec![
            internship("acme", "SWE Intern", "Seattle, WA, USA - Summer 2025", "Undergrad\nGym"),
            internship("acme", "SWE Intern", "Seattle, WA, USA - Fall 2025", "Undergrad\nGym"),
        ],
        profiles: vec![profile("acme")],
        reviews: vec![],
    };
    let (snapshot, _) = run_transform(source, TransformConfig::default()).await;

    // both rows survive full-row dedup because the raw text differs
    assert_eq!(snapshot.internships.len(), 2);
    let ids: Vec<u32> = snapshot
        .internships
        .iter()
        .map(|i| i.internship_id)
        .collect();
    assert_eq!(ids, vec![1, 2]);

    // but they share one deduplicated location
    assert_eq!(snapshot.locations.len(), 1);
    assert_eq!(snapshot.internship_locations.len(), 2);
    assert_eq!(
        snapshot.internship_locations[0].location_id,
        snapshot.internship_locations[1].location_id
    );
}

#[tokio::test]
async fn outer_join_preserves_single_source_companies() {
    let source = FixtureSource {
        internships: vec![internship("acme", "SWE Intern", "Remote", "Free lunch")],
        profiles: vec![profile("acme")],
        reviews: vec![review("zenith", "AI")],
    };
    let (snapshot, _) = run_transform(source, TransformConfig::default()).await;

    assert_eq!(snapshot.companies.len(), 2);
    let slugs: Vec<&str> = snapshot
        .companies
        .iter()
        .map(|c| c.normalized_slug.as_str())
        .collect();
    assert_eq!(slugs, vec!["acme", "zenith"]);

    let acme = &snapshot.companies[0];
    assert!(acme.description.is_some());
    assert_eq!(acme.year_founded, Some(2001.0));
    assert!(acme.company_name.is_none());
    assert!(acme.founded_year.is_none());

    let zenith = &snapshot.companies[1];
    assert!(zenith.description.is_none());
    assert_eq!(zenith.founded_year, Some(1999.0));

    // dense permutation of 1..N
    let mut ids: Vec<u32> = snapshot.companies.iter().map(|c| c.company_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);

    // the listing resolved against the levels-side company
    assert_eq!(snapshot.internships[0].company_id, Some(acme.company_id));
}

#[tokio::test]
async fn junction_rows_preserve_raw_token_multiplicity() {
    let source = FixtureSource {
        internships: vec![],
        profiles: vec![],
        reviews: vec![review("acme", "AI, Fintech, AI")],
    };
    let (snapshot, _) = run_transform(source, TransformConfig::default()).await;

    let names: Vec<&str> = snapshot
        .industries
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(names, vec!["AI", "Fintech"]);
    // three junction rows, the repeated AI token included twice
    assert_eq!(snapshot.company_industries.len(), 3);
}

#[tokio::test]
async fn junction_dedupe_is_opt_in() {
    let source = FixtureSource {
        internships: vec![],
        profiles: vec![],
        reviews: vec![review("acme", "AI, Fintech, AI")],
    };
    let config = TransformConfig {
        dedupe_company_industries: true,
    };
    let (snapshot, _) = run_transform(source, config).await;
    assert_eq!(snapshot.company_industries.len(), 2);
}

#[tokio::test]
async fn snapshot_is_referentially_consistent() {
    let source = FixtureSource {
        internships: vec![
            internship("acme", "SWE Intern", "Seattle, WA, USA - Summer 2025", "Undergrad\nGym"),
            internship("zenith", "Data Intern", "New York, NY", "PhD"),
            internship("orphan", "Quant Intern", "Remote", "Free lunch"),
        ],
        profiles: vec![profile("acme")],
        reviews: vec![review("zenith", "AI, Fintech"), review("acme", "Robotics")],
    };
    let (snapshot, summary) = run_transform(source, TransformConfig::default()).await;

    let company_ids: HashSet<u32> = snapshot.companies.iter().map(|c| c.company_id).collect();
    let industry_ids: HashSet<u32> = snapshot.industries.iter().map(|i| i.industry_id).collect();
    let location_ids: HashSet<u32> = snapshot.locations.iter().map(|l| l.location_id).collect();
    let internship_ids: HashSet<u32> = snapshot
        .internships
        .iter()
        .map(|i| i.internship_id)
        .collect();

    for row in &snapshot.company_industries {
        assert!(company_ids.contains(&row.company_id));
        assert!(industry_ids.contains(&row.industry_id));
    }
    for row in &snapshot.internship_locations {
        assert!(internship_ids.contains(&row.internship_id));
        assert!(location_ids.contains(&row.location_id));
        assert!(!row.is_remote);
    }
    for row in &snapshot.internships {
        if let Some(company_id) = row.company_id {
            assert!(company_ids.contains(&company_id));
        }
    }

    // the listing with no profile in either source keeps a null company key
    let orphan = snapshot
        .internships
        .iter()
        .find(|i| i.title.as_deref() == Some("Quant Intern"))
        .unwrap();
    assert_eq!(orphan.company_id, None);

    assert_eq!(summary.internships, snapshot.internships.len());
    assert_eq!(summary.companies, snapshot.companies.len());
    assert_eq!(summary.company_industries, snapshot.company_industries.len());
}

#[tokio::test]
async fn empty_sources_produce_an_empty_snapshot() {
    let source = FixtureSource {
        internships: vec![],
        profiles: vec![],
        reviews: vec![],
    };
    let (snapshot, summary) = run_transform(source, TransformConfig::default()).await;
    for (_, rows) in snapshot.table_counts() {
        assert_eq!(rows, 0);
    }
    assert!(summary.finished_at >= summary.started_at);
}
