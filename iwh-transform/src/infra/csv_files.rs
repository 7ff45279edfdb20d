//! CSV-backed implementations of the collaborator seams. The scraper stages
//! its raw pulls as one CSV per source in a directory; the loader picks the
//! six export files up from another.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use iwh_core::common::error::{Result, WarehouseError};
use iwh_core::domain::{
    RawCompanyRecord, RawInternshipRecord, RawReviewRecord, WarehouseSnapshot,
};
use iwh_core::storage::{RecordSource, WarehouseSink};

pub const INTERNSHIPS_RAW_FILE: &str = "internships_raw.csv";
pub const COMPANIES_RAW_FILE: &str = "companies_raw.csv";
pub const SIMPLIFY_RAW_FILE: &str = "simplify_raw.csv";

const INTERNSHIP_COLUMNS: &[&str] = &[
    "company_slug",
    "company_name",
    "title",
    "location",
    "hourly_rate",
    "monthly_pay",
    "perks",
    "apply_link",
];

const COMPANY_COLUMNS: &[&str] = &[
    "company_slug",
    "description",
    "website",
    "twitter",
    "linkedin",
    "year_founded",
    "num_employees",
    "headquarters",
];

const REVIEW_COLUMNS: &[&str] = &[
    "company_name",
    "company_simplify_slug",
    "simplify_url",
    "simplify_take",
    "believer_points",
    "critic_points",
    "what_makes_unique",
    "benefits",
    "about_text",
    "simplify_rating",
    "competitive_edge",
    "growth_potential",
    "rating_differentiation",
    "overview",
    "founded_year",
    "company_size",
    "company_stage",
    "total_funding",
    "simplify_headquarters",
    "industries",
];

/// Reads the three staged raw CSVs from a directory.
pub struct CsvRecordSource {
    dir: PathBuf,
}

impl CsvRecordSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read_records<T: DeserializeOwned>(&self, file: &str, required: &[&str]) -> Result<Vec<T>> {
        let path = self.dir.join(file);
        let mut reader = csv::Reader::from_path(&path).map_err(|e| WarehouseError::Source {
            message: format!("{}: {}", path.display(), e),
        })?;

        let headers = reader
            .headers()
            .map_err(|e| WarehouseError::Source {
                message: format!("{}: {}", path.display(), e),
            })?
            .clone();
        check_headers(&path, &headers, required)?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: T = row.map_err(|e| WarehouseError::Source {
                message: format!("{}: {}", path.display(), e),
            })?;
            records.push(record);
        }
        debug!(file, rows = records.len(), "read staged records");
        Ok(records)
    }
}

fn check_headers(path: &Path, headers: &csv::StringRecord, required: &[&str]) -> Result<()> {
    for column in required {
        if !headers.iter().any(|header| header == *column) {
            return Err(WarehouseError::MissingColumn(format!(
                "{} in {}",
                column,
                path.display()
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl RecordSource for CsvRecordSource {
    async fn fetch_internships(&self) -> Result<Vec<RawInternshipRecord>> {
        self.read_records(INTERNSHIPS_RAW_FILE, INTERNSHIP_COLUMNS)
    }

    async fn fetch_company_profiles(&self) -> Result<Vec<RawCompanyRecord>> {
        self.read_records(COMPANIES_RAW_FILE, COMPANY_COLUMNS)
    }

    async fn fetch_review_profiles(&self) -> Result<Vec<RawReviewRecord>> {
        self.read_records(SIMPLIFY_RAW_FILE, REVIEW_COLUMNS)
    }
}

/// Writes the six export tables of a snapshot as CSVs into a directory.
pub struct CsvWarehouseSink {
    dir: PathBuf,
}

impl CsvWarehouseSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn write_table<T: Serialize>(&self, file: &str, rows: &[T]) -> Result<()> {
        let path = self.dir.join(file);
        let mut writer = csv::Writer::from_path(&path).map_err(|e| WarehouseError::Sink {
            message: format!("{}: {}", path.display(), e),
        })?;
        for row in rows {
            writer.serialize(row).map_err(|e| WarehouseError::Sink {
                message: format!("{}: {}", path.display(), e),
            })?;
        }
        writer.flush()?;
        info!(file, rows = rows.len(), "wrote export table");
        Ok(())
    }
}

#[async_trait]
impl WarehouseSink for CsvWarehouseSink {
    async fn load(&self, snapshot: &WarehouseSnapshot) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        self.write_table("export_internships.csv", &snapshot.internships)?;
        self.write_table("export_companies.csv", &snapshot.companies)?;
        self.write_table("export_locations.csv", &snapshot.locations)?;
        self.write_table(
            "export_internship_locations.csv",
            &snapshot.internship_locations,
        )?;
        self.write_table("export_industries.csv", &snapshot.industries)?;
        self.write_table("export_company_industries.csv", &snapshot.company_industries)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iwh_core::domain::{Industry, Location};
    use std::io::Write;

    fn stage_file(dir: &Path, name: &str, contents: &str) {
        let mut file = std::fs::File::create(dir.join(name)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[tokio::test]
    async fn reads_staged_internships() {
        let temp = tempfile::tempdir().unwrap();
        stage_file(
            temp.path(),
            INTERNSHIPS_RAW_FILE,
            "company_slug,company_name,title,location,hourly_rate,monthly_pay,perks,apply_link\n\
             acme,Acme,SWE Intern,\"Seattle, WA, USA - Summer 2025\",$45,,\"Undergrad\nGym\",https://example.com/a\n",
        );
        let source = CsvRecordSource::new(temp.path());
        let records = source.fetch_internships().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].company_slug.as_deref(), Some("acme"));
        assert_eq!(records[0].hourly_rate.as_deref(), Some("$45"));
        // empty cells read back as missing, not as empty strings
        assert_eq!(records[0].monthly_pay, None);
    }

    #[tokio::test]
    async fn missing_required_column_is_a_hard_failure() {
        let temp = tempfile::tempdir().unwrap();
        stage_file(
            temp.path(),
            INTERNSHIPS_RAW_FILE,
            "company_slug,company_name,title\nacme,Acme,SWE Intern\n",
        );
        let source = CsvRecordSource::new(temp.path());
        let err = source.fetch_internships().await.unwrap_err();
        assert!(matches!(err, WarehouseError::MissingColumn(_)));
    }

    #[tokio::test]
    async fn missing_staged_file_is_a_hard_failure() {
        let temp = tempfile::tempdir().unwrap();
        let source = CsvRecordSource::new(temp.path());
        assert!(source.fetch_internships().await.is_err());
    }

    #[tokio::test]
    async fn writes_all_six_export_files() {
        let temp = tempfile::tempdir().unwrap();
        let sink = CsvWarehouseSink::new(temp.path().join("exports"));
        let snapshot = WarehouseSnapshot {
            locations: vec![Location {
                location_id: 1,
                city: "Seattle".to_string(),
                state: "WA".to_string(),
                country: "USA".to_string(),
            }],
            industries: vec![Industry {
                industry_id: 1,
                name: "AI".to_string(),
            }],
            ..Default::default()
        };
        sink.load(&snapshot).await.unwrap();

        for file in [
            "export_internships.csv",
            "export_companies.csv",
            "export_locations.csv",
            "export_internship_locations.csv",
            "export_industries.csv",
            "export_company_industries.csv",
        ] {
            assert!(temp.path().join("exports").join(file).exists(), "{file}");
        }

        let locations = std::fs::read_to_string(temp.path().join("exports/export_locations.csv")).unwrap();
        assert!(locations.starts_with("location_id,city,state,country"));
        assert!(locations.contains("1,Seattle,WA,USA"));
    }
}
