use crate::common::error::Result;
use crate::domain::{RawCompanyRecord, RawInternshipRecord, RawReviewRecord, WarehouseSnapshot};
use async_trait::async_trait;

/// Scraper-side collaborator seam. Supplies the three raw record sets the
/// transform consumes; fetching and staging are the scraper's problem.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_internships(&self) -> Result<Vec<RawInternshipRecord>>;
    async fn fetch_company_profiles(&self) -> Result<Vec<RawCompanyRecord>>;
    async fn fetch_review_profiles(&self) -> Result<Vec<RawReviewRecord>>;
}

/// Loader-side collaborator seam. Receives the complete snapshot of one run;
/// partial loads are not part of the contract.
#[async_trait]
pub trait WarehouseSink: Send + Sync {
    async fn load(&self, snapshot: &WarehouseSnapshot) -> Result<()>;
}
