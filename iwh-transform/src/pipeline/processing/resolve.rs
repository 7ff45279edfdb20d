use std::collections::BTreeMap;

use iwh_core::domain::Company;
use tracing::debug;

use super::clean::{CleanCompanyProfile, CleanReviewProfile};

/// Full outer join of the two company-profile sources on normalized slug.
///
/// Every slug present in either source appears exactly once; the absent
/// source's columns stay `None`. Duplicate slugs within one source keep the
/// first occurrence. Rows are keyed through a `BTreeMap` so company ids are
/// assigned 1..N in sorted-slug order and the mapping is reproducible across
/// runs regardless of input order.
pub fn resolve_companies(
    profiles: Vec<CleanCompanyProfile>,
    reviews: Vec<CleanReviewProfile>,
) -> Vec<Company> {
    let mut joined: BTreeMap<String, JoinedSources> = BTreeMap::new();

    for profile in profiles {
        let slot = joined.entry(profile.normalized_slug.clone()).or_default();
        if slot.levels.is_none() {
            slot.levels = Some(profile);
        }
    }
    for review in reviews {
        let slot = joined.entry(review.normalized_slug.clone()).or_default();
        if slot.simplify.is_none() {
            slot.simplify = Some(review);
        }
    }

    debug!(companies = joined.len(), "resolved distinct normalized slugs");

    joined
        .into_iter()
        .enumerate()
        .map(|(index, (slug, sources))| {
            merge_company(index as u32 + 1, slug, sources.levels, sources.simplify)
        })
        .collect()
}

#[derive(Default)]
struct JoinedSources {
    levels: Option<CleanCompanyProfile>,
    simplify: Option<CleanReviewProfile>,
}

/// Every output column is assigned from exactly one named source here, so
/// provenance is declared rather than inferred from column-name collisions.
/// Near-synonyms from the two sources (year_founded/founded_year,
/// num_employees/company_size, headquarters/simplify_headquarters) stay
/// separate columns.
fn merge_company(
    company_id: u32,
    normalized_slug: String,
    levels: Option<CleanCompanyProfile>,
    simplify: Option<CleanReviewProfile>,
) -> Company {
    let levels = levels.unwrap_or_default();
    let simplify = simplify.unwrap_or_default();
    Company {
        company_id,
        normalized_slug,
        // levels-side columns
        description: levels.description,
        website: levels.website,
        twitter: levels.twitter,
        linkedin: levels.linkedin,
        year_founded: levels.year_founded,
        num_employees: levels.num_employees,
        headquarters: levels.headquarters,
        // simplify-side columns
        company_name: simplify.company_name,
        overview: simplify.overview,
        founded_year: simplify.founded_year,
        company_size: simplify.company_size,
        simplify_headquarters: simplify.simplify_headquarters,
        company_stage: simplify.company_stage,
        total_funding: simplify.total_funding,
        simplify_url: simplify.simplify_url,
        simplify_take: simplify.simplify_take,
        believer_points: simplify.believer_points,
        critic_points: simplify.critic_points,
        what_makes_unique: simplify.what_makes_unique,
        benefits: simplify.benefits,
        about_text: simplify.about_text,
        simplify_rating: simplify.simplify_rating,
        competitive_edge: simplify.competitive_edge,
        growth_potential: simplify.growth_potential,
        rating_differentiation: simplify.rating_differentiation,
        industries: simplify.industries,
    }
}
