use super::DiscoveryQueryService;
use crate::{
    application::{
        dto::{OffsetPage, Session},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        passion::PassionCatalog,
        profile::{ProfileSearchRequest, SearchResult},
        search::FilterCriteria,
    },
};

/// Rows per discovery page.
pub const PAGE_SIZE: u32 = 10;

pub struct SearchProfilesQuery {
    pub criteria: FilterCriteria,
    pub page: u32,
}

/// Zero-based row offset of a 1-based page.
pub fn page_offset(page: u32) -> ApplicationResult<u32> {
    if page == 0 {
        return Err(ApplicationError::validation("page numbers start at 1"));
    }
    (page - 1)
        .checked_mul(PAGE_SIZE)
        .ok_or_else(|| ApplicationError::validation("page number out of range"))
}

/// Translate filter criteria into the remote search arguments.
///
/// Selected passions unknown to `catalog` are dropped. With nothing left to
/// filter on, the passion filter is omitted entirely.
pub fn build_request(
    criteria: &FilterCriteria,
    page: u32,
    viewer: Option<&Session>,
    catalog: &PassionCatalog,
) -> ApplicationResult<ProfileSearchRequest> {
    let offset = page_offset(page)?;

    let translation = catalog.ids_for_names(criteria.passion_names.iter());
    if !translation.missing.is_empty() {
        tracing::debug!(missing = ?translation.missing, "dropping passions missing from catalog");
    }
    let passion_ids = if translation.found.is_empty() {
        None
    } else {
        Some(translation.found)
    };

    Ok(ProfileSearchRequest {
        query: criteria.keyword_filter().map(str::to_string),
        location: criteria.location_filter().map(str::to_string),
        min_age: criteria.min_age,
        max_age: criteria.max_age,
        language: criteria.language_filter().map(str::to_string),
        gender: criteria.gender,
        passion_ids,
        limit: PAGE_SIZE,
        offset,
        current_user_id: viewer.map(|session| session.user_id),
    })
}

impl DiscoveryQueryService {
    pub async fn search_profiles(
        &self,
        viewer: Option<&Session>,
        catalog: &PassionCatalog,
        query: SearchProfilesQuery,
    ) -> ApplicationResult<OffsetPage<SearchResult>> {
        let request = build_request(&query.criteria, query.page, viewer, catalog)?;
        self.execute(request, query.page).await
    }

    async fn execute(
        &self,
        request: ProfileSearchRequest,
        page: u32,
    ) -> ApplicationResult<OffsetPage<SearchResult>> {
        let limit = request.limit as usize;
        let mut results = self.gateway.search(request).await?;
        if results.len() > limit {
            tracing::warn!(
                returned = results.len(),
                limit,
                "search backend returned more rows than requested"
            );
            results.truncate(limit);
        }

        Ok(OffsetPage::new(results, page, PAGE_SIZE))
    }
}
