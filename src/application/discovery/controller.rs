use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{filter_store::FilterStore, notices::Notice};
use crate::{
    application::{
        commands::saved_searches::{
            DeleteSavedSearchCommand, SaveSearchCommand, SavedSearchCommandService,
        },
        dto::{OffsetPage, ResultCard, SavedSearchDto, Session},
        error::ApplicationResult,
        ports::session::SessionProvider,
        queries::{
            discovery::{DiscoveryQueryService, SearchProfilesQuery},
            passions::PassionQueryService,
        },
    },
    domain::{
        passion::PassionCatalog,
        profile::SearchResult,
        search::{FilterCriteria, FilterField},
    },
};

/// What happened to one requested search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Results for `page` were applied; `received` rows came back.
    Applied { page: u32, received: usize },
    /// A newer search was issued before this one finished; its rows were discarded.
    Stale,
    /// The backend call failed; displayed results are unchanged.
    Failed,
    /// The passion catalog has not loaded yet; the search runs once it has.
    Deferred,
    /// Nothing to do (e.g. load more with no further pages).
    Skipped,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved(SavedSearchDto),
    /// Blank name or anonymous visitor: no remote call was made.
    Skipped,
    Failed,
}

#[derive(Default)]
struct DiscoveryState {
    filters: FilterStore,
    results: Vec<SearchResult>,
    page: u32,
    has_more: bool,
    loading: bool,
    latest_token: u64,
    /// Criteria of the page-1 search behind `results`; later pages reuse them.
    applied_criteria: Option<FilterCriteria>,
    catalog: Option<Arc<PassionCatalog>>,
    search_deferred: bool,
    saved_searches: Vec<SavedSearchDto>,
    notices: Vec<Notice>,
}

struct SearchTicket {
    token: u64,
    page: u32,
    criteria: FilterCriteria,
    catalog: Arc<PassionCatalog>,
}

/// Discovery page state shared by the view and the event driver.
///
/// The state lock is never held across an `.await`. Each search takes a
/// ticket with a monotonically increasing token; only the response carrying
/// the latest token is applied.
pub struct DiscoveryController {
    queries: Arc<DiscoveryQueryService>,
    passions: Arc<PassionQueryService>,
    saved: Arc<SavedSearchCommandService>,
    sessions: Arc<dyn SessionProvider>,
    state: Mutex<DiscoveryState>,
}

impl DiscoveryController {
    pub fn new(
        queries: Arc<DiscoveryQueryService>,
        passions: Arc<PassionQueryService>,
        saved: Arc<SavedSearchCommandService>,
        sessions: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            queries,
            passions,
            saved,
            sessions,
            state: Mutex::new(DiscoveryState::default()),
        }
    }

    /// Load the catalog and the user's saved searches, then run the first search.
    pub async fn mount(&self) -> SearchOutcome {
        self.refresh_saved_searches().await;
        self.search_page(1).await
    }

    /// Fetch the catalog again. The loaded catalog is replaced only when the
    /// fetch succeeds. Runs a search that was waiting on it.
    pub async fn reload_catalog(&self) -> SearchOutcome {
        let deferred = match self.passions.load_catalog().await {
            Ok(catalog) => {
                let mut state = self.lock();
                state.catalog = Some(Arc::new(catalog));
                state.search_deferred
            }
            Err(err) => {
                let state = self.lock();
                if state.catalog.is_none() {
                    tracing::error!(error = %err, "failed to load passion catalog");
                    return SearchOutcome::Deferred;
                }
                tracing::warn!(error = %err, "catalog reload failed; keeping the loaded catalog");
                return SearchOutcome::Skipped;
            }
        };
        if deferred {
            self.search_page(1).await
        } else {
            SearchOutcome::Skipped
        }
    }

    pub fn set_field(&self, field: FilterField) -> bool {
        self.lock().filters.set_field(field)
    }

    pub async fn submit(&self) -> SearchOutcome {
        self.search_page(1).await
    }

    pub async fn load_more(&self) -> SearchOutcome {
        let next = {
            let state = self.lock();
            if state.loading || !state.has_more {
                return SearchOutcome::Skipped;
            }
            state.page + 1
        };
        self.search_page(next).await
    }

    pub async fn clear_filters(&self) -> SearchOutcome {
        {
            let mut state = self.lock();
            state.filters.reset_all();
            state.page = 0;
            state.has_more = false;
        }
        self.search_page(1).await
    }

    pub async fn apply_saved_search(&self, id: i64) -> SearchOutcome {
        let snapshot = self
            .lock()
            .saved_searches
            .iter()
            .find(|search| search.id == id)
            .cloned();
        let Some(snapshot) = snapshot else {
            tracing::warn!(saved_search_id = id, "saved search not in local list");
            return SearchOutcome::Skipped;
        };

        let Some(catalog) = self.ensure_catalog().await else {
            self.push_notice(Notice::error(
                "Passions are still loading. Try the saved search again shortly.",
            ));
            return SearchOutcome::Deferred;
        };

        {
            let mut state = self.lock();
            state.filters.load_from_snapshot(&snapshot, &catalog);
            state.page = 0;
            state.has_more = false;
        }
        self.search_page(1).await
    }

    pub async fn save_search(&self, name: &str) -> SaveOutcome {
        if name.trim().is_empty() {
            return SaveOutcome::Skipped;
        }
        let Some(session) = self.current_session().await else {
            tracing::debug!("save requested without a session");
            return SaveOutcome::Skipped;
        };
        let Some(catalog) = self.ensure_catalog().await else {
            self.push_notice(Notice::error("Could not save search: passions are unavailable."));
            return SaveOutcome::Failed;
        };

        let criteria = self.criteria();
        let command = SaveSearchCommand {
            name: name.to_string(),
            criteria,
        };
        match self.saved.save_search(&session, &catalog, command).await {
            Ok(saved) => {
                let message = format!("Saved search \"{}\".", saved.name);
                {
                    let mut state = self.lock();
                    state.saved_searches.push(saved.clone());
                    state.notices.push(Notice::info(message));
                }
                SaveOutcome::Saved(saved)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save search");
                self.push_notice(Notice::error("Could not save search. Please try again."));
                SaveOutcome::Failed
            }
        }
    }

    /// Remove a saved search remotely, then locally. Returns whether the
    /// remote delete succeeded.
    pub async fn delete_saved_search(&self, id: i64) -> bool {
        let Some(session) = self.current_session().await else {
            return false;
        };

        match self
            .saved
            .delete_saved_search(&session, DeleteSavedSearchCommand { id })
            .await
        {
            Ok(()) => {
                self.lock().saved_searches.retain(|search| search.id != id);
                true
            }
            Err(err) => {
                tracing::error!(error = %err, saved_search_id = id, "failed to delete saved search");
                self.push_notice(Notice::error("Could not delete saved search. Please try again."));
                false
            }
        }
    }

    pub async fn refresh_saved_searches(&self) {
        let Some(session) = self.current_session().await else {
            self.lock().saved_searches.clear();
            return;
        };
        match self.saved.list_saved_searches(&session).await {
            Ok(searches) => self.lock().saved_searches = searches,
            Err(err) => tracing::error!(error = %err, "failed to load saved searches"),
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.lock().filters.criteria().clone()
    }

    pub fn results(&self) -> Vec<SearchResult> {
        self.lock().results.clone()
    }

    pub fn cards(&self) -> Vec<ResultCard> {
        self.lock().results.iter().map(ResultCard::present).collect()
    }

    pub fn page(&self) -> u32 {
        self.lock().page
    }

    pub fn has_more(&self) -> bool {
        self.lock().has_more
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn catalog(&self) -> Option<Arc<PassionCatalog>> {
        self.lock().catalog.clone()
    }

    pub fn saved_searches(&self) -> Vec<SavedSearchDto> {
        self.lock().saved_searches.clone()
    }

    pub fn take_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut self.lock().notices)
    }

    /// Page 1 searches the current filters; later pages repeat the criteria
    /// of the applied page 1.
    async fn search_page(&self, page: u32) -> SearchOutcome {
        let Some(catalog) = self.ensure_catalog().await else {
            tracing::debug!(page, "search deferred until passion catalog loads");
            self.lock().search_deferred = true;
            return SearchOutcome::Deferred;
        };

        let ticket = {
            let mut state = self.lock();
            let criteria = if page == 1 {
                state.filters.criteria().clone()
            } else if let Some(applied) = &state.applied_criteria {
                applied.clone()
            } else {
                return SearchOutcome::Skipped;
            };
            state.search_deferred = false;
            state.latest_token += 1;
            state.loading = true;
            SearchTicket {
                token: state.latest_token,
                page,
                criteria,
                catalog,
            }
        };

        let session = self.current_session().await;
        let result = self
            .queries
            .search_profiles(
                session.as_ref(),
                &ticket.catalog,
                SearchProfilesQuery {
                    criteria: ticket.criteria.clone(),
                    page: ticket.page,
                },
            )
            .await;

        self.complete(&ticket, result)
    }

    fn complete(
        &self,
        ticket: &SearchTicket,
        result: ApplicationResult<OffsetPage<SearchResult>>,
    ) -> SearchOutcome {
        let mut state = self.lock();
        if ticket.token != state.latest_token {
            tracing::debug!(
                token = ticket.token,
                latest = state.latest_token,
                "discarding stale search response"
            );
            return SearchOutcome::Stale;
        }
        state.loading = false;

        match result {
            Ok(page) => {
                let received = page.items.len();
                if page.page == 1 {
                    state.results = page.items;
                    state.applied_criteria = Some(ticket.criteria.clone());
                } else {
                    state.results.extend(page.items);
                }
                state.page = page.page;
                state.has_more = page.has_more;
                tracing::debug!(page = page.page, received, has_more = page.has_more, "search applied");
                SearchOutcome::Applied {
                    page: page.page,
                    received,
                }
            }
            Err(err) => {
                tracing::error!(error = %err, page = ticket.page, "profile search failed");
                SearchOutcome::Failed
            }
        }
    }

    async fn ensure_catalog(&self) -> Option<Arc<PassionCatalog>> {
        let cached = self.lock().catalog.clone();
        if cached.is_some() {
            return cached;
        }
        match self.passions.load_catalog().await {
            Ok(catalog) => {
                let catalog = Arc::new(catalog);
                let mut state = self.lock();
                // A concurrent load may have won; keep the first one.
                Some(Arc::clone(state.catalog.get_or_insert(catalog)))
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load passion catalog");
                None
            }
        }
    }

    async fn current_session(&self) -> Option<Session> {
        match self.sessions.current_session().await {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "session lookup failed; continuing anonymously");
                None
            }
        }
    }

    fn push_notice(&self, notice: Notice) {
        self.lock().notices.push(notice);
    }

    fn lock(&self) -> MutexGuard<'_, DiscoveryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
