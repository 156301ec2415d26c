// tests/support/mocks.rs
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::oneshot;

use skillogue_discovery::application::{
    ApplicationResult, dto::Session, ports::session::SessionProvider,
};
use skillogue_discovery::domain::errors::{DomainError, DomainResult};
use skillogue_discovery::domain::passion::{Passion, PassionId, PassionRepository};
use skillogue_discovery::domain::profile::{
    ProfileSearchGateway, ProfileSearchRequest, SearchResult,
};
use skillogue_discovery::domain::search::{
    NewSavedSearch, SavedSearch, SavedSearchId, SavedSearchRepository,
};
use skillogue_discovery::domain::user::UserId;

struct ScriptedResponse {
    result: DomainResult<Vec<SearchResult>>,
    gate: Option<oneshot::Receiver<()>>,
}

/// Records every search request and answers from a FIFO script. An empty
/// script answers with no rows.
#[derive(Default)]
pub struct ScriptedSearchGateway {
    calls: Mutex<Vec<ProfileSearchRequest>>,
    script: Mutex<VecDeque<ScriptedResponse>>,
}

impl ScriptedSearchGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, rows: Vec<SearchResult>) {
        self.push(Ok(rows), None);
    }

    pub fn push_err(&self, message: &str) {
        self.push(Err(DomainError::Persistence(message.into())), None);
    }

    /// The response is held back until the returned sender fires (or drops).
    pub fn push_gated(&self, rows: Vec<SearchResult>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push(Ok(rows), Some(rx));
        tx
    }

    pub fn calls(&self) -> Vec<ProfileSearchRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<ProfileSearchRequest> {
        self.calls.lock().unwrap().last().cloned()
    }

    fn push(&self, result: DomainResult<Vec<SearchResult>>, gate: Option<oneshot::Receiver<()>>) {
        self.script
            .lock()
            .unwrap()
            .push_back(ScriptedResponse { result, gate });
    }
}

#[async_trait]
impl ProfileSearchGateway for ScriptedSearchGateway {
    async fn search(&self, request: ProfileSearchRequest) -> DomainResult<Vec<SearchResult>> {
        self.calls.lock().unwrap().push(request);
        let next = self.script.lock().unwrap().pop_front();
        let Some(ScriptedResponse { result, gate }) = next else {
            return Ok(Vec::new());
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        result
    }
}

pub struct StaticPassionRepo {
    passions: Vec<Passion>,
    failing: AtomicBool,
    loads: AtomicUsize,
}

impl StaticPassionRepo {
    pub fn new(entries: &[(i64, &str)]) -> Self {
        let passions = entries
            .iter()
            .map(|(id, name)| Passion::new(PassionId::new(*id).unwrap(), *name).unwrap())
            .collect();
        Self {
            passions,
            failing: AtomicBool::new(false),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PassionRepository for StaticPassionRepo {
    async fn list_all(&self) -> DomainResult<Vec<Passion>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("passions unavailable".into()));
        }
        Ok(self.passions.clone())
    }
}

#[derive(Default)]
pub struct InMemorySavedSearchRepo {
    items: Mutex<Vec<SavedSearch>>,
    next_id: AtomicI64,
    inserts: AtomicUsize,
    fail_insert: AtomicBool,
    fail_delete: AtomicBool,
}

impl InMemorySavedSearchRepo {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(100),
            ..Self::default()
        }
    }

    pub fn with(items: Vec<SavedSearch>) -> Self {
        let repo = Self::new();
        *repo.items.lock().unwrap() = items;
        repo
    }

    pub fn items(&self) -> Vec<SavedSearch> {
        self.items.lock().unwrap().clone()
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn set_fail_insert(&self, fail: bool) {
        self.fail_insert.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SavedSearchRepository for InMemorySavedSearchRepo {
    async fn list_for_user(&self, user_id: UserId) -> DomainResult<Vec<SavedSearch>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|search| search.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, search: NewSavedSearch) -> DomainResult<SavedSearch> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        if self.fail_insert.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("insert failed".into()));
        }
        let saved = SavedSearch {
            id: SavedSearchId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            user_id: search.user_id,
            name: search.name,
            query: search.query,
            location: search.location,
            min_age: search.min_age,
            max_age: search.max_age,
            language: search.language,
            gender: search.gender,
            passion_ids: search.passion_ids,
            created_at: Utc::now(),
        };
        self.items.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn delete(&self, user_id: UserId, id: SavedSearchId) -> DomainResult<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("delete failed".into()));
        }
        self.items
            .lock()
            .unwrap()
            .retain(|search| !(search.id == id && search.user_id == user_id));
        Ok(())
    }
}

pub struct StaticSessionProvider(pub Option<Session>);

#[async_trait]
impl SessionProvider for StaticSessionProvider {
    async fn current_session(&self) -> ApplicationResult<Option<Session>> {
        Ok(self.0.clone())
    }
}
