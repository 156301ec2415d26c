use std::{future, sync::Arc, time::Duration};

use tokio::{
    sync::mpsc,
    task::{JoinHandle, JoinSet},
    time::{Instant, sleep_until},
};

use super::controller::DiscoveryController;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::search::FilterField,
};

/// Quiet period after the last field edit before the search is reissued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryEvent {
    FieldEdited(FilterField),
    CriteriaChanged,
    Submit,
    LoadMore,
    ClearFilters,
    ApplySavedSearch(i64),
    SaveSearch(String),
    DeleteSavedSearch(i64),
    ReloadCatalog,
}

pub struct DiscoveryDriver;

impl DiscoveryDriver {
    /// Start consuming events for `controller` on the current runtime.
    pub fn spawn(controller: Arc<DiscoveryController>, debounce: Duration) -> DiscoveryHandle {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(controller, rx, debounce));
        DiscoveryHandle { tx, task }
    }
}

pub struct DiscoveryHandle {
    tx: mpsc::UnboundedSender<DiscoveryEvent>,
    task: JoinHandle<()>,
}

impl DiscoveryHandle {
    pub fn send(&self, event: DiscoveryEvent) -> ApplicationResult<()> {
        self.tx
            .send(event)
            .map_err(|_| ApplicationError::infrastructure("discovery driver has stopped"))
    }

    pub fn edit(&self, field: FilterField) -> ApplicationResult<()> {
        self.send(DiscoveryEvent::FieldEdited(field))
    }

    /// Stop accepting events and wait for in-flight work to finish. A pending
    /// debounced search is flushed first.
    pub async fn shutdown(self) {
        drop(self.tx);
        if let Err(err) = self.task.await {
            tracing::error!(error = %err, "discovery driver task failed");
        }
    }
}

async fn run(
    controller: Arc<DiscoveryController>,
    mut rx: mpsc::UnboundedReceiver<DiscoveryEvent>,
    debounce: Duration,
) {
    let mut deadline: Option<Instant> = None;
    let mut tasks = JoinSet::new();

    loop {
        tokio::select! {
            event = rx.recv() => {
                let Some(event) = event else { break };
                if let DiscoveryEvent::FieldEdited(field) = event {
                    if controller.set_field(field) {
                        deadline = Some(Instant::now() + debounce);
                    }
                    continue;
                }
                // Pending edits must reach page 1 before any further page is fetched.
                if event == DiscoveryEvent::LoadMore && deadline.take().is_some() {
                    tracing::debug!("load more replaced by pending filter search");
                    dispatch(&mut tasks, &controller, DiscoveryEvent::CriteriaChanged);
                    continue;
                }
                if matches!(
                    event,
                    DiscoveryEvent::CriteriaChanged
                        | DiscoveryEvent::Submit
                        | DiscoveryEvent::ClearFilters
                        | DiscoveryEvent::ApplySavedSearch(_)
                ) {
                    deadline = None;
                }
                dispatch(&mut tasks, &controller, event);
            }
            () = wait_for(deadline) => {
                deadline = None;
                dispatch(&mut tasks, &controller, DiscoveryEvent::CriteriaChanged);
            }
            Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                if let Err(err) = joined {
                    tracing::error!(error = %err, "discovery task panicked");
                }
            }
        }
    }

    if deadline.is_some() {
        dispatch(&mut tasks, &controller, DiscoveryEvent::CriteriaChanged);
    }
    while let Some(joined) = tasks.join_next().await {
        if let Err(err) = joined {
            tracing::error!(error = %err, "discovery task panicked");
        }
    }
    tracing::debug!("discovery driver stopped");
}

fn dispatch(
    tasks: &mut JoinSet<()>,
    controller: &Arc<DiscoveryController>,
    event: DiscoveryEvent,
) {
    let controller = Arc::clone(controller);
    tasks.spawn(async move {
        match event {
            DiscoveryEvent::FieldEdited(field) => {
                controller.set_field(field);
            }
            DiscoveryEvent::CriteriaChanged | DiscoveryEvent::Submit => {
                controller.submit().await;
            }
            DiscoveryEvent::LoadMore => {
                controller.load_more().await;
            }
            DiscoveryEvent::ClearFilters => {
                controller.clear_filters().await;
            }
            DiscoveryEvent::ApplySavedSearch(id) => {
                controller.apply_saved_search(id).await;
            }
            DiscoveryEvent::SaveSearch(name) => {
                controller.save_search(&name).await;
            }
            DiscoveryEvent::DeleteSavedSearch(id) => {
                controller.delete_saved_search(id).await;
            }
            DiscoveryEvent::ReloadCatalog => {
                controller.reload_catalog().await;
            }
        }
    });
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => future::pending().await,
    }
}
