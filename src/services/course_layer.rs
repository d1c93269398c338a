use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use super::overpass_service::{
    overpass_service::GeoDataSource, query_builder, types::fetch_error::FetchError,
};
use crate::types::{bounding_box::BoundingBox, point_of_interest::PointOfInterest};

#[derive(Clone, Debug, PartialEq)]
pub enum FetchState {
    Idle,
    Requesting,
    Succeeded {
        courses: Arc<Vec<PointOfInterest>>,
        fetched_at: DateTime<Utc>,
    },
    Failed {
        error: FetchError,
        failed_at: DateTime<Utc>,
    },
}

impl FetchState {
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            FetchState::Succeeded { .. } | FetchState::Failed { .. }
        )
    }
}

/// Owns the course collection the map displays and the fetch that fills it.
///
/// Each [`load`](CourseLayer::load) replaces the collection in full. Starting
/// a new load or dropping the layer cancels whatever fetch is still running,
/// and a cancelled fetch never touches the published state.
pub struct CourseLayer {
    source: Arc<dyn GeoDataSource>,
    state_tx: watch::Sender<FetchState>,
    inflight: Arc<Mutex<Option<CancellationToken>>>,
}

impl CourseLayer {
    pub fn new(source: Arc<dyn GeoDataSource>) -> Self {
        let (state_tx, _) = watch::channel(FetchState::Idle);

        Self {
            source,
            state_tx,
            inflight: Arc::new(Mutex::new(None)),
        }
    }

    pub fn load(&self, bounds: BoundingBox) {
        let cancel = CancellationToken::new();

        {
            let mut inflight = self.inflight.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(previous) = inflight.replace(cancel.clone()) {
                info!("Cancelling superseded golf course fetch");
                previous.cancel();
            }
            self.state_tx.send_replace(FetchState::Requesting);
        }

        let source = self.source.clone();
        let state_tx = self.state_tx.clone();
        let inflight = self.inflight.clone();

        tokio::spawn(async move {
            let query = query_builder::build(&bounds);
            let result = source.fetch_with_cancel(&query, &cancel).await;

            // Checked under the lock so a newer load cannot be overwritten.
            let mut inflight = inflight.lock().unwrap_or_else(|e| e.into_inner());
            if cancel.is_cancelled() {
                info!("Golf course fetch cancelled before completion");
                return;
            }
            inflight.take();

            let state = match result {
                Ok(courses) => {
                    info!("Loaded {} golf courses", courses.len());
                    let outside = courses
                        .iter()
                        .filter(|c| !bounds.contains(c.lat, c.lng))
                        .count();
                    if outside > 0 {
                        warn!("{} golf courses lie outside the requested bounds", outside);
                    }
                    FetchState::Succeeded {
                        courses: Arc::new(courses),
                        fetched_at: Utc::now(),
                    }
                }
                Err(e) => {
                    error!("Failed to fetch golf courses: {}", e);
                    FetchState::Failed {
                        error: e,
                        failed_at: Utc::now(),
                    }
                }
            };
            state_tx.send_replace(state);
        });
    }

    pub fn state(&self) -> FetchState {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state_tx.subscribe()
    }

    /// Resolves once the state is `Succeeded` or `Failed`, immediately if it
    /// already is. Pends forever on a layer that was never loaded.
    pub async fn wait_settled(&self) -> FetchState {
        let mut rx = self.subscribe();
        let settled = rx.wait_for(FetchState::is_settled).await.map(|s| s.clone());

        settled.unwrap_or_else(|_| self.state())
    }
}

impl Drop for CourseLayer {
    fn drop(&mut self) {
        let mut inflight = self.inflight.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(token) = inflight.take() {
            token.cancel();
        }
    }
}
