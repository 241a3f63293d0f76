//! Cached session state with generation-ordered invalidation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::core::errors::{Result, TripError};
use crate::domain::session::{PublicUserRecord, SessionState};

use super::transport::{SessionLookup, SessionTransport};

struct CacheSlot {
    state: SessionState,
    last_refreshed: Option<DateTime<Utc>>,
}

/// Owns the one cached session value for the UI process.
///
/// Invalidation is a generation bump plus a reset to
/// [`SessionState::Unknown`]; a fetch response issued before the latest
/// invalidation is discarded instead of written back.
pub struct SessionCache {
    transport: Arc<dyn SessionTransport>,
    slot: Mutex<CacheSlot>,
    generation: AtomicU64,
    notify: watch::Sender<SessionState>,
}

impl SessionCache {
    pub fn new(transport: Arc<dyn SessionTransport>) -> Self {
        let (notify, _) = watch::channel(SessionState::Unknown);
        Self {
            transport,
            slot: Mutex::new(CacheSlot {
                state: SessionState::Unknown,
                last_refreshed: None,
            }),
            generation: AtomicU64::new(0),
            notify,
        }
    }

    /// Current cached state. Returns a clone; readers never hold the lock.
    pub fn current(&self) -> SessionState {
        self.slot.lock().state.clone()
    }

    /// Whether the cache currently holds an authenticated identity.
    pub fn is_authenticated(&self) -> bool {
        self.current().is_authenticated()
    }

    /// The signed-in traveler, if any.
    pub fn user(&self) -> Option<PublicUserRecord> {
        self.slot.lock().state.user().cloned()
    }

    /// When a value was last accepted from the endpoint.
    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.slot.lock().last_refreshed
    }

    /// Change notifications for any rendering layer or test harness.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.notify.subscribe()
    }

    /// Fetches the remote session and caches the outcome.
    ///
    /// An explicit unauthenticated response caches
    /// [`SessionState::Anonymous`] and is not an error. Transport failures
    /// leave the cached value as it was and surface the error. No retry.
    pub async fn refresh(&self) -> Result<SessionState> {
        let issued_at = self.generation.load(Ordering::Acquire);
        let lookup = self
            .transport
            .fetch_session()
            .await
            .map_err(|err| TripError::SessionFetch(err.to_string()))?;

        let state = {
            let mut slot = self.slot.lock();
            // A logout completed while this fetch was in flight; the
            // response is stale and must not clobber the invalidation.
            if self.generation.load(Ordering::Acquire) != issued_at {
                debug!("discarding session response from generation {issued_at}");
                return Ok(slot.state.clone());
            }
            slot.state = match lookup {
                SessionLookup::Authenticated(user) => SessionState::Authenticated(user),
                SessionLookup::Anonymous => SessionState::Anonymous,
            };
            slot.last_refreshed = Some(Utc::now());
            slot.state.clone()
        };

        let _ = self.notify.send(state.clone());
        Ok(state)
    }

    /// Logs out remotely, then invalidates the cached session.
    ///
    /// The remote call must succeed before the cache is touched; a failed
    /// logout leaves the traveler visibly signed in and surfaces the error.
    pub async fn logout(&self) -> Result<()> {
        self.transport
            .logout()
            .await
            .map_err(|err| TripError::Logout(err.to_string()))?;

        {
            let mut slot = self.slot.lock();
            self.generation.fetch_add(1, Ordering::AcqRel);
            slot.state = SessionState::Unknown;
            slot.last_refreshed = None;
        }

        let _ = self.notify.send(SessionState::Unknown);
        info!("session cache invalidated after logout");
        Ok(())
    }
}
