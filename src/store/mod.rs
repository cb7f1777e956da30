// src/store/mod.rs
//! In-memory directories built from bulk feeds and refreshed on a TTL.
//!
//! Purpose:
//! - Own the team and player directories for one bot instance (no globals).
//! - Rebuild a directory lazily once its snapshot is older than the TTL.
//! - Keep an append-only log of player profiles that were looked up.
//!
//! Each directory sits behind its own `Mutex`; readers get an `Arc` snapshot
//! and never observe a half-built table. A failed refresh keeps serving the
//! previous snapshot. Empty results are never cached.

pub mod players;
pub mod teams;

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::config::options::{AppOptions, Endpoints};
use crate::core::Fetch;
use crate::error::FetchResult;
use crate::specs;

pub use players::{PlayerDirectory, PlayerRecord, Position};
pub use teams::{TeamDirectory, TeamRecord};

struct Cached<T> {
    value: Arc<T>,
    fetched_at: Instant,
}

impl<T> Cached<T> {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

type Slot<T> = Mutex<Option<Cached<T>>>;

/// One looked-up profile, as shown to the user.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileEntry {
    pub name: String,
    pub age: Option<u32>,
    pub position: String,
    pub team: String,
    pub college: Option<String>,
    pub years: Option<u32>,
}

impl From<&PlayerRecord> for ProfileEntry {
    fn from(p: &PlayerRecord) -> Self {
        Self {
            name: p.full_name.clone(),
            age: p.age,
            position: s!(p.position_label()),
            team: s!(p.team_label()),
            college: p.college.clone(),
            years: p.years_experience,
        }
    }
}

pub struct DirectoryStore {
    fetcher: Arc<dyn Fetch>,
    endpoints: Endpoints,
    ttl: Duration,
    teams: Slot<TeamDirectory>,
    players: Slot<PlayerDirectory>,
    profiles: Mutex<Vec<ProfileEntry>>,
}

impl DirectoryStore {
    pub fn new(fetcher: Arc<dyn Fetch>, opts: &AppOptions) -> Self {
        Self {
            fetcher,
            endpoints: opts.endpoints.clone(),
            ttl: opts.cache.ttl(),
            teams: Mutex::new(None),
            players: Mutex::new(None),
            profiles: Mutex::new(Vec::new()),
        }
    }

    pub fn fetcher(&self) -> &dyn Fetch {
        self.fetcher.as_ref()
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Current team directory, rebuilt first if missing or past the TTL.
    pub fn teams(&self) -> FetchResult<Arc<TeamDirectory>> {
        load_or_refresh(&self.teams, self.ttl, "teams", TeamDirectory::is_empty, || {
            specs::teams::fetch(self.fetcher(), &self.endpoints).map(TeamDirectory::new)
        })
    }

    /// Current player directory, rebuilt first if missing or past the TTL.
    pub fn players(&self) -> FetchResult<Arc<PlayerDirectory>> {
        load_or_refresh(&self.players, self.ttl, "players", PlayerDirectory::is_empty, || {
            specs::players::fetch(self.fetcher(), &self.endpoints).map(PlayerDirectory::new)
        })
    }

    /// The held player snapshot, fresh or stale, fetching only when there
    /// has never been one.
    pub fn players_snapshot(&self) -> Option<Arc<PlayerDirectory>> {
        let held = self
            .players
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|c| Arc::clone(&c.value));
        held.or_else(|| self.players().ok())
    }

    /// Team directory, or an empty one when the feed is unreachable. For
    /// callers that can still do useful work without team aliases.
    pub fn teams_or_empty(&self) -> Arc<TeamDirectory> {
        self.teams().unwrap_or_else(|e| {
            logw!("team directory unavailable: {e}");
            Arc::new(TeamDirectory::default())
        })
    }

    /// Drop both snapshots; the next access refetches.
    pub fn invalidate(&self) {
        *self.teams.lock().unwrap_or_else(PoisonError::into_inner) = None;
        *self.players.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn record_profile(&self, player: &PlayerRecord) {
        let entry = ProfileEntry::from(player);
        logd!("profile looked up: {} ({})", entry.name, entry.team);
        self.profiles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }

    /// Copy of the profile log, oldest first.
    pub fn profiles(&self) -> Vec<ProfileEntry> {
        self.profiles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn load_or_refresh<T>(
    slot: &Slot<T>,
    ttl: Duration,
    label: &str,
    is_empty: impl Fn(&T) -> bool,
    build: impl FnOnce() -> FetchResult<T>,
) -> FetchResult<Arc<T>> {
    let mut guard = slot.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(cached) = guard.as_ref() {
        if cached.is_fresh(ttl) {
            return Ok(Arc::clone(&cached.value));
        }
    }

    logd!("refreshing {label} directory");
    match build() {
        Ok(fresh) if !is_empty(&fresh) => {
            let value = Arc::new(fresh);
            *guard = Some(Cached { value: Arc::clone(&value), fetched_at: Instant::now() });
            logf!("{label} directory refreshed");
            Ok(value)
        }
        Ok(empty) => {
            logw!("{label} feed returned nothing; not caching");
            match guard.as_ref() {
                Some(stale) => Ok(Arc::clone(&stale.value)),
                None => Ok(Arc::new(empty)),
            }
        }
        Err(e) => match guard.as_ref() {
            Some(stale) => {
                logw!("{label} refresh failed, serving stale snapshot: {e}");
                Ok(Arc::clone(&stale.value))
            }
            None => {
                loge!("{label} refresh failed: {e}");
                Err(e)
            }
        },
    }
}
