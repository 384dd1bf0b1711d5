//! In-process store implementing both repository traits.
//!
//! Holds counters and links behind one mutex. Every trait method takes the
//! lock once, so each call is atomic just like a single SQL statement. Data
//! lives only as long as the process.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{Counter, NewShortLink, ShortLink};
use crate::domain::repositories::{CounterRepository, ShortLinkRepository};
use crate::error::AppError;

#[derive(Default)]
struct MemoryState {
    counters: HashMap<String, i64>,
    links: Vec<ShortLink>,
    by_url: HashMap<String, usize>,
    by_code: HashMap<i64, usize>,
}

/// Store used by tests and by `STORE=memory`.
///
/// Enforces the same uniqueness rules as the PostgreSQL schema: one link per
/// `original_url` and one link per `short_code`.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, AppError> {
        self.state
            .lock()
            .map_err(|_| AppError::store("memory store lock poisoned"))
    }
}

#[async_trait]
impl CounterRepository for MemoryStore {
    async fn increment(&self, name: &str) -> Result<i64, AppError> {
        let mut state = self.lock()?;
        let seq = state.counters.entry(name.to_string()).or_insert(0);
        *seq += 1;
        Ok(*seq)
    }

    async fn find(&self, name: &str) -> Result<Option<Counter>, AppError> {
        let state = self.lock()?;
        Ok(state
            .counters
            .get(name)
            .map(|seq| Counter::new(name, *seq)))
    }
}

#[async_trait]
impl ShortLinkRepository for MemoryStore {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortLink>, AppError> {
        let state = self.lock()?;
        Ok(state
            .by_url
            .get(original_url)
            .map(|&idx| state.links[idx].clone()))
    }

    async fn find_by_code(&self, short_code: i64) -> Result<Option<ShortLink>, AppError> {
        let state = self.lock()?;
        Ok(state
            .by_code
            .get(&short_code)
            .map(|&idx| state.links[idx].clone()))
    }

    async fn insert(&self, new_link: NewShortLink) -> Result<Option<ShortLink>, AppError> {
        let mut state = self.lock()?;

        if state.by_url.contains_key(&new_link.original_url) {
            return Ok(None);
        }
        if state.by_code.contains_key(&new_link.short_code) {
            return Err(AppError::store(format!(
                "duplicate short code {}",
                new_link.short_code
            )));
        }

        let idx = state.links.len();
        let link = ShortLink::new(
            idx as i64 + 1,
            new_link.original_url,
            new_link.short_code,
            Utc::now(),
        );
        state.by_url.insert(link.original_url.clone(), idx);
        state.by_code.insert(link.short_code, idx);
        state.links.push(link.clone());

        Ok(Some(link))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.lock()?.links.len() as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}
