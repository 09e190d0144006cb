//! Sample persistence port.
//!
//! Use cases reach storage only through [`SampleRepository`]. The in-memory implementation
//! here backs the runnable server and the interactor tests; other backends plug in by
//! implementing the same trait.

use crate::error::{SampleError, SampleResult};
use crate::sample::Sample;
use async_trait::async_trait;
use sample_types::{SampleId, SampleName};
use std::sync::RwLock;

#[async_trait]
pub trait SampleRepository: Send + Sync {
    /// Returns every stored sample in insertion order.
    async fn list(&self) -> SampleResult<Vec<Sample>>;

    /// Stores a new sample under a freshly assigned id.
    async fn create(&self, name: SampleName) -> SampleResult<Sample>;

    /// Replaces the stored record with the same id as `sample`.
    ///
    /// Returns `Ok(None)` if no such record exists.
    async fn update(&self, sample: Sample) -> SampleResult<Option<Sample>>;

    /// Removes the record with `id`, returning it.
    ///
    /// Returns `Ok(None)` if no such record exists.
    async fn delete(&self, id: &SampleId) -> SampleResult<Option<Sample>>;
}

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    samples: Vec<Sample>,
}

/// Process-local repository assigning ids `1, 2, 3, ...`.
#[derive(Debug, Default)]
pub struct InMemorySampleRepository {
    store: RwLock<Store>,
}

impl InMemorySampleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> SampleError {
    SampleError::Storage("sample store lock poisoned".into())
}

#[async_trait]
impl SampleRepository for InMemorySampleRepository {
    async fn list(&self) -> SampleResult<Vec<Sample>> {
        let store = self.store.read().map_err(poisoned)?;
        Ok(store.samples.clone())
    }

    async fn create(&self, name: SampleName) -> SampleResult<Sample> {
        let mut store = self.store.write().map_err(poisoned)?;
        let next = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| SampleError::Storage("sample id space exhausted".into()))?;
        let sample = Sample::new(SampleId::from_i64(next)?, name);
        store.last_id = next;
        store.samples.push(sample.clone());
        tracing::debug!("stored sample {}", sample.id());
        Ok(sample)
    }

    async fn update(&self, sample: Sample) -> SampleResult<Option<Sample>> {
        let mut store = self.store.write().map_err(poisoned)?;
        let Some(slot) = store.samples.iter_mut().find(|s| s.id() == sample.id()) else {
            return Ok(None);
        };
        *slot = sample.clone();
        Ok(Some(sample))
    }

    async fn delete(&self, id: &SampleId) -> SampleResult<Option<Sample>> {
        let mut store = self.store.write().map_err(poisoned)?;
        let Some(pos) = store.samples.iter().position(|s| s.id() == id) else {
            return Ok(None);
        };
        Ok(Some(store.samples.remove(pos)))
    }
}
