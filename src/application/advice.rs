//! AdviceService - cached AI strategy advice for a factor set.
//!
//! Advice is keyed by the factor fingerprint and kept in a session-scoped
//! store. A miss triggers exactly one provider call; failures produce the
//! fixed fallback message and leave the cache untouched.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

use crate::domain::advice::{advice_prompt, AdviceKey, ADVICE_FALLBACK_MESSAGE};
use crate::domain::canvas::Factor;
use crate::domain::foundation::ContourId;
use crate::ports::{AIProvider, CompletionRequest, KeyValueStore, MessageRole, RequestMetadata};

/// Advice availability for a factor set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceStatus {
    /// Nothing cached and no request running.
    Idle,
    /// A provider request for this key is in flight.
    Loading,
    /// Advice is cached.
    Ready,
}

/// Where a returned advice text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceSource {
    Cache,
    Provider,
    Fallback,
}

/// Result of an advice request.
#[derive(Debug, Clone)]
pub struct AdviceOutcome {
    pub key: AdviceKey,
    pub text: String,
    pub source: AdviceSource,
}

/// Application service for the strategy advisor.
pub struct AdviceService {
    provider: Arc<dyn AIProvider>,
    cache: Arc<dyn KeyValueStore>,
    in_flight: Arc<Mutex<HashMap<AdviceKey, usize>>>,
    max_output_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl AdviceService {
    pub fn new(provider: Arc<dyn AIProvider>, cache: Arc<dyn KeyValueStore>) -> Self {
        Self {
            provider,
            cache,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
            max_output_tokens: None,
            temperature: None,
        }
    }

    /// Caps the length of generated advice.
    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }

    /// Overrides the provider's sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Returns cached advice for the factor set, if any.
    ///
    /// An empty cached text counts as absent.
    pub async fn cached(&self, factors: &[Factor]) -> Option<String> {
        self.cached_by_key(&AdviceKey::for_factors(factors)).await
    }

    /// Reports whether advice for the factor set is ready, loading or idle.
    pub async fn status(&self, factors: &[Factor]) -> AdviceStatus {
        let key = AdviceKey::for_factors(factors);
        if lock(&self.in_flight).contains_key(&key) {
            return AdviceStatus::Loading;
        }
        if self.cached_by_key(&key).await.is_some() {
            AdviceStatus::Ready
        } else {
            AdviceStatus::Idle
        }
    }

    /// Returns advice for the factor set, calling the provider on a miss.
    ///
    /// Never fails: provider errors yield the fallback message.
    pub async fn request(&self, factors: &[Factor], contour_id: Option<ContourId>) -> AdviceOutcome {
        let key = AdviceKey::for_factors(factors);

        if let Some(text) = self.cached_by_key(&key).await {
            debug!(key = %key, "Advice served from cache");
            return AdviceOutcome {
                key,
                text,
                source: AdviceSource::Cache,
            };
        }

        let in_flight = InFlight::enter(&self.in_flight, &key);

        let mut metadata = RequestMetadata::new(uuid::Uuid::new_v4().to_string());
        if let Some(id) = contour_id {
            metadata = metadata.with_contour(id);
        }
        let mut request =
            CompletionRequest::new(metadata).with_message(MessageRole::User, advice_prompt(factors));
        if let Some(max) = self.max_output_tokens {
            request = request.with_max_tokens(max);
        }
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }
        let trace_id = request.metadata.trace_id.clone();

        info!(
            key = %key,
            trace_id = %trace_id,
            provider = %self.provider.provider_info().name,
            factors = factors.len(),
            "Requesting strategy advice"
        );
        let result = self.provider.complete(request).await;
        drop(in_flight);

        match result {
            Ok(response) => {
                if let Err(e) = self.cache.set(key.as_str(), &response.content).await {
                    warn!(key = %key, error = %e, "Failed to cache advice");
                }
                debug!(
                    trace_id = %trace_id,
                    tokens = response.usage.total_tokens,
                    "Advice received"
                );
                AdviceOutcome {
                    key,
                    text: response.content,
                    source: AdviceSource::Provider,
                }
            }
            Err(e) => {
                error!(trace_id = %trace_id, error = %e, "Error getting advice");
                AdviceOutcome {
                    key,
                    text: ADVICE_FALLBACK_MESSAGE.to_string(),
                    source: AdviceSource::Fallback,
                }
            }
        }
    }

    async fn cached_by_key(&self, key: &AdviceKey) -> Option<String> {
        match self.cache.get(key.as_str()).await {
            Ok(Some(text)) if !text.is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read advice cache");
                None
            }
        }
    }
}

/// Locks a mutex, recovering the data if a panicking holder poisoned it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Marks a key as loading for as long as the guard lives.
///
/// Overlapping requests for one key are counted; the key stays loading
/// until the last of them finishes or is cancelled.
struct InFlight {
    keys: Arc<Mutex<HashMap<AdviceKey, usize>>>,
    key: AdviceKey,
}

impl InFlight {
    fn enter(keys: &Arc<Mutex<HashMap<AdviceKey, usize>>>, key: &AdviceKey) -> Self {
        *lock(keys).entry(key.clone()).or_insert(0) += 1;
        Self {
            keys: Arc::clone(keys),
            key: key.clone(),
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        let mut keys = lock(&self.keys);
        if let Some(count) = keys.get_mut(&self.key) {
            *count -= 1;
            if *count == 0 {
                keys.remove(&self.key);
            }
        }
    }
}
