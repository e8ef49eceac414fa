use crate::api::client::SearchBackend;
use crate::picker::constants::QUERY_CACHE_SIZE;
use crate::picker::domain::models::{FileHit, SearchRequest, SearchResponse};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

/// Runs search requests against the remote backend on behalf of the worker
/// thread. Identical terms are served from an LRU cache; the upstream widget
/// marks its requests cacheable, so repeated queries must not re-hit the
/// endpoint. Backend failures are folded into the response so the UI can
/// degrade to a status message instead of tearing down the loop.
pub struct SearchService {
    backend: Box<dyn SearchBackend + Send + Sync>,
    cache: Mutex<LruCache<String, Vec<FileHit>>>,
}

impl SearchService {
    pub fn new(backend: Box<dyn SearchBackend + Send + Sync>) -> Self {
        let capacity = NonZeroUsize::new(QUERY_CACHE_SIZE).expect("cache size is non-zero");
        Self {
            backend,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn search(&self, request: SearchRequest) -> SearchResponse {
        if let Ok(mut cache) = self.cache.lock() {
            if let Some(hits) = cache.get(&request.term) {
                tracing::debug!(term = %request.term, "serving search from cache");
                return SearchResponse {
                    id: request.id,
                    hits: hits.clone(),
                    error: None,
                };
            }
        }

        match self.backend.search(&request.term) {
            Ok(hits) => {
                if let Ok(mut cache) = self.cache.lock() {
                    cache.put(request.term.clone(), hits.clone());
                }
                SearchResponse {
                    id: request.id,
                    hits,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(term = %request.term, "search failed: {e:#}");
                SearchResponse {
                    id: request.id,
                    hits: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
