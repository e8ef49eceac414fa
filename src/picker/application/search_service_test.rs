use super::search_service::SearchService;
use crate::api::client::SearchBackend;
use crate::picker::domain::models::{FileHit, SearchRequest};
use anyhow::{Result, bail};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct StubBackend {
    calls: Arc<AtomicUsize>,
    fail: bool,
}

impl SearchBackend for StubBackend {
    fn search(&self, term: &str) -> Result<Vec<FileHit>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            bail!("connection refused");
        }
        Ok(vec![FileHit {
            id: Some("1".to_string()),
            path: Some(format!("/{term}.pdf")),
            mime: Some("application/pdf".to_string()),
            ..FileHit::default()
        }])
    }
}

fn service(fail: bool) -> (SearchService, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let backend = StubBackend {
        calls: calls.clone(),
        fail,
    };
    (SearchService::new(Box::new(backend)), calls)
}

fn request(id: u64, term: &str) -> SearchRequest {
    SearchRequest {
        id,
        term: term.to_string(),
    }
}

#[test]
fn test_response_carries_request_id() {
    let (service, _) = service(false);
    let response = service.search(request(7, "inv"));
    assert_eq!(response.id, 7);
    assert_eq!(response.hits.len(), 1);
    assert!(response.error.is_none());
}

#[test]
fn test_identical_terms_served_from_cache() {
    let (service, calls) = service(false);
    let first = service.search(request(1, "inv"));
    let second = service.search(request(2, "inv"));

    assert_eq!(first.hits, second.hits);
    assert_eq!(second.id, 2);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    service.search(request(3, "voice"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_error_folded_into_response() {
    let (service, _) = service(true);
    let response = service.search(request(3, "inv"));
    assert_eq!(response.id, 3);
    assert!(response.hits.is_empty());
    assert!(
        response
            .error
            .as_deref()
            .is_some_and(|e| e.contains("connection refused"))
    );
}

#[test]
fn test_failed_searches_are_not_cached() {
    let (service, calls) = service(true);
    service.search(request(1, "inv"));
    service.search(request(2, "inv"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
