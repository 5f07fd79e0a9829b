//! Integration tests for the KnightPath service.
//!
//! These tests verify the complete submit-to-collect workflow including:
//! - Queueing moves through the service facade
//! - Background processing by the search daemon
//! - Consume-on-read semantics of result collection
//! - Result-cache reuse across identical moves
//! - Graceful runtime shutdown

use std::time::Duration;

use knightpath::runtime::RuntimeConfig;
use knightpath::service::{KnightPathService, PathResponse, ServiceError};

// =============================================================================
// Test Helpers
// =============================================================================

/// Polls the service until the operation's result arrives.
///
/// The daemon runs on a background task, so results appear shortly after
/// submission rather than synchronously.
async fn collect(service: &KnightPathService, operation_id: &str) -> Option<PathResponse> {
    for _ in 0..200 {
        match service
            .take_path(operation_id)
            .expect("operation id should be valid")
        {
            Some(response) => return Some(response),
            None => tokio::time::sleep(Duration::from_millis(5)).await,
        }
    }
    None
}

// =============================================================================
// Integration Tests
// =============================================================================

#[tokio::test]
async fn test_submit_and_collect_round_trip() {
    let (service, runtime) = KnightPathService::start(RuntimeConfig::default());

    let operation_id = service.queue_knight_move("A1", "F6").unwrap();
    let response = collect(&service, &operation_id.to_string())
        .await
        .expect("result should arrive");

    assert_eq!(response.operation_id, operation_id);
    assert_eq!(response.path.move_count, 4);
    assert_eq!(response.path.path_count(), 6);
    assert_eq!(response.path.starting(), "A1");
    assert_eq!(response.path.ending(), "F6");
    for path in &response.path.shortest_paths {
        assert!(path.starts_with("A1"));
        assert!(path.ends_with("F6"));
    }

    runtime.shutdown().await;
}

#[tokio::test]
async fn test_result_is_collectible_exactly_once() {
    let (service, runtime) = KnightPathService::start(RuntimeConfig::default());

    let operation_id = service.queue_knight_move("H5", "B3").unwrap();
    let id_string = operation_id.to_string();

    let first = collect(&service, &id_string).await;
    assert!(first.is_some());
    assert_eq!(first.unwrap().path.path_count(), 18);

    // Consumed: the record is gone exactly as if the id never existed.
    assert!(service.take_path(&id_string).unwrap().is_none());
    assert_eq!(service.pending_operations(), 0);

    runtime.shutdown().await;
}

#[tokio::test]
async fn test_identical_moves_share_one_search() {
    let (service, runtime) = KnightPathService::start(RuntimeConfig::default());

    let first = service.queue_knight_move("A1", "B8").unwrap();
    let second = service.queue_knight_move("A1", "B8").unwrap();
    assert_ne!(first, second, "every submission gets its own id");

    let first_response = collect(&service, &first.to_string()).await.unwrap();
    let second_response = collect(&service, &second.to_string()).await.unwrap();

    assert_eq!(
        first_response.path.shortest_paths,
        second_response.path.shortest_paths
    );

    let stats = service.cache_stats();
    assert_eq!(stats.misses, 1, "only the first submission searches");
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.entry_count, 1);

    runtime.shutdown().await;
}

#[tokio::test]
async fn test_same_square_move_round_trip() {
    let (service, runtime) = KnightPathService::start(RuntimeConfig::default());

    let operation_id = service.queue_knight_move("D4", "D4").unwrap();
    let response = collect(&service, &operation_id.to_string()).await.unwrap();

    assert_eq!(response.path.move_count, 0);
    assert_eq!(response.path.shortest_paths, vec![String::from("D4")]);

    runtime.shutdown().await;
}

#[tokio::test]
async fn test_invalid_inputs_are_rejected_up_front() {
    let (service, runtime) = KnightPathService::start(RuntimeConfig::default());

    assert!(service.queue_knight_move("", "F6").is_err());
    assert!(service.queue_knight_move("A1", "I6").is_err());

    let err = service.take_path("not-a-uuid").unwrap_err();
    assert!(matches!(err, ServiceError::InvalidOperationId(_)));

    let err = service
        .take_path("00000000-0000-0000-0000-000000000000")
        .unwrap_err();
    assert!(matches!(err, ServiceError::EmptyOperationId));

    // Nothing was queued or stored by any of the failed calls
    assert_eq!(service.pending_operations(), 0);

    runtime.shutdown().await;
}

#[tokio::test]
async fn test_many_submissions_stay_bounded() {
    let (service, runtime) = KnightPathService::start(RuntimeConfig::default());

    let mut ids = Vec::new();
    for _ in 0..20 {
        ids.push(service.queue_knight_move("C4", "A2").unwrap());
    }
    for id in &ids {
        assert!(collect(&service, &id.to_string()).await.is_some());
    }

    // Twenty searches for one distinct move leave exactly one cache entry,
    // and collecting every result drains the operation store.
    let stats = service.cache_stats();
    assert_eq!(stats.entry_count, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(service.pending_operations(), 0);

    runtime.shutdown().await;
}

#[tokio::test]
async fn test_queue_after_shutdown_is_unavailable() {
    let (service, runtime) = KnightPathService::start(RuntimeConfig::default());

    tokio::time::timeout(Duration::from_secs(5), runtime.shutdown())
        .await
        .expect("shutdown should complete within 5 seconds");

    let err = service.queue_knight_move("A1", "F6").unwrap_err();
    assert!(matches!(err, ServiceError::QueueUnavailable(_)));
}
