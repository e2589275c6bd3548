// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the balance query dispatcher
//!
//! Covers both query paths, the zero-on-failure policy, endpoint fallback
//! and last-request-wins supersession.

mod helpers;

use std::sync::Arc;

use cosmos_multisend::{
    AssetDescriptor, BalanceDispatcher, BalanceState, BaseAmount, Exponent, MultisendConfig,
    MultisendConfigBuilder, RefreshOutcome,
};
use helpers::MockQueryFactory;
use serde_json::json;
use tokio::sync::Notify;

fn atom() -> AssetDescriptor {
    AssetDescriptor::native("cosmoshub", "uatom", "atom", Exponent::MICRO, "ATOM")
}

fn abc() -> AssetDescriptor {
    AssetDescriptor::contract(
        "cosmoshub",
        "wasm1abc",
        "cw20:wasm1abc",
        "abc",
        Exponent::MICRO,
        "ABC",
    )
}

fn dispatcher(factory: Arc<MockQueryFactory>) -> BalanceDispatcher {
    BalanceDispatcher::new(factory, Arc::new(MultisendConfig::default()))
}

#[tokio::test]
async fn test_native_balance_resolves() {
    let factory = Arc::new(
        MockQueryFactory::new().with_native_balance("cosmos1alice", "uatom", "12500000"),
    );
    let dispatcher = dispatcher(Arc::clone(&factory));

    let outcome = dispatcher
        .refresh("cosmos1alice", &atom(), Some("https://rpc.cosmoshub.example"))
        .await;

    let RefreshOutcome::Resolved(snapshot) = outcome else {
        panic!("expected a resolved balance");
    };
    assert_eq!(snapshot.amount, BaseAmount::from(12_500_000u64));
    assert_eq!(snapshot.display_amount(), "12.5");
    assert_eq!(snapshot.to_string(), "12.5 ATOM");
    assert_eq!(dispatcher.current(), BalanceState::Resolved(snapshot));
    assert_eq!(
        factory.endpoints()[0].as_str(),
        "https://rpc.cosmoshub.example/"
    );
}

#[tokio::test]
async fn test_contract_balance_uses_smart_query() {
    let factory = Arc::new(MockQueryFactory::new().with_contract_response(
        "wasm1abc",
        "cosmos1alice",
        json!({"balance": "750000"}),
    ));
    let dispatcher = dispatcher(Arc::clone(&factory));

    let outcome = dispatcher.refresh("cosmos1alice", &abc(), None).await;

    assert_eq!(
        outcome.snapshot().map(|s| s.amount.clone()),
        Some(BaseAmount::from(750_000u64))
    );
    assert_eq!(
        factory.contract_queries(),
        vec![(
            "wasm1abc".to_string(),
            json!({"balance": {"address": "cosmos1alice"}})
        )]
    );
}

#[tokio::test]
async fn test_failed_query_publishes_zero() {
    let factory = Arc::new(MockQueryFactory::new().failing("connection refused"));
    let dispatcher = dispatcher(factory);

    let outcome = dispatcher.refresh("cosmos1alice", &atom(), None).await;

    let RefreshOutcome::Failed(snapshot) = outcome else {
        panic!("expected a failed lookup");
    };
    assert_eq!(snapshot.amount.to_string(), "0");

    match dispatcher.current() {
        BalanceState::Failed { snapshot, reason } => {
            assert_eq!(snapshot.display_amount(), "0");
            assert!(reason.contains("bank balance"), "reason: {reason}");
        }
        other => panic!("expected Failed state, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_contract_response_publishes_zero() {
    let factory = Arc::new(MockQueryFactory::new().with_contract_response(
        "wasm1abc",
        "cosmos1alice",
        json!({"balance": 12}),
    ));
    let dispatcher = dispatcher(factory);

    let outcome = dispatcher.refresh("cosmos1alice", &abc(), None).await;
    assert!(matches!(outcome, RefreshOutcome::Failed(ref s) if s.amount.is_zero()));
}

#[tokio::test]
async fn test_missing_account_publishes_zero_without_query() {
    let factory = Arc::new(MockQueryFactory::new());
    let dispatcher = dispatcher(Arc::clone(&factory));

    let outcome = dispatcher.refresh("  ", &atom(), None).await;

    assert!(matches!(outcome, RefreshOutcome::Failed(_)));
    assert!(factory.endpoints().is_empty());
}

#[tokio::test]
async fn test_falls_back_to_directory_endpoint() {
    let factory = Arc::new(MockQueryFactory::new());
    let dispatcher = dispatcher(Arc::clone(&factory));

    dispatcher.refresh("cosmos1alice", &atom(), None).await;

    assert_eq!(
        factory.endpoints()[0].as_str(),
        "https://rpc.cosmos.directory/cosmoshub"
    );
}

#[tokio::test]
async fn test_configured_endpoint_beats_directory() {
    let factory = Arc::new(MockQueryFactory::new());
    let config = MultisendConfigBuilder::with_defaults()
        .chain_query_endpoint("cosmoshub", "https://lcd.internal/".parse().unwrap())
        .build();
    let dispatcher = BalanceDispatcher::new(Arc::clone(&factory) as _, Arc::new(config));

    dispatcher.refresh("cosmos1alice", &atom(), None).await;

    assert_eq!(factory.endpoints()[0].as_str(), "https://lcd.internal/");
}

#[tokio::test]
async fn test_superseded_ticket_is_discarded() {
    let factory = Arc::new(
        MockQueryFactory::new()
            .with_native_balance("cosmos1alice", "uatom", "1000000")
            .with_native_balance("cosmos1bob", "uatom", "2000000"),
    );
    let dispatcher = dispatcher(factory);

    let stale = dispatcher.begin("cosmos1alice", &atom());
    let fresh = dispatcher.begin("cosmos1bob", &atom());
    assert!(fresh.id > stale.id);

    let fresh_outcome = dispatcher.fetch(fresh, None).await;
    let stale_outcome = dispatcher.fetch(stale, None).await;

    assert_eq!(stale_outcome, RefreshOutcome::Superseded);
    let snapshot = fresh_outcome.snapshot().unwrap();
    assert_eq!(snapshot.account, "cosmos1bob");
    assert_eq!(dispatcher.current().snapshot(), Some(snapshot));
}

#[tokio::test]
async fn test_late_arriving_stale_result_is_ignored() {
    let gate = Arc::new(Notify::new());
    let factory = Arc::new(
        MockQueryFactory::new()
            .with_native_balance("cosmos1slow", "uatom", "111")
            .with_native_balance("cosmos1fast", "uatom", "222")
            .with_gate("cosmos1slow", Arc::clone(&gate)),
    );
    let dispatcher = dispatcher(factory);

    let slow = dispatcher.begin("cosmos1slow", &atom());
    let fast = dispatcher.begin("cosmos1fast", &atom());

    let (slow_outcome, fast_outcome) = futures::join!(dispatcher.fetch(slow, None), async {
        let outcome = dispatcher.fetch(fast, None).await;
        // Release the older query only after the newer one has published
        gate.notify_one();
        outcome
    });

    assert_eq!(slow_outcome, RefreshOutcome::Superseded);
    assert!(matches!(fast_outcome, RefreshOutcome::Resolved(_)));
    assert_eq!(
        dispatcher.current().snapshot().map(|s| s.amount.to_string()),
        Some("222".to_string())
    );
}

#[tokio::test]
async fn test_subscribers_see_querying_then_resolved() {
    let factory = Arc::new(MockQueryFactory::new().with_native_balance(
        "cosmos1alice",
        "uatom",
        "5",
    ));
    let dispatcher = dispatcher(factory);
    let mut states = dispatcher.subscribe();
    assert_eq!(*states.borrow_and_update(), BalanceState::Idle);

    let ticket = dispatcher.begin("cosmos1alice", &atom());
    assert!(states.has_changed().unwrap());
    assert!(states.borrow_and_update().is_querying());

    dispatcher.fetch(ticket, None).await;
    assert!(states.has_changed().unwrap());
    assert!(matches!(*states.borrow_and_update(), BalanceState::Resolved(_)));
}

#[tokio::test]
async fn test_reset_returns_to_idle_and_supersedes() {
    let factory = Arc::new(MockQueryFactory::new());
    let dispatcher = dispatcher(factory);

    let ticket = dispatcher.begin("cosmos1alice", &atom());
    dispatcher.reset();

    assert_eq!(dispatcher.fetch(ticket, None).await, RefreshOutcome::Superseded);
    assert_eq!(dispatcher.current(), BalanceState::Idle);
}
