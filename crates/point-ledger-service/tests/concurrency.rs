//! Concurrency tests for the ledger.
//!
//! These drive `LedgerService` directly with concurrent tasks and assert
//! that no mutation is lost, rejected requests change nothing, and history
//! replays to the balance.

use std::sync::Arc;

use point_ledger_core::{LedgerConfig, LedgerError, UserId, UserPoint, DEFAULT_MAX_BALANCE};
use point_ledger_service::LedgerService;
use point_ledger_store::{MemoryBalanceStore, MemoryHistoryStore};

fn new_ledger() -> Arc<LedgerService> {
    capped_ledger(DEFAULT_MAX_BALANCE)
}

fn capped_ledger(max_balance: i64) -> Arc<LedgerService> {
    Arc::new(LedgerService::new(
        Arc::new(MemoryBalanceStore::default()),
        Arc::new(MemoryHistoryStore::default()),
        LedgerConfig { max_balance },
    ))
}

async fn join_results(
    tasks: Vec<tokio::task::JoinHandle<Result<UserPoint, LedgerError>>>,
) -> Vec<Result<UserPoint, LedgerError>> {
    let mut results = Vec::with_capacity(tasks.len());
    for task in tasks {
        results.push(task.await.expect("task panicked"));
    }
    results
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_charges_are_all_applied() {
    let ledger = new_ledger();
    let user_id = UserId::new(1);
    ledger.charge(user_id, 100).await.unwrap();

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let ledger = Arc::clone(&ledger);
        tasks.push(tokio::spawn(async move { ledger.charge(user_id, 10).await }));
    }
    for result in join_results(tasks).await {
        result.unwrap();
    }

    assert_eq!(ledger.get_balance(user_id).await.unwrap().point, 200);
    assert_eq!(ledger.get_history(user_id).await.unwrap().len(), 11);
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_uses_are_all_applied() {
    let ledger = new_ledger();
    let user_id = UserId::new(1);
    ledger.charge(user_id, 100).await.unwrap();

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let ledger = Arc::clone(&ledger);
        tasks.push(tokio::spawn(
            async move { ledger.use_points(user_id, 10).await },
        ));
    }
    for result in join_results(tasks).await {
        result.unwrap();
    }

    assert_eq!(ledger.get_balance(user_id).await.unwrap().point, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn competing_uses_stop_exactly_at_insufficient_balance() {
    let ledger = new_ledger();
    let user_id = UserId::new(1);
    ledger.charge(user_id, 100).await.unwrap();

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let ledger = Arc::clone(&ledger);
        tasks.push(tokio::spawn(
            async move { ledger.use_points(user_id, 30).await },
        ));
    }
    let results = join_results(tasks).await;

    // 100 covers exactly three uses of 30, in any interleaving.
    let successes = results.iter().filter(|result| result.is_ok()).count();
    assert_eq!(successes, 3);
    for failure in results.iter().filter(|result| result.is_err()) {
        assert!(matches!(
            failure,
            Err(LedgerError::InsufficientBalance { .. })
        ));
    }

    assert_eq!(ledger.get_balance(user_id).await.unwrap().point, 10);
    assert_eq!(ledger.get_history(user_id).await.unwrap().len(), 4);
}

#[tokio::test(flavor = "multi_thread")]
async fn cap_rejections_under_contention_change_nothing() {
    let ledger = capped_ledger(100);
    let user_id = UserId::new(1);

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let ledger = Arc::clone(&ledger);
        tasks.push(tokio::spawn(async move { ledger.charge(user_id, 30).await }));
    }
    let results = join_results(tasks).await;

    // A cap of 100 admits exactly three charges of 30, in any interleaving.
    let successes = results.iter().filter(|result| result.is_ok()).count();
    assert_eq!(successes, 3);
    for failure in results.iter().filter(|result| result.is_err()) {
        assert!(matches!(
            failure,
            Err(LedgerError::BalanceCapExceeded { .. })
        ));
    }

    assert_eq!(ledger.get_balance(user_id).await.unwrap().point, 90);
    assert_eq!(ledger.get_history(user_id).await.unwrap().len(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn an_equal_charge_and_use_cancel_out() {
    let ledger = new_ledger();
    let user_id = UserId::new(1);
    ledger.charge(user_id, 100).await.unwrap();

    let charger = Arc::clone(&ledger);
    let charge = tokio::spawn(async move { charger.charge(user_id, 40).await });
    let spender = Arc::clone(&ledger);
    let spend = tokio::spawn(async move { spender.use_points(user_id, 40).await });

    // Both fit whichever runs first: 100 covers the use, 140 is under the cap.
    charge.await.expect("task panicked").unwrap();
    spend.await.expect("task panicked").unwrap();

    assert_eq!(ledger.get_balance(user_id).await.unwrap().point, 100);

    let entries = ledger.get_history(user_id).await.unwrap();
    assert_eq!(entries.len(), 3);
    let pair = &entries[1..];
    assert_eq!(
        pair.iter()
            .filter(|entry| entry.transaction_type.is_charge())
            .count(),
        1
    );
    assert_eq!(
        pair.iter()
            .filter(|entry| entry.transaction_type.is_use())
            .count(),
        1
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn interleaved_charges_and_uses_lose_nothing() {
    let ledger = new_ledger();
    let user_id = UserId::new(1);
    ledger.charge(user_id, 100).await.unwrap();

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let charger = Arc::clone(&ledger);
        tasks.push(tokio::spawn(async move { charger.charge(user_id, 10).await }));

        let spender = Arc::clone(&ledger);
        tasks.push(tokio::spawn(async move {
            spender.use_points(user_id, 5).await
        }));
    }
    for result in join_results(tasks).await {
        // Uses of 5 always fit: the seed balance alone covers all ten.
        result.unwrap();
    }

    assert_eq!(ledger.get_balance(user_id).await.unwrap().point, 150);
    assert_eq!(ledger.get_history(user_id).await.unwrap().len(), 21);
}

#[tokio::test(flavor = "multi_thread")]
async fn history_replays_to_the_final_balance() {
    let ledger = new_ledger();
    let user_id = UserId::new(1);
    ledger.charge(user_id, 100).await.unwrap();

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let charger = Arc::clone(&ledger);
        tasks.push(tokio::spawn(async move { charger.charge(user_id, 25).await }));

        let spender = Arc::clone(&ledger);
        tasks.push(tokio::spawn(async move {
            spender.use_points(user_id, 10).await
        }));
    }
    for result in join_results(tasks).await {
        result.unwrap();
    }

    let final_balance = ledger.get_balance(user_id).await.unwrap().point;
    let entries = ledger.get_history(user_id).await.unwrap();

    let mut running = 0;
    for entry in &entries {
        running += entry.signed_amount();
        assert!(running >= 0);
        assert!(running <= DEFAULT_MAX_BALANCE);
    }
    assert_eq!(running, final_balance);
}

#[tokio::test(flavor = "multi_thread")]
async fn users_do_not_contend_with_each_other() {
    let ledger = new_ledger();

    let mut tasks = Vec::new();
    for user in 1..=4 {
        for _ in 0..25 {
            let ledger = Arc::clone(&ledger);
            tasks.push(tokio::spawn(async move {
                ledger.charge(UserId::new(user), 4).await
            }));
        }
    }
    for result in join_results(tasks).await {
        result.unwrap();
    }

    for user in 1..=4 {
        let record = ledger.get_balance(UserId::new(user)).await.unwrap();
        assert_eq!(record.point, 100);
        assert_eq!(
            ledger.get_history(UserId::new(user)).await.unwrap().len(),
            25
        );
    }
}
