use super::*;
use common::{controller, gated};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

mod common {
    use super::*;

    #[derive(Default)]
    pub(super) struct Notices {
        pub(super) seen: Mutex<Vec<String>>,
    }

    impl Notices {
        pub(super) fn messages(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl NotificationSink for Notices {
        fn notify(&self, message: &str) {
            self.seen.lock().unwrap().push(message.to_string());
        }
    }

    pub(super) fn controller() -> (AsyncRequestController<&'static str>, Arc<Notices>) {
        let notices = Arc::new(Notices::default());
        let sink: Arc<dyn NotificationSink> = notices.clone();
        (AsyncRequestController::new(sink), notices)
    }

    pub(super) type Reply = Result<&'static str, ApiError>;
    pub(super) type GateFuture = Pin<Box<dyn Future<Output = Reply> + Send>>;

    /// Operation that resolves with whatever is sent on the returned sender.
    pub(super) fn gated() -> (oneshot::Sender<Reply>, impl FnOnce() -> GateFuture) {
        let (tx, rx) = oneshot::channel::<Reply>();
        let op = move || -> GateFuture {
            Box::pin(async move {
                rx.await
                    .unwrap_or_else(|_| Err(ApiError::Transport("gate dropped".to_string())))
            })
        };
        (tx, op)
    }
}

mod execute {
    use super::*;

    #[tokio::test]
    async fn test_success_commits_data() {
        let (controller, notices) = controller();

        let outcome = controller.execute(|| async { Ok::<_, ApiError>("laptops") }).await;

        assert_eq!(outcome, Outcome::Committed("laptops"));
        let state = controller.snapshot();
        assert_eq!(state.status, RequestStatus::Success);
        assert_eq!(state.data, Some("laptops"));
        assert_eq!(state.error_message, None);
        assert_eq!(state.generation, 1);
        assert!(notices.messages().is_empty());
    }

    #[tokio::test]
    async fn test_loading_is_set_at_call_time() {
        let (controller, _) = controller();
        let (tx, op) = gated();

        let pending = controller.execute(op);

        assert!(controller.snapshot().is_loading());
        tx.send(Ok("done")).unwrap();
        pending.await;
        assert_eq!(controller.snapshot().status, RequestStatus::Success);
    }

    #[tokio::test]
    async fn test_generation_increments_per_call() {
        let (controller, _) = controller();

        for expected in 1..=3 {
            controller.execute(|| async { Ok::<_, ApiError>("x") }).await;
            assert_eq!(controller.generation(), expected);
        }
    }

    #[tokio::test]
    async fn test_stale_while_revalidate() {
        let (controller, _) = controller();
        controller.execute(|| async { Ok::<_, ApiError>("first") }).await;
        let (tx, op) = gated();

        let pending = controller.execute(op);

        let state = controller.snapshot();
        assert_eq!(state.status, RequestStatus::Loading);
        assert_eq!(state.data, Some("first"));
        tx.send(Ok("second")).unwrap();
        pending.await;
        assert_eq!(controller.snapshot().data, Some("second"));
    }

    #[tokio::test]
    async fn test_execute_with_passes_args() {
        let (controller, _) = controller();

        let outcome = controller
            .execute_with(|name: &'static str| async move { Ok::<_, ApiError>(name) }, "phones")
            .await;

        assert_eq!(outcome.committed(), Some("phones"));
    }
}

mod ordering {
    use super::*;

    #[tokio::test]
    async fn test_later_call_wins_when_it_resolves_first() {
        let (controller, _) = controller();
        let (tx_a, op_a) = gated();
        let (tx_b, op_b) = gated();

        let a = controller.execute(op_a);
        let b = controller.execute(op_b);

        tx_b.send(Ok("b")).unwrap();
        assert_eq!(b.await, Outcome::Committed("b"));

        tx_a.send(Ok("a")).unwrap();
        assert_eq!(a.await, Outcome::Superseded);

        let state = controller.snapshot();
        assert_eq!(state.data, Some("b"));
        assert_eq!(state.status, RequestStatus::Success);
    }

    #[tokio::test]
    async fn test_later_call_wins_when_it_resolves_last() {
        let (controller, _) = controller();
        let (tx_a, op_a) = gated();
        let (tx_b, op_b) = gated();

        let a = controller.execute(op_a);
        let b = controller.execute(op_b);

        tx_a.send(Ok("a")).unwrap();
        assert!(a.await.is_superseded());
        assert!(controller.snapshot().is_loading());
        assert_eq!(controller.snapshot().data, None);

        tx_b.send(Ok("b")).unwrap();
        b.await;
        assert_eq!(controller.snapshot().data, Some("b"));
    }

    #[tokio::test]
    async fn test_issue_order_not_poll_order() {
        let (controller, _) = controller();
        let (tx_a, op_a) = gated();
        let (tx_b, op_b) = gated();
        let a = controller.execute(op_a);
        let b = controller.execute(op_b);
        tx_a.send(Ok("a")).unwrap();
        tx_b.send(Ok("b")).unwrap();

        let (outcome_a, outcome_b) = tokio::join!(a, b);

        assert_eq!(outcome_a, Outcome::Superseded);
        assert_eq!(outcome_b, Outcome::Committed("b"));
        assert_eq!(controller.snapshot().data, Some("b"));
    }

    #[tokio::test]
    async fn test_concurrent_calls_from_spawned_tasks() {
        let (controller, _) = controller();
        let (tx_a, op_a) = gated();
        let (tx_b, op_b) = gated();

        let a = tokio::spawn(controller.execute(op_a));
        let b = tokio::spawn(controller.execute(op_b));
        tx_b.send(Ok("b")).unwrap();
        b.await.unwrap();
        tx_a.send(Ok("a")).unwrap();
        a.await.unwrap();

        assert_eq!(controller.snapshot().data, Some("b"));
    }

    #[tokio::test]
    async fn test_clones_share_generation() {
        let (controller, _) = controller();
        let other = controller.clone();
        let (tx_a, op_a) = gated();

        let a = controller.execute(op_a);
        other.execute(|| async { Ok::<_, ApiError>("b") }).await;
        tx_a.send(Ok("a")).unwrap();

        assert!(a.await.is_superseded());
        assert_eq!(controller.snapshot().data, Some("b"));
    }
}

mod failures {
    use super::*;

    #[tokio::test]
    async fn test_failure_sets_error_and_notifies() {
        let (controller, notices) = controller();

        let outcome = controller
            .execute(|| async { Err::<&str, _>(ApiError::Transport("connection reset".to_string())) })
            .await;

        assert_eq!(outcome, Outcome::Failed("network error: connection reset".to_string()));
        let state = controller.snapshot();
        assert_eq!(state.status, RequestStatus::Error);
        assert_eq!(
            state.error_message.as_deref(),
            Some("network error: connection reset")
        );
        assert_eq!(notices.messages(), vec!["network error: connection reset"]);
    }

    #[tokio::test]
    async fn test_structured_message_preferred() {
        let (controller, notices) = controller();

        controller
            .execute(|| async {
                Err::<&str, _>(ApiError::from_response(422, r#"{"message": "Price filter is invalid"}"#))
            })
            .await;

        assert_eq!(
            controller.snapshot().error_message.as_deref(),
            Some("Price filter is invalid")
        );
        assert_eq!(notices.messages(), vec!["Price filter is invalid"]);
    }

    #[tokio::test]
    async fn test_unstructured_body_falls_back_to_description() {
        let (controller, _) = controller();

        controller
            .execute(|| async { Err::<&str, _>(ApiError::from_response(502, "<html>Bad Gateway</html>")) })
            .await;

        assert_eq!(
            controller.snapshot().error_message.as_deref(),
            Some("request failed with status 502")
        );
    }

    #[tokio::test]
    async fn test_blank_description_uses_generic_message() {
        let (controller, _) = controller();

        controller.execute(|| async { Err::<&str, _>(String::new()) }).await;

        assert_eq!(
            controller.snapshot().error_message.as_deref(),
            Some(GENERIC_FAILURE_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_superseded_failure_is_silent() {
        let (controller, notices) = controller();
        let (tx_a, op_a) = gated();

        let a = controller.execute(op_a);
        controller.execute(|| async { Ok::<_, ApiError>("b") }).await;
        tx_a.send(Err(ApiError::Transport("timeout".to_string()))).unwrap();

        assert!(a.await.is_superseded());
        let state = controller.snapshot();
        assert_eq!(state.status, RequestStatus::Success);
        assert_eq!(state.error_message, None);
        assert!(notices.messages().is_empty());
    }

    #[tokio::test]
    async fn test_new_call_clears_previous_error() {
        let (controller, _) = controller();
        controller
            .execute(|| async { Err::<&str, _>("boom") })
            .await;
        let (tx, op) = gated();

        let pending = controller.execute(op);

        assert_eq!(controller.snapshot().error_message, None);
        tx.send(Ok("ok")).unwrap();
        pending.await;
    }

    #[tokio::test]
    async fn test_closure_sink() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&seen);
        let sink: Arc<dyn NotificationSink> =
            Arc::new(move |message: &str| captured.lock().unwrap().push(message.to_string()));
        let controller = AsyncRequestController::<u32>::new(sink);

        controller.execute(|| async { Err::<u32, _>("quota exceeded") }).await;

        assert_eq!(*seen.lock().unwrap(), vec!["quota exceeded".to_string()]);
    }
}

mod reset {
    use super::*;

    #[tokio::test]
    async fn test_reset_clears_state_but_keeps_generation() {
        let (controller, _) = controller();
        controller.execute(|| async { Ok::<_, ApiError>("data") }).await;

        controller.reset();

        let state = controller.snapshot();
        assert_eq!(state.status, RequestStatus::Idle);
        assert_eq!(state.data, None);
        assert_eq!(state.error_message, None);
        assert_eq!(state.generation, 1);
    }

    #[tokio::test]
    async fn test_in_flight_call_still_commits_after_reset() {
        let (controller, _) = controller();
        let (tx, op) = gated();

        let pending = controller.execute(op);
        controller.reset();
        tx.send(Ok("late")).unwrap();

        assert_eq!(pending.await, Outcome::Committed("late"));
        assert_eq!(controller.snapshot().data, Some("late"));
    }

    #[tokio::test]
    async fn test_in_flight_call_superseded_after_reset_and_new_call() {
        let (controller, _) = controller();
        let (tx, op) = gated();

        let pending = controller.execute(op);
        controller.reset();
        controller.execute(|| async { Ok::<_, ApiError>("fresh") }).await;
        tx.send(Ok("late")).unwrap();

        assert!(pending.await.is_superseded());
        assert_eq!(controller.snapshot().data, Some("fresh"));
    }
}

mod subscribe {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_observe_transitions() {
        let (controller, _) = controller();
        let mut rx = controller.subscribe();
        let (tx, op) = gated();

        let pending = controller.execute(op);
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_loading());

        tx.send(Ok("done")).unwrap();
        pending.await;
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().data, Some("done"));
    }

    #[tokio::test]
    async fn test_superseded_resolution_does_not_notify_subscribers() {
        let (controller, _) = controller();
        let (tx_a, op_a) = gated();
        let a = controller.execute(op_a);
        controller.execute(|| async { Ok::<_, ApiError>("b") }).await;
        let mut rx = controller.subscribe();

        tx_a.send(Ok("a")).unwrap();
        a.await;

        assert!(!rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().data, Some("b"));
    }
}
