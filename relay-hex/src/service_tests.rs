//! RelayService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::{Value, json};

    use relay_types::{Bill, BillSink, DownstreamReply, Payer, RelayError, SinkError};

    use crate::service::{RelayOutcome, RelayService, parse_notification};

    /// Sink that records bills and answers with a fixed reply.
    pub struct MockSink {
        bills: Mutex<Vec<Bill>>,
        fail: bool,
    }

    impl MockSink {
        pub fn new() -> Self {
            Self {
                bills: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                bills: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        pub fn bills(&self) -> Vec<Bill> {
            self.bills.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BillSink for MockSink {
        async fn submit(&self, bill: &Bill) -> Result<DownstreamReply, SinkError> {
            self.bills.lock().unwrap().push(bill.clone());
            if self.fail {
                return Err(SinkError::Network("connection refused".into()));
            }
            Ok(DownstreamReply {
                status: 201,
                body: json!(42),
            })
        }
    }

    fn notification(transaction: Value) -> Value {
        json!({ "content": { "transactions": [transaction] } })
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_notification(b"{not json").unwrap_err();
        assert!(matches!(err, RelayError::InvalidJson(_)));
    }

    #[test]
    fn test_parse_valid_json() {
        let value = parse_notification(br#"{"content": {}}"#).unwrap();
        assert_eq!(value, json!({"content": {}}));
    }

    #[tokio::test]
    async fn test_missing_content_is_invalid_structure() {
        let service = RelayService::new(MockSink::new());

        let result = service.relay(json!({"version": "v0"})).await;
        assert!(matches!(result, Err(RelayError::InvalidStructure)));

        let result = service.relay(json!({"content": {"id": 1}})).await;
        assert!(matches!(result, Err(RelayError::InvalidStructure)));
        assert!(service.sink().bills().is_empty());
    }

    #[tokio::test]
    async fn test_non_sodexo_is_skipped() {
        let service = RelayService::new(MockSink::new());

        let outcome = service
            .relay(notification(json!({
                "description": "Groceries",
                "amount": "-20",
                "source_name": "Checking Account"
            })))
            .await
            .unwrap();

        assert_eq!(outcome, RelayOutcome::Skipped);
        assert!(service.sink().bills().is_empty());
    }

    #[tokio::test]
    async fn test_relays_bill_with_derived_payer() {
        let service = RelayService::new(MockSink::new());

        let outcome = service
            .relay(notification(json!({
                "description": "Lunch",
                "amount": "-12.30",
                "source_name": "Sodexo Giulia"
            })))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            RelayOutcome::Relayed(DownstreamReply {
                status: 201,
                body: json!(42)
            })
        );

        let bills = service.sink().bills();
        assert_eq!(bills.len(), 1);
        assert_eq!(bills[0].what, "Lunch");
        assert_eq!(bills[0].amount, 12.3);
        assert_eq!(bills[0].payer, Payer::Giulia);
        assert_eq!(bills[0].payed_for, vec![Payer::Matteo, Payer::Giulia]);
    }

    #[tokio::test]
    async fn test_matteo_payer_is_case_insensitive() {
        let service = RelayService::new(MockSink::new());

        service
            .relay(notification(json!({
                "amount": -42.5,
                "source_name": "SODEXO MATTEO CARD"
            })))
            .await
            .unwrap();

        let bills = service.sink().bills();
        assert_eq!(bills[0].payer, Payer::Matteo);
        assert_eq!(bills[0].amount, 42.5);
        assert_eq!(bills[0].what, "No description");
    }

    #[tokio::test]
    async fn test_unknown_payer_is_forwarded_by_default() {
        let service = RelayService::new(MockSink::new());

        let outcome = service
            .relay(notification(json!({"source_name": "Sodexo"})))
            .await
            .unwrap();

        assert!(matches!(outcome, RelayOutcome::Relayed(_)));
        assert_eq!(service.sink().bills()[0].payer, Payer::Unknown);
    }

    #[tokio::test]
    async fn test_unknown_payer_rejected_when_configured() {
        let service = RelayService::new(MockSink::new()).reject_unknown_payer(true);

        let result = service
            .relay(notification(json!({"source_name": "Sodexo Card"})))
            .await;

        match result {
            Err(RelayError::UnknownPayer { source_name }) => assert_eq!(source_name, "sodexo card"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(service.sink().bills().is_empty());
    }

    #[tokio::test]
    async fn test_only_first_transaction_is_used() {
        let service = RelayService::new(MockSink::new());

        service
            .relay(json!({"content": {"transactions": [
                {"description": "first", "source_name": "sodexo matteo"},
                {"description": "second", "source_name": "sodexo giulia"}
            ]}}))
            .await
            .unwrap();

        let bills = service.sink().bills();
        assert_eq!(bills.len(), 1);
        assert_eq!(bills[0].what, "first");
    }

    #[tokio::test]
    async fn test_empty_transactions_fails_with_payload() {
        let service = RelayService::new(MockSink::new());
        let body = json!({"content": {"transactions": []}});

        match service.relay(body.clone()).await {
            Err(RelayError::Failed { message, raw }) => {
                assert_eq!(message, "transactions list is empty");
                assert_eq!(raw, body);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_sink_failure_is_reported() {
        let service = RelayService::new(MockSink::failing());

        let result = service
            .relay(notification(json!({"source_name": "sodexo giulia"})))
            .await;

        match result {
            Err(RelayError::Failed { message, .. }) => {
                assert_eq!(message, "Network error: connection refused")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
