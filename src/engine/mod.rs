use tracing::{info, warn};

use crate::api::{ApiError, CommandStatus, DreamhostApi};
use crate::records::AddressFamily;

/// What one family's reconciliation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// Published value already equals the observed address; no API calls
    /// were made.
    UpToDate,
    /// Stale value (if any) was deleted and the observed address added.
    Replaced { previous: Option<String> },
}

/// Bring the published record for `domain`/`family` in line with the
/// host's observed address.
///
/// DreamHost has no atomic replace, so an update is a delete of the old
/// value followed by an add of the new one; between the two calls the
/// domain can transiently have no record of that type. That window is
/// accepted, not worked around.
///
/// A delete the provider rejects in-band does not stop the add: leaving a
/// stale record behind is better than leaving none, and the next scheduled
/// run retries the whole pass anyway. Transport failures do propagate.
pub async fn reconcile(
    api: &dyn DreamhostApi,
    domain: &str,
    family: AddressFamily,
    current: Option<&str>,
    observed: &str,
) -> Result<Reconciliation, ApiError> {
    if current == Some(observed) {
        info!(%family, domain, value = observed, "record up to date");
        return Ok(Reconciliation::UpToDate);
    }

    let record_type = family.record_type();

    if let Some(stale) = current {
        info!(%family, domain, record_type, value = stale, "deleting stale record");
        match api.remove_record(domain, record_type, stale).await? {
            CommandStatus::Success => info!(%family, domain, value = stale, "record deleted"),
            CommandStatus::ProviderError(message) => {
                warn!(%family, domain, value = stale, message = %message, "provider rejected delete");
            }
        }
    }

    info!(%family, domain, record_type, value = observed, "adding record");
    match api.add_record(domain, record_type, observed).await? {
        CommandStatus::Success => info!(%family, domain, value = observed, "record added"),
        CommandStatus::ProviderError(message) => {
            warn!(%family, domain, value = observed, message = %message, "provider rejected add");
        }
    }

    Ok(Reconciliation::Replaced {
        previous: current.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every write command in call order.
    #[derive(Default)]
    struct RecordingApi {
        calls: Mutex<Vec<String>>,
        remove_status: Option<CommandStatus>,
        add_status: Option<CommandStatus>,
    }

    impl RecordingApi {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DreamhostApi for RecordingApi {
        async fn list_records(&self) -> Result<String, ApiError> {
            self.calls.lock().unwrap().push("list".to_string());
            Ok(String::new())
        }

        async fn remove_record(
            &self,
            record: &str,
            record_type: &str,
            value: &str,
        ) -> Result<CommandStatus, ApiError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("remove {} {} {}", record, record_type, value));
            Ok(self.remove_status.clone().unwrap_or(CommandStatus::Success))
        }

        async fn add_record(
            &self,
            record: &str,
            record_type: &str,
            value: &str,
        ) -> Result<CommandStatus, ApiError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("add {} {} {}", record, record_type, value));
            Ok(self.add_status.clone().unwrap_or(CommandStatus::Success))
        }

        async fn current_host_address(
            &self,
            _family: AddressFamily,
        ) -> Result<String, ApiError> {
            unimplemented!("not used by the engine")
        }
    }

    #[tokio::test]
    async fn test_equal_values_make_no_calls() {
        let api = RecordingApi::default();

        let outcome = reconcile(
            &api,
            "example.com",
            AddressFamily::V4,
            Some("1.2.3.4"),
            "1.2.3.4",
        )
        .await
        .unwrap();

        assert_eq!(outcome, Reconciliation::UpToDate);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_changed_value_deletes_then_adds() {
        let api = RecordingApi::default();

        let outcome = reconcile(
            &api,
            "example.com",
            AddressFamily::V4,
            Some("1.2.3.4"),
            "5.6.7.8",
        )
        .await
        .unwrap();

        assert_eq!(
            outcome,
            Reconciliation::Replaced {
                previous: Some("1.2.3.4".to_string())
            }
        );
        assert_eq!(
            api.calls(),
            vec![
                "remove example.com A 1.2.3.4".to_string(),
                "add example.com A 5.6.7.8".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_absent_record_is_pure_add() {
        let api = RecordingApi::default();

        let outcome = reconcile(&api, "example.com", AddressFamily::V4, None, "5.6.7.8")
            .await
            .unwrap();

        assert_eq!(outcome, Reconciliation::Replaced { previous: None });
        assert_eq!(api.calls(), vec!["add example.com A 5.6.7.8".to_string()]);
    }

    #[tokio::test]
    async fn test_rejected_delete_does_not_block_add() {
        let api = RecordingApi {
            remove_status: Some(CommandStatus::ProviderError(
                "error: no_such_record".to_string(),
            )),
            ..Default::default()
        };

        reconcile(
            &api,
            "example.com",
            AddressFamily::V4,
            Some("1.2.3.4"),
            "5.6.7.8",
        )
        .await
        .unwrap();

        assert_eq!(
            api.calls(),
            vec![
                "remove example.com A 1.2.3.4".to_string(),
                "add example.com A 5.6.7.8".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_rejected_add_still_completes() {
        let api = RecordingApi {
            add_status: Some(CommandStatus::ProviderError(
                "error: invalid value".to_string(),
            )),
            ..Default::default()
        };

        let outcome = reconcile(&api, "example.com", AddressFamily::V4, None, "bogus")
            .await
            .unwrap();

        // A provider-side rejection is logged, not escalated.
        assert_eq!(outcome, Reconciliation::Replaced { previous: None });
    }

    #[tokio::test]
    async fn test_ipv6_uses_aaaa_type() {
        let api = RecordingApi::default();

        reconcile(
            &api,
            "example.com",
            AddressFamily::V6,
            Some("2001:db8::1"),
            "2001:db8::2",
        )
        .await
        .unwrap();

        assert_eq!(
            api.calls(),
            vec![
                "remove example.com AAAA 2001:db8::1".to_string(),
                "add example.com AAAA 2001:db8::2".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_no_normalization_before_compare() {
        // Same address, different spelling: treated as a change.
        let api = RecordingApi::default();

        let outcome = reconcile(
            &api,
            "example.com",
            AddressFamily::V6,
            Some("2001:db8:0:0::1"),
            "2001:db8::1",
        )
        .await
        .unwrap();

        assert!(matches!(outcome, Reconciliation::Replaced { .. }));
        assert_eq!(api.calls().len(), 2);
    }
}
