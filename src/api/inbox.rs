//! # Inbox API Module
//!
//! Read operations behind the operator dashboard.

use crate::{consts, models, repo};

/// Loads the fixed window of most recent messages, newest first.
///
/// Every dashboard load performs a fresh read; nothing is cached, so
/// the view is always current at the cost of one query per load.
pub async fn recent_messages(
    repo: &repo::ImplMessageRepo,
) -> anyhow::Result<Vec<models::sms::SmsRecord>> {
    repo.get_recent_sms(consts::RECENT_MESSAGES_LIMIT).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MockMessageRepo;
    use chrono::Utc;
    use mockall::predicate::*;

    fn create_test_record(id: i64, body: &str) -> models::sms::SmsRecord {
        models::sms::SmsRecord {
            id,
            from_number: "+447700900000".to_string(),
            to_number: "+447911123456".to_string(),
            body: body.to_string(),
            provider_raw: "{}".to_string(),
            created_at: Utc::now(),
        }
    }

    #[ntex::test]
    async fn test_recent_messages_reads_the_fixed_window() {
        let expected = vec![create_test_record(2, "second"), create_test_record(1, "first")];

        let mut mock_repo = MockMessageRepo::new();
        mock_repo
            .expect_get_recent_sms()
            .with(eq(100))
            .times(1)
            .returning(move |_| {
                let records = expected.clone();
                Box::pin(async move { Ok(records) })
            });
        let mock_repo: Box<dyn repo::MessageRepo> = Box::new(mock_repo);

        let result = recent_messages(&mock_repo).await;

        assert!(result.is_ok_and(|records| {
            records.len() == 2 && records[0].body == "second" && records[1].body == "first"
        }));
    }

    #[ntex::test]
    async fn test_recent_messages_propagates_repo_error() {
        let mut mock_repo = MockMessageRepo::new();
        mock_repo
            .expect_get_recent_sms()
            .with(eq(100))
            .times(1)
            .returning(|_| Box::pin(async move { Err(anyhow::anyhow!("database unavailable")) }));
        let mock_repo: Box<dyn repo::MessageRepo> = Box::new(mock_repo);

        let result = recent_messages(&mock_repo).await;

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("database unavailable")
        );
    }
}
