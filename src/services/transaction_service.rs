use chrono::DateTime;

use crate::api::bank::models::TransactionRecord;
use crate::api::bank::BankClient;
use crate::session::Session;
use crate::utils::Table;

/// Fetch the account's ledger entries, server order preserved
pub async fn list_transactions(
    client: &BankClient,
    session: &Session,
) -> Result<Vec<TransactionRecord>, String> {
    client
        .transactions(session.bearer_token())
        .await
        .map(|r| r.transactions)
        .map_err(|e| e.to_string())
}

/// One list line per ledger entry:
/// `<type>: $<amount> - <description> (<timestamp>)`
pub fn format_record(tx: &TransactionRecord) -> String {
    format!(
        "{}: ${} - {} ({})",
        tx.kind,
        tx.amount,
        tx.description.as_deref().unwrap_or(""),
        tx.timestamp
    )
}

/// The same records as an aligned text table
pub fn build_table(records: &[TransactionRecord]) -> String {
    let mut table = Table::new(vec!["Type", "Amount", "Description", "Date"]);
    for tx in records {
        let amount = format!("{:.2}", tx.amount);
        let date = short_timestamp(&tx.timestamp);
        table.add_row(vec![
            tx.kind.as_str(),
            &amount,
            tx.description.as_deref().unwrap_or("-"),
            &date,
        ]);
    }
    table.render()
}

/// The backend emits RFC 2822 dates (jsonify of a DateTime); anything else
/// is shown raw.
fn short_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        kind: &str,
        amount: f64,
        description: Option<&str>,
        timestamp: &str,
    ) -> TransactionRecord {
        TransactionRecord {
            kind: kind.to_string(),
            amount,
            description: description.map(|s| s.to_string()),
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn test_format_record() {
        let tx = record(
            "deposit",
            50.0,
            Some("Deposit of 50.0"),
            "Tue, 02 Jan 2024 10:00:00 GMT",
        );
        assert_eq!(
            format_record(&tx),
            "deposit: $50 - Deposit of 50.0 (Tue, 02 Jan 2024 10:00:00 GMT)"
        );
    }

    #[test]
    fn test_format_record_fractional_amount() {
        let tx = record("transfer", 12.5, Some("Transferred 12.5 to bob"), "t");
        assert_eq!(
            format_record(&tx),
            "transfer: $12.5 - Transferred 12.5 to bob (t)"
        );
    }

    #[test]
    fn test_format_record_missing_description() {
        let tx = record("withdraw", 5.0, None, "t");
        assert_eq!(format_record(&tx), "withdraw: $5 -  (t)");
    }

    #[test]
    fn test_short_timestamp_rfc2822() {
        assert_eq!(
            short_timestamp("Tue, 02 Jan 2024 10:00:00 GMT"),
            "2024-01-02 10:00"
        );
    }

    #[test]
    fn test_short_timestamp_passes_through_unknown_formats() {
        assert_eq!(short_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_build_table_has_one_row_per_record() {
        let records = vec![
            record("deposit", 50.0, Some("Deposit of 50.0"), "t1"),
            record("withdraw", 20.0, None, "t2"),
        ];
        let rendered = build_table(&records);
        assert!(rendered.contains("Type"));
        assert!(rendered.contains("deposit"));
        assert!(rendered.contains("withdraw"));
        assert!(rendered.contains("50.00"));
        assert!(rendered.contains("20.00"));
    }
}
