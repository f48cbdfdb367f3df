//! Per-category spending aggregation feeding the categories view.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::Transaction;

/// Aggregated figures for one category.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CategoryData {
    pub category_id: String,
    /// Sum of incoming amounts (>= 0).
    pub credit: Decimal,
    /// Sum of outgoing amounts (<= 0).
    pub debit: Decimal,
    pub transactions_count: usize,
}

impl CategoryData {
    pub fn net(&self) -> Decimal {
        self.credit + self.debit
    }
}

/// Buckets transactions by effective category id.
pub fn transactions_by_category(
    transactions: &[Transaction],
) -> BTreeMap<String, Vec<&Transaction>> {
    let mut buckets: BTreeMap<String, Vec<&Transaction>> = BTreeMap::new();
    for transaction in transactions {
        buckets
            .entry(transaction.category_id().to_string())
            .or_default()
            .push(transaction);
    }
    buckets
}

/// Computes per-category figures, largest spending first.
pub fn compute_category_data(
    buckets: &BTreeMap<String, Vec<&Transaction>>,
) -> Vec<CategoryData> {
    let mut data: Vec<CategoryData> = buckets
        .iter()
        .map(|(category_id, transactions)| {
            let mut category = CategoryData {
                category_id: category_id.clone(),
                transactions_count: transactions.len(),
                ..Default::default()
            };
            for transaction in transactions {
                if transaction.is_expense() {
                    category.debit += transaction.amount;
                } else {
                    category.credit += transaction.amount;
                }
            }
            category
        })
        .collect();

    // Most negative debit first; stable, so equal categories keep id order
    data.sort_by_key(|c| c.debit);
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn transaction(category: &str, amount: Decimal) -> Transaction {
        Transaction {
            automatic_category_id: Some(category.to_string()),
            amount,
            ..Default::default()
        }
    }

    #[test]
    fn test_buckets_by_effective_category() {
        let transactions = vec![
            transaction("100", dec!(-10)),
            transaction("100", dec!(-5)),
            transaction("200", dec!(20)),
        ];

        let buckets = transactions_by_category(&transactions);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets["100"].len(), 2);
        assert_eq!(buckets["200"].len(), 1);
    }

    #[test]
    fn test_manual_category_overrides_bucket() {
        let mut recategorized = transaction("100", dec!(-10));
        recategorized.manual_category_id = Some("200".to_string());

        let transactions = vec![recategorized];
        let buckets = transactions_by_category(&transactions);
        assert!(buckets.contains_key("200"));
        assert!(!buckets.contains_key("100"));
    }

    #[test]
    fn test_category_data_splits_credit_and_debit() {
        let transactions = vec![
            transaction("100", dec!(-10)),
            transaction("100", dec!(4)),
            transaction("200", dec!(-50)),
        ];

        let data = compute_category_data(&transactions_by_category(&transactions));

        // Largest spending first
        assert_eq!(data[0].category_id, "200");
        assert_eq!(data[0].debit, dec!(-50));

        assert_eq!(data[1].category_id, "100");
        assert_eq!(data[1].credit, dec!(4));
        assert_eq!(data[1].debit, dec!(-10));
        assert_eq!(data[1].net(), dec!(-6));
        assert_eq!(data[1].transactions_count, 2);
    }

    #[test]
    fn test_empty_input_produces_no_categories() {
        let data = compute_category_data(&transactions_by_category(&[]));
        assert!(data.is_empty());
    }
}
