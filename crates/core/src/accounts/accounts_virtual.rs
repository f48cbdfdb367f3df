//! Virtual account derivation.
//!
//! Virtual accounts unify the presentation of money that exists only as a
//! claim (e.g. pending reimbursements). They are recomputed on every
//! derivation pass and never written back to the store.

use rust_decimal::Decimal;

use super::accounts_constants::REIMBURSEMENTS_ACCOUNT_ID;
use super::accounts_model::Account;
use crate::transactions::{ReimbursementStatus, Transaction};

/// Builds the virtual accounts derived from the transaction collection.
///
/// Currently a single candidate exists: the Reimbursements account, whose
/// balance is the total amount still awaited on expenses with a pending
/// reimbursement. When nothing is awaited, no virtual account is produced.
pub fn build_virtual_accounts(transactions: &[Transaction]) -> Vec<Account> {
    build_reimbursements_account(transactions).into_iter().collect()
}

fn build_reimbursements_account(transactions: &[Transaction]) -> Option<Account> {
    let awaiting: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.is_expense() && t.reimbursement_status() == ReimbursementStatus::Pending)
        .collect();

    if awaiting.is_empty() {
        return None;
    }

    let balance: Decimal = awaiting
        .iter()
        .map(|t| -t.amount - t.reimbursed_amount())
        .sum();

    Some(Account {
        id: REIMBURSEMENTS_ACCOUNT_ID.to_string(),
        label: REIMBURSEMENTS_ACCOUNT_ID.to_string(),
        raw_type: REIMBURSEMENTS_ACCOUNT_ID.to_string(),
        balance,
        currency: None,
        is_virtual: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::AccountType;
    use crate::constants::HEALTH_EXPENSES_CATEGORY_ID;
    use crate::transactions::Reimbursement;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn health_expense(amount: Decimal, reimbursed: &[Decimal]) -> Transaction {
        Transaction {
            amount,
            automatic_category_id: Some(HEALTH_EXPENSES_CATEGORY_ID.to_string()),
            date: Utc.with_ymd_and_hms(2019, 5, 23, 0, 0, 0).unwrap(),
            reimbursements: reimbursed
                .iter()
                .map(|a| Reimbursement {
                    amount: *a,
                    bill_id: None,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_transactions_no_virtual_account() {
        assert!(build_virtual_accounts(&[]).is_empty());
    }

    #[test]
    fn test_fully_reimbursed_expenses_produce_nothing() {
        let transactions = vec![health_expense(dec!(-10), &[dec!(10)])];
        assert!(build_virtual_accounts(&transactions).is_empty());
    }

    #[test]
    fn test_pending_reimbursements_sum_into_balance() {
        let transactions = vec![
            health_expense(dec!(-10), &[dec!(2)]),
            health_expense(dec!(-20), &[]),
        ];

        let accounts = build_virtual_accounts(&transactions);
        assert_eq!(accounts.len(), 1);

        let reimbursements = &accounts[0];
        assert_eq!(reimbursements.id, REIMBURSEMENTS_ACCOUNT_ID);
        assert!(reimbursements.is_virtual);
        assert_eq!(reimbursements.account_type(), AccountType::Reimbursements);
        // (10 - 2) + 20 still awaited
        assert_eq!(reimbursements.balance, dec!(28));
    }

    #[test]
    fn test_incomes_are_ignored() {
        let transactions = vec![Transaction {
            amount: dec!(50),
            ..Default::default()
        }];
        assert!(build_virtual_accounts(&transactions).is_empty());
    }
}
