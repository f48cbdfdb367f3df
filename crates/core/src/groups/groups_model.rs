//! Group domain model and virtual-group derivation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::accounts::{Account, AccountType, REIMBURSEMENTS_ACCOUNT_ID};

/// Deserializes a field that distinguishes "absent" from "null".
///
/// Absent stays `None`; an explicit null becomes `Some(None)`. Needed for
/// `accountType`, where null marks a renamed (former) auto group while a
/// user-created group has no such field at all.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Domain model representing an account group.
///
/// A group either wraps a user-created grouping persisted in the store, or
/// is a virtual group synthesized per derivation pass from account types.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub label: String,
    /// Present for auto-created groups: the account type the group was
    /// created for, or `Some(None)` once the group has been renamed.
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub account_type: Option<Option<String>>,
    #[serde(default, rename = "virtual")]
    pub is_virtual: bool,
    /// Hydrated accounts relationship. `None` when the relationship was
    /// not (or could not be) hydrated.
    #[serde(default)]
    pub accounts: Option<Vec<Account>>,
}

impl Group {
    /// Member accounts, or an empty slice when the relationship is absent.
    pub fn member_accounts(&self) -> &[Account] {
        self.accounts.as_deref().unwrap_or(&[])
    }

    /// True for groups created by the auto-grouping job, renamed or not.
    pub fn is_auto_group(&self) -> bool {
        self.account_type.is_some()
    }

    /// True for auto groups that lost their type by being renamed.
    pub fn is_former_auto_group(&self) -> bool {
        matches!(self.account_type, Some(None))
    }

    /// Account type of an active auto group.
    pub fn auto_account_type(&self) -> Option<AccountType> {
        self.account_type
            .as_ref()
            .and_then(|t| t.as_deref())
            .map(AccountType::from_raw)
    }

    /// True for the virtual group holding pending reimbursements.
    pub fn is_reimbursements_virtual_group(&self) -> bool {
        self.is_virtual && self.id == REIMBURSEMENTS_ACCOUNT_ID
    }

    /// True when every member account is a loan.
    pub fn is_loan_group(&self) -> bool {
        self.member_accounts()
            .iter()
            .all(|account| account.account_type() == AccountType::Loan)
    }

    /// Sum of member account balances, skipping excluded account ids.
    ///
    /// An absent accounts relationship sums to zero.
    pub fn balance(&self, excluded_account_ids: &[String]) -> Decimal {
        self.member_accounts()
            .iter()
            .filter(|account| !excluded_account_ids.contains(&account.id))
            .map(Account::balance)
            .sum()
    }
}

/// Builds a virtual group for one account type.
///
/// The group id is the canonical type name, so the Reimbursements bucket is
/// recognizable by id downstream.
pub fn build_auto_group(account_type: AccountType, accounts: Vec<Account>) -> Group {
    let name = account_type.name();
    Group {
        id: name.to_string(),
        label: name.to_string(),
        account_type: Some(Some(name.to_string())),
        is_virtual: true,
        accounts: Some(accounts),
    }
}

/// Buckets accounts by canonical type into virtual groups.
///
/// Groups come out ordered by type name so repeated passes over the same
/// accounts produce the same list.
pub fn build_auto_groups(accounts: &[Account]) -> Vec<Group> {
    let mut by_type: BTreeMap<&'static str, (AccountType, Vec<Account>)> = BTreeMap::new();

    for account in accounts {
        let account_type = account.account_type();
        by_type
            .entry(account_type.name())
            .or_insert_with(|| (account_type, Vec::new()))
            .1
            .push(account.clone());
    }

    by_type
        .into_values()
        .map(|(account_type, accounts)| build_auto_group(account_type, accounts))
        .collect()
}

/// Returns a copy of the group with a new label.
///
/// Renaming an auto group clears its account type: it no longer follows
/// the type bucket and behaves like a user-created group.
pub fn renamed_group(group: &Group, label: impl Into<String>) -> Group {
    let mut updated = group.clone();
    updated.label = label.into();
    if updated.auto_account_type().is_some() {
        updated.account_type = Some(None);
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn account(id: &str, raw_type: &str, balance: Decimal) -> Account {
        Account {
            id: id.to_string(),
            label: id.to_string(),
            raw_type: raw_type.to_string(),
            balance,
            ..Default::default()
        }
    }

    #[test]
    fn test_balance_sums_member_accounts() {
        let group = Group {
            accounts: Some(vec![
                account("a1", "Checkings", dec!(100)),
                account("a2", "Savings", dec!(50)),
            ]),
            ..Default::default()
        };
        assert_eq!(group.balance(&[]), dec!(150));
    }

    #[test]
    fn test_balance_skips_excluded_accounts() {
        let group = Group {
            accounts: Some(vec![
                account("a1", "Checkings", dec!(100)),
                account("a2", "Savings", dec!(50)),
            ]),
            ..Default::default()
        };
        assert_eq!(group.balance(&["a2".to_string()]), dec!(100));
    }

    #[test]
    fn test_balance_of_absent_relationship_is_zero() {
        let group = Group {
            accounts: None,
            ..Default::default()
        };
        assert_eq!(group.balance(&[]), Decimal::ZERO);

        let empty = Group {
            accounts: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(empty.balance(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_build_auto_groups_buckets_by_type() {
        let accounts = vec![
            account("a1", "Checkings", dec!(0)),
            account("a2", "Bank", dec!(0)),
            account("a3", "Loan", dec!(0)),
        ];

        let groups = build_auto_groups(&accounts);
        assert_eq!(groups.len(), 2);

        let checkings = groups.iter().find(|g| g.id == "Checkings").unwrap();
        assert_eq!(checkings.member_accounts().len(), 2);
        assert!(checkings.is_virtual);
        assert_eq!(checkings.auto_account_type(), Some(AccountType::Checkings));

        let loans = groups.iter().find(|g| g.id == "Loan").unwrap();
        assert_eq!(loans.member_accounts().len(), 1);
        assert!(loans.is_loan_group());
    }

    #[test]
    fn test_build_auto_groups_of_nothing_is_empty() {
        assert!(build_auto_groups(&[]).is_empty());
    }

    #[test]
    fn test_renamed_auto_group_loses_its_type() {
        let auto = build_auto_group(AccountType::Loan, Vec::new());
        let renamed = renamed_group(&auto, "My credits");

        assert_eq!(renamed.label, "My credits");
        assert!(renamed.is_auto_group());
        assert!(renamed.is_former_auto_group());
        assert_eq!(renamed.auto_account_type(), None);
    }

    #[test]
    fn test_renamed_manual_group_keeps_no_type() {
        let manual = Group {
            id: "g1".to_string(),
            label: "Family".to_string(),
            ..Default::default()
        };
        let renamed = renamed_group(&manual, "Household");

        assert_eq!(renamed.label, "Household");
        assert!(!renamed.is_auto_group());
    }

    #[test]
    fn test_loan_group_detection() {
        let loans = Group {
            accounts: Some(vec![
                account("a1", "Mortgage", dec!(-1000)),
                account("a2", "ConsumerCredit", dec!(-500)),
            ]),
            ..Default::default()
        };
        let mixed = Group {
            accounts: Some(vec![
                account("a1", "Mortgage", dec!(-1000)),
                account("a2", "Checkings", dec!(500)),
            ]),
            ..Default::default()
        };

        assert!(loans.is_loan_group());
        assert!(!mixed.is_loan_group());
    }

    #[test]
    fn test_account_type_survives_serde_round_trip() {
        let renamed = renamed_group(&build_auto_group(AccountType::Loan, Vec::new()), "Mine");
        let json = serde_json::to_string(&renamed).unwrap();
        assert!(json.contains("\"accountType\":null"));

        let back: Group = serde_json::from_str(&json).unwrap();
        assert!(back.is_former_auto_group());

        let manual_json = r#"{"id":"g1","label":"Family"}"#;
        let manual: Group = serde_json::from_str(manual_json).unwrap();
        assert!(!manual.is_auto_group());
    }
}
