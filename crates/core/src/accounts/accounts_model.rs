//! Account domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::accounts_constants::raw_account_types;

/// Canonical account classification.
///
/// Raw connector type strings normalize to one of these through
/// [`AccountType::from_raw`]; unknown spellings fall back to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AccountType {
    Checkings,
    Savings,
    CreditCard,
    Loan,
    Reimbursements,
    #[default]
    Other,
}

impl AccountType {
    /// Normalizes a raw connector type string.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            raw_account_types::CHECKINGS | raw_account_types::BANK | raw_account_types::CASH => {
                AccountType::Checkings
            }
            raw_account_types::SAVINGS => AccountType::Savings,
            raw_account_types::CREDIT_CARD | raw_account_types::CREDIT_CARD_SPACED => {
                AccountType::CreditCard
            }
            raw_account_types::LOAN
            | raw_account_types::MORTGAGE
            | raw_account_types::CONSUMER_CREDIT
            | raw_account_types::REVOLVING_CREDIT => AccountType::Loan,
            raw_account_types::REIMBURSEMENTS => AccountType::Reimbursements,
            _ => AccountType::Other,
        }
    }

    /// Canonical name, used as virtual group id and translation key suffix.
    pub fn name(&self) -> &'static str {
        match self {
            AccountType::Checkings => "Checkings",
            AccountType::Savings => "Savings",
            AccountType::CreditCard => "CreditCard",
            AccountType::Loan => "Loan",
            AccountType::Reimbursements => "Reimbursements",
            AccountType::Other => "Other",
        }
    }
}

/// Domain model representing a bank account.
///
/// Virtual accounts are synthesized client-side (see
/// [`build_virtual_accounts`](super::build_virtual_accounts)) and never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub label: String,
    /// Raw type string as reported by the connector.
    #[serde(rename = "type")]
    pub raw_type: String,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, rename = "virtual")]
    pub is_virtual: bool,
}

impl Account {
    /// Canonical type of the account.
    pub fn account_type(&self) -> AccountType {
        AccountType::from_raw(&self.raw_type)
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_type_normalization() {
        assert_eq!(AccountType::from_raw("Checkings"), AccountType::Checkings);
        assert_eq!(AccountType::from_raw("Bank"), AccountType::Checkings);
        assert_eq!(AccountType::from_raw("Credit card"), AccountType::CreditCard);
        assert_eq!(AccountType::from_raw("Mortgage"), AccountType::Loan);
        assert_eq!(AccountType::from_raw("RevolvingCredit"), AccountType::Loan);
    }

    #[test]
    fn test_unknown_raw_type_is_other() {
        assert_eq!(AccountType::from_raw("Market"), AccountType::Other);
        assert_eq!(AccountType::from_raw(""), AccountType::Other);
    }

    #[test]
    fn test_account_type_accessor() {
        let account = Account {
            raw_type: "ConsumerCredit".to_string(),
            ..Default::default()
        };
        assert_eq!(account.account_type(), AccountType::Loan);
    }
}
