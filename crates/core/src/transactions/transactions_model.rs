//! Transaction domain model and reimbursement helpers.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::{Account, AccountType};
use crate::constants::{HEALTH_EXPENSES_CATEGORY_ID, UNCATEGORIZED_CATEGORY_ID};
use crate::utils::time_utils::calendar_months_between;

/// A reimbursement is considered late once it has been pending for more
/// than this many calendar months.
const MAX_PENDING_MONTHS: i32 = 1;

/// Reimbursement lifecycle of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReimbursementStatus {
    Reimbursed,
    Pending,
    #[default]
    NoReimbursement,
}

/// A single reimbursement attached to an expense.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Reimbursement {
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub bill_id: Option<String>,
}

/// Domain model representing a bank transaction.
///
/// The `account` relationship is hydrated by the remote-document client;
/// it stays `None` for transactions whose account reference is dangling.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub label: String,
    /// Date the transaction was registered on the account.
    pub date: DateTime<Utc>,
    /// Date the money actually moved, when known. Relevant for deferred
    /// debit cards, where `date` is the settlement date.
    #[serde(default)]
    pub realisation_date: Option<DateTime<Utc>>,
    pub amount: Decimal,
    #[serde(default)]
    pub automatic_category_id: Option<String>,
    #[serde(default)]
    pub manual_category_id: Option<String>,
    #[serde(default)]
    pub reimbursement_status: Option<ReimbursementStatus>,
    #[serde(default)]
    pub reimbursements: Vec<Reimbursement>,
    /// Hydrated account relationship.
    #[serde(default)]
    pub account: Option<Box<Account>>,
}

impl Transaction {
    /// Effective category id: manual recategorization wins over the
    /// automatic one.
    pub fn category_id(&self) -> &str {
        self.manual_category_id
            .as_deref()
            .or(self.automatic_category_id.as_deref())
            .unwrap_or(UNCATEGORIZED_CATEGORY_ID)
    }

    /// Date to display and group by.
    ///
    /// For credit-card accounts the realisation date is preferred when
    /// present, truncated to date-only; everything else uses `date`.
    pub fn get_date(&self) -> NaiveDate {
        let is_credit_card = self
            .account
            .as_ref()
            .map(|a| a.account_type() == AccountType::CreditCard)
            .unwrap_or(false);

        match (&self.realisation_date, is_credit_card) {
            (Some(realisation), true) => realisation.date_naive(),
            _ => self.date.date_naive(),
        }
    }

    /// True when the transaction took money out of the account.
    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// True for expenses categorized as health expenses.
    pub fn is_health_expense(&self) -> bool {
        self.is_expense() && self.category_id() == HEALTH_EXPENSES_CATEGORY_ID
    }

    /// Total amount already reimbursed on this expense.
    ///
    /// # Panics
    ///
    /// Asking for the reimbursed amount of a non-expense is a programmer
    /// error and panics.
    pub fn reimbursed_amount(&self) -> Decimal {
        assert!(
            self.is_expense(),
            "reimbursed_amount called on a non-expense transaction (amount {})",
            self.amount
        );
        self.reimbursements.iter().map(|r| r.amount).sum()
    }

    /// True when reimbursements cover the full expense amount.
    pub fn is_fully_reimbursed(&self) -> bool {
        self.is_expense() && self.reimbursed_amount() == -self.amount
    }

    /// Effective reimbursement status.
    ///
    /// An explicit status wins. Health expenses without one derive it from
    /// coverage; any other transaction defaults to no-reimbursement.
    pub fn reimbursement_status(&self) -> ReimbursementStatus {
        if let Some(status) = self.reimbursement_status {
            return status;
        }

        if self.is_health_expense() {
            if self.is_fully_reimbursed() {
                ReimbursementStatus::Reimbursed
            } else {
                ReimbursementStatus::Pending
            }
        } else {
            ReimbursementStatus::NoReimbursement
        }
    }

    /// True when a health-expense reimbursement has been pending for more
    /// than one calendar month as of `today`.
    pub fn is_reimbursement_late(&self, today: NaiveDate) -> bool {
        if !self.is_health_expense() {
            return false;
        }
        if self.reimbursement_status() != ReimbursementStatus::Pending {
            return false;
        }

        calendar_months_between(self.get_date(), today) > MAX_PENDING_MONTHS
    }
}
