/// Id and label of the synthetic reimbursements account.
pub const REIMBURSEMENTS_ACCOUNT_ID: &str = "Reimbursements";

/// Raw account type strings reported by the banking connectors.
///
/// Connectors are not consistent with each other, so several raw spellings
/// normalize to the same canonical [`AccountType`](super::AccountType).
pub mod raw_account_types {
    pub const CHECKINGS: &str = "Checkings";
    pub const BANK: &str = "Bank";
    pub const CASH: &str = "Cash";
    pub const SAVINGS: &str = "Savings";
    pub const CREDIT_CARD: &str = "CreditCard";
    pub const CREDIT_CARD_SPACED: &str = "Credit card";
    pub const LOAN: &str = "Loan";
    pub const MORTGAGE: &str = "Mortgage";
    pub const CONSUMER_CREDIT: &str = "ConsumerCredit";
    pub const REVOLVING_CREDIT: &str = "RevolvingCredit";
    pub const REIMBURSEMENTS: &str = "Reimbursements";
}
