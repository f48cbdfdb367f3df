//! Pure derivation of the balance dashboard from the raw collections.
//!
//! Everything here is recomputed on every relevant collection change;
//! virtual entities never outlive the pass that built them.

use rust_decimal::Decimal;

use crate::accounts::{build_virtual_accounts, Account};
use crate::client::Collection;
use crate::flags::{flag_names, Flags};
use crate::groups::{build_auto_groups, translate_and_sort_groups, Group, SortedGroup};
use crate::settings::{
    defaulted_settings, is_configuration_setting, sync_panels_state, PanelsState, Settings,
};
use crate::transactions::Transaction;
use crate::triggers::{konnector_slugs, Trigger};

/// The raw collections the dashboard derives from.
pub struct DashboardCollections<'a> {
    pub accounts: &'a Collection<Account>,
    pub groups: &'a Collection<Group>,
    pub settings: &'a Collection<Settings>,
    pub transactions: &'a Collection<Transaction>,
    pub triggers: &'a Collection<Trigger>,
}

impl DashboardCollections<'_> {
    fn any_loading(&self) -> bool {
        self.accounts.is_loading()
            || self.groups.is_loading()
            || self.settings.is_loading()
            || self.transactions.is_loading()
            || self.triggers.is_loading()
    }
}

/// Derived props handed to the rendering layer.
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// Sum of the balances of checked, non-disabled accounts.
    pub accounts_balance: Decimal,
    /// Real and virtual groups, sorted for display.
    pub groups: Vec<SortedGroup>,
    /// Panels tree aligned with `groups`.
    pub panels: PanelsState,
    /// Low-balance warning threshold, when enabled.
    pub balance_lower: Option<Decimal>,
    /// Whether the grouped panels view is enabled.
    pub show_panels: bool,
    pub checked_accounts_count: usize,
    pub total_accounts_count: usize,
}

/// What the dashboard should render.
#[derive(Debug, Clone)]
pub enum DashboardView {
    /// At least one collection has not loaded yet.
    Loading,
    /// No account and no import underway: onboarding empty state.
    NoAccounts,
    /// No account yet but connectors are configured: import in progress.
    Importing { konnector_slugs: Vec<String> },
    Ready(Box<DashboardData>),
}

/// Accounts whose panel occurrences make them count into the total.
///
/// An account can appear in several panels; it is checked as soon as one
/// occurrence is checked and not disabled.
pub fn checked_accounts<'a>(accounts: &'a [Account], panels: &PanelsState) -> Vec<&'a Account> {
    accounts
        .iter()
        .filter(|account| {
            panels.values().any(|panel| {
                panel
                    .accounts
                    .get(&account.id)
                    .map(|state| state.checked && !state.disabled)
                    .unwrap_or(false)
            })
        })
        .collect()
}

/// Derives the dashboard view from the raw collections.
///
/// `panels_override` carries the in-flight UI state between the debounced
/// settings writes; when absent the persisted panels state is used.
pub fn derive_dashboard<T>(
    collections: &DashboardCollections<'_>,
    panels_override: Option<&PanelsState>,
    flags: &Flags,
    translate: &T,
) -> DashboardView
where
    T: Fn(&str) -> Option<String>,
{
    if collections.any_loading() {
        return DashboardView::Loading;
    }

    let settings = defaulted_settings(
        collections
            .settings
            .data
            .iter()
            .find(|s| is_configuration_setting(s))
            .cloned(),
    );

    let accounts = &collections.accounts.data;
    if accounts.is_empty() || flags.enabled(flag_names::NO_ACCOUNT) {
        let slugs = konnector_slugs(&collections.triggers.data);
        return if slugs.is_empty() {
            DashboardView::NoAccounts
        } else {
            DashboardView::Importing {
                konnector_slugs: slugs,
            }
        };
    }

    let virtual_accounts = build_virtual_accounts(&collections.transactions.data);
    let mut all_accounts: Vec<Account> = accounts.clone();
    all_accounts.extend(virtual_accounts);

    let mut all_groups: Vec<Group> = collections.groups.data.clone();
    all_groups.extend(build_auto_groups(&all_accounts));

    let panels = sync_panels_state(
        &all_groups,
        panels_override.unwrap_or(&settings.panels_state),
    );

    let checked = checked_accounts(accounts, &panels);
    let accounts_balance: Decimal = checked.iter().map(|a| a.balance()).sum();

    let balance_lower = settings
        .notifications
        .balance_lower
        .enabled
        .then_some(settings.notifications.balance_lower.value);

    DashboardView::Ready(Box::new(DashboardData {
        accounts_balance,
        checked_accounts_count: checked.len(),
        total_accounts_count: accounts.len(),
        groups: translate_and_sort_groups(all_groups, translate, flags),
        panels,
        balance_lower,
        show_panels: flags.enabled(flag_names::BALANCE_PANELS),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::KONNECTOR_WORKER;
    use crate::settings::{PanelAccountState, PanelState};
    use crate::triggers::TriggerMessage;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn no_translation(_: &str) -> Option<String> {
        None
    }

    fn account(id: &str, balance: Decimal) -> Account {
        Account {
            id: id.to_string(),
            label: id.to_string(),
            raw_type: "Checkings".to_string(),
            balance,
            ..Default::default()
        }
    }

    fn bank_trigger(konnector: &str) -> Trigger {
        Trigger {
            worker: KONNECTOR_WORKER.to_string(),
            message: TriggerMessage {
                konnector: Some(konnector.to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    struct Fixtures {
        accounts: Collection<Account>,
        groups: Collection<Group>,
        settings: Collection<Settings>,
        transactions: Collection<Transaction>,
        triggers: Collection<Trigger>,
    }

    impl Fixtures {
        fn new() -> Self {
            Self {
                accounts: Collection::loaded(vec![
                    account("a1", dec!(100)),
                    account("a2", dec!(50)),
                ]),
                groups: Collection::loaded(vec![]),
                settings: Collection::loaded(vec![]),
                transactions: Collection::loaded(vec![]),
                triggers: Collection::loaded(vec![]),
            }
        }

        fn collections(&self) -> DashboardCollections<'_> {
            DashboardCollections {
                accounts: &self.accounts,
                groups: &self.groups,
                settings: &self.settings,
                transactions: &self.transactions,
                triggers: &self.triggers,
            }
        }
    }

    fn derive(fixtures: &Fixtures) -> DashboardView {
        derive_dashboard(&fixtures.collections(), None, &Flags::new(), &no_translation)
    }

    #[test]
    fn test_loading_while_any_collection_loads() {
        let mut fixtures = Fixtures::new();
        fixtures.transactions = Collection::loading();
        assert!(matches!(derive(&fixtures), DashboardView::Loading));
    }

    #[test]
    fn test_no_accounts_empty_state() {
        let mut fixtures = Fixtures::new();
        fixtures.accounts = Collection::loaded(vec![]);
        assert!(matches!(derive(&fixtures), DashboardView::NoAccounts));
    }

    #[test]
    fn test_importing_when_triggers_pending() {
        let mut fixtures = Fixtures::new();
        fixtures.accounts = Collection::loaded(vec![]);
        fixtures.triggers = Collection::loaded(vec![bank_trigger("mybank")]);

        match derive(&fixtures) {
            DashboardView::Importing { konnector_slugs } => {
                assert_eq!(konnector_slugs, vec!["mybank"]);
            }
            other => panic!("expected Importing, got {other:?}"),
        }
    }

    #[test]
    fn test_no_account_flag_forces_empty_state() {
        let fixtures = Fixtures::new();
        let mut flags = Flags::new();
        flags.set(flag_names::NO_ACCOUNT, true);

        let view =
            derive_dashboard(&fixtures.collections(), None, &flags, &no_translation);
        assert!(matches!(view, DashboardView::NoAccounts));
    }

    #[test]
    fn test_ready_sums_checked_accounts() {
        let fixtures = Fixtures::new();
        match derive(&fixtures) {
            DashboardView::Ready(data) => {
                // Everything is checked by default
                assert_eq!(data.accounts_balance, dec!(150));
                assert_eq!(data.checked_accounts_count, 2);
                assert_eq!(data.total_accounts_count, 2);
                // One virtual group bucketing the checkings accounts
                assert_eq!(data.groups.len(), 1);
                assert!(data.panels.contains_key("Checkings"));
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn test_unchecked_accounts_do_not_count() {
        let fixtures = Fixtures::new();
        let mut panels = PanelsState::new();
        panels.insert(
            "Checkings".to_string(),
            PanelState {
                expanded: true,
                accounts: BTreeMap::from([
                    (
                        "a1".to_string(),
                        PanelAccountState {
                            checked: false,
                            disabled: false,
                        },
                    ),
                    ("a2".to_string(), PanelAccountState::default()),
                ]),
            },
        );

        let view = derive_dashboard(
            &fixtures.collections(),
            Some(&panels),
            &Flags::new(),
            &no_translation,
        );
        match view {
            DashboardView::Ready(data) => {
                assert_eq!(data.accounts_balance, dec!(50));
                assert_eq!(data.checked_accounts_count, 1);
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn test_disabled_occurrences_do_not_count() {
        let accounts = vec![account("a1", dec!(100))];
        let mut panels = PanelsState::new();
        panels.insert(
            "g1".to_string(),
            PanelState {
                expanded: true,
                accounts: BTreeMap::from([(
                    "a1".to_string(),
                    PanelAccountState {
                        checked: true,
                        disabled: true,
                    },
                )]),
            },
        );

        assert!(checked_accounts(&accounts, &panels).is_empty());
    }

    #[test]
    fn test_balance_lower_only_when_enabled() {
        let mut fixtures = Fixtures::new();
        let mut settings = Settings::default();
        settings.notifications.balance_lower.enabled = true;
        settings.notifications.balance_lower.value = dec!(600);
        fixtures.settings = Collection::loaded(vec![settings]);

        match derive(&fixtures) {
            DashboardView::Ready(data) => assert_eq!(data.balance_lower, Some(dec!(600))),
            other => panic!("expected Ready, got {other:?}"),
        }

        let defaults = Fixtures::new();
        match derive(&defaults) {
            DashboardView::Ready(data) => assert_eq!(data.balance_lower, None),
            other => panic!("expected Ready, got {other:?}"),
        }
    }
}
