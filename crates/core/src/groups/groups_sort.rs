//! Group label resolution and priority-based sorting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::groups_model::Group;
use crate::flags::{flag_names, Flags};
use crate::utils::text_utils::label_sort_key;

/// Sorting category of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupCategory {
    Normal,
    VirtualOther,
    VirtualReimbursements,
}

impl GroupCategory {
    pub fn of(group: &Group) -> Self {
        if group.is_reimbursements_virtual_group() {
            GroupCategory::VirtualReimbursements
        } else if group.is_virtual && group.label == "Other" {
            GroupCategory::VirtualOther
        } else {
            GroupCategory::Normal
        }
    }
}

/// Resolves the display label of a group.
///
/// Virtual groups and active auto groups are labeled after their account
/// type through the translator; everything else keeps its stored label.
/// With the debug-groups flag on, the group origin is appended.
pub fn group_label<T>(group: &Group, translate: &T, flags: &Flags) -> String
where
    T: Fn(&str) -> Option<String>,
{
    let translate_type = |name: &str| {
        translate(&format!("Data.accountTypes.{name}")).unwrap_or_else(|| name.to_string())
    };

    if group.is_virtual {
        let label = translate_type(&group.label);
        if flags.enabled(flag_names::DEBUG_GROUPS) {
            format!("{label} (virtual)")
        } else {
            label
        }
    } else if group.is_auto_group() && !group.is_former_auto_group() {
        let name = group
            .auto_account_type()
            .map(|t| t.name().to_string())
            .unwrap_or_else(|| group.label.clone());
        let label = translate_type(&name);
        if flags.enabled(flag_names::DEBUG_GROUPS) {
            format!("{label} (auto)")
        } else {
            label
        }
    } else {
        group.label.clone()
    }
}

/// A group wrapped with the information the rendering layer sorts and
/// displays by.
#[derive(Debug, Clone)]
pub struct SortedGroup {
    pub group: Group,
    pub category: GroupCategory,
    pub label: String,
}

// Sorts first when reimbursements are waiting and the flag allows it.
fn reimbursements_priority(group: &Group, flags: &Flags) -> i8 {
    let top_position = flags.enabled(flag_names::DEMO)
        || flags.enabled(flag_names::REIMBURSEMENTS_TOP_POSITION);

    if top_position && group.balance(&[]) > Decimal::ZERO {
        -1
    } else {
        2
    }
}

fn group_priority(wrapped: &SortedGroup, flags: &Flags) -> i8 {
    match wrapped.category {
        GroupCategory::Normal => 0,
        GroupCategory::VirtualOther => 1,
        GroupCategory::VirtualReimbursements => reimbursements_priority(&wrapped.group, flags),
    }
}

/// Resolves labels then sorts groups by (priority, label).
///
/// The label comparison is case-insensitive and accent-insensitive, and
/// the sort is stable: groups with equal keys keep their input order.
pub fn translate_and_sort_groups<T>(
    groups: Vec<Group>,
    translate: &T,
    flags: &Flags,
) -> Vec<SortedGroup>
where
    T: Fn(&str) -> Option<String>,
{
    let mut wrapped: Vec<SortedGroup> = groups
        .into_iter()
        .map(|group| {
            let category = GroupCategory::of(&group);
            let label = group_label(&group, translate, flags);
            SortedGroup {
                group,
                category,
                label,
            }
        })
        .collect();

    wrapped.sort_by_cached_key(|w| (group_priority(w, flags), label_sort_key(&w.label)));
    wrapped
}
