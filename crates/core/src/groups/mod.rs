//! Groups module - account grouping, balance aggregation, and sorting.

mod groups_model;
mod groups_sort;

// Re-export the public interface
pub use groups_model::{build_auto_group, build_auto_groups, renamed_group, Group};
pub use groups_sort::{group_label, translate_and_sort_groups, GroupCategory, SortedGroup};
