pub mod debounce;
pub mod text_utils;
pub mod time_utils;

pub use debounce::Debouncer;
