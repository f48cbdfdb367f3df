//! Client seams - collection shapes and traits implemented by the hosting
//! application (document store, realtime transport, replication).

mod client_traits;
mod collection;
mod doctypes;

pub use client_traits::{
    CollectionFetcherTrait, NoopReplication, NoopResumeEvents, RealtimeClientTrait,
    ReplicationTrait, ResumeEventsTrait,
};
pub use collection::{Collection, FetchStatus};
pub use doctypes::{Doctype, RealtimeEvent, Target};
