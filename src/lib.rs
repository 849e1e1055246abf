//! Anatomical knowledge graph: typed records for muscles, bones, nerves,
//! joints, ligaments and skin regions, plus the derived views the atlas
//! viewer draws from them.
//!
//! [`atlas::Atlas`] is the entry point. It owns the loaded records and every
//! index built from them, and answers search, filter, detail, layout and
//! reverse-lookup queries synchronously.

pub mod anatomy;
pub mod atlas;
pub mod detail;
pub mod filter;
pub mod graph;
pub mod layout;
pub mod lookup;
pub mod search;

pub use atlas::Atlas;
