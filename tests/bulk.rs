mod common;

#[path = "bulk/offline.rs"]
mod bulk_offline;
