mod common;

#[path = "search/offline.rs"]
mod search_offline;

#[path = "search/live.rs"]
mod live;
