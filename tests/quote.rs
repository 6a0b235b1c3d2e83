mod common;

#[path = "quote/offline.rs"]
mod quote_offline;

#[path = "quote/live.rs"]
mod live;
