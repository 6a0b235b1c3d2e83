mod common;

#[path = "chart/offline.rs"]
mod chart_offline;
