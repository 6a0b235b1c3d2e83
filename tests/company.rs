mod common;

#[path = "company/offline.rs"]
mod company_offline;
