pub mod ledger_service;
pub mod ranking_service;
