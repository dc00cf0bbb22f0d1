pub mod error;
pub mod event;
pub mod ledger;
pub mod reader;
pub mod status;
pub mod summary;
