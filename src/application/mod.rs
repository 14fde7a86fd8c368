//! Application layer - the session-scoped workbook service.

mod workbook_service;

pub use workbook_service::WorkbookService;
