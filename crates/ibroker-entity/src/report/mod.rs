//! Trade reports.

pub mod model;

pub use model::{CreateReport, PatchReport, Report, ReportResponse};
