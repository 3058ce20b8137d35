mod insights;
mod summary;
pub mod views;

pub use summary::FootprintReport;
pub use views::FootprintReportSummary;
