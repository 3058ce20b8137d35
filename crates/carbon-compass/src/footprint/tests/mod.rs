mod common;
mod report;
mod validation;
