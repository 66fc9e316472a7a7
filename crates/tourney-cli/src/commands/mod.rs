pub mod averages;
pub mod report;
