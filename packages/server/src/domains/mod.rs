// Business domains
pub mod essays;
