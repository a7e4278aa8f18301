pub mod audit;
pub mod cli;
pub mod config;
pub mod document;
pub mod errors;
pub mod keys;
pub mod report;
pub mod scan;
