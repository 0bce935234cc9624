pub mod account;
pub mod audit;
pub mod filters;
pub mod sections;
pub mod summary;
