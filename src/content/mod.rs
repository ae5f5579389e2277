pub mod games;
pub mod records;
pub mod store;
