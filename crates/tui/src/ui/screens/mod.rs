pub mod form;
pub mod summary;
pub mod transactions;
