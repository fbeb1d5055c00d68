pub mod observability;
pub mod speech;
pub mod translation;
