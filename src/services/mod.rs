pub mod database;

pub use database::DocumentStore;
