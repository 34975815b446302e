pub mod cache;
pub mod config;
pub mod hashing;
pub mod persistence;
