//! Library Catalog
//!
//! A small in-memory catalog of books and users supporting issue and return
//! by ISBN.

pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::CatalogService;
