pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod router;
pub mod services;
pub mod utils;

pub use router::create_router;
