//! HTTP boundary of the CDO Jeepney Guide API.

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod server;

pub use config::Config;
pub use error::ApiError;
pub use routes::{SharedProvider, create_router};
pub use server::ApiServer;
