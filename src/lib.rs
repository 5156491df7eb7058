// Library root: MongoDB connection resolution and grouped Axum routing

pub mod api;
pub mod config;
pub mod core;
pub mod database;
pub mod routes;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::mongo::{ConnectionMode, MongoConfig};
pub use crate::config::state::AppState;
pub use crate::database::MongoService;
pub use crate::routes::GroupRouter;
