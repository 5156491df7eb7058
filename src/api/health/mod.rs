/*
* Health endpoints: service status and MongoDB connectivity.
*/

pub mod handler;
pub mod routes;

pub use routes::health_routes;
