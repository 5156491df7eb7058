pub mod mongo_service;

pub use mongo_service::{create_client, new_client, ClientFactory, DriverClientFactory, MongoService};
