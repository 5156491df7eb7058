// Start of file: /src/config/mod.rs

/*
* Configuration: service environment variables, MongoDB connection settings, and app state.
*/

pub mod environment;
pub mod mongo;
pub mod state;

// End of file: /src/config/mod.rs
