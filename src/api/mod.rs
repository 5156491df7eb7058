// Start of file: /src/api/mod.rs

pub mod health;

// End of file: /src/api/mod.rs
