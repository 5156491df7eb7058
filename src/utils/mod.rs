// Start of file: /src/utils/mod.rs

/*
    * HTTP plumbing shared by every route group: global error mapping,
    * the unified JSON envelope, and JSON helpers for logging.
*/

pub mod error_handler;
pub mod json;
pub mod response_handler;

// End of file: /src/utils/mod.rs
