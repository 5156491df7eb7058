// Start of file: /src/routes/mod.rs

/*
    * Route group bookkeeping and the catch-all 404 handler.
*/

pub mod fallback_handler;
pub mod router;

pub use router::GroupRouter;

// End of file: /src/routes/mod.rs
