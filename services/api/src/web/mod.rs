pub mod booking;
pub mod cart;
pub mod extract;
pub mod middleware;
pub mod protocol;
pub mod rest;
pub mod routes;
pub mod state;

// Re-export the router builder so the binary can assemble the server.
pub use middleware::ensure_session;
pub use routes::app;
pub use state::{AppState, SessionId};
