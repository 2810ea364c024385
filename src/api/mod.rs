//! HTTP API layer - routing, handlers and wire types

pub mod health;
pub mod models;
pub mod router;
pub mod state;
pub mod types;

pub use router::create_router_with_state;
pub use state::AppState;
