pub mod envelope;
pub mod error;
mod health;
pub mod layers;
pub mod router;
pub mod state;

pub use state::ApiState;
