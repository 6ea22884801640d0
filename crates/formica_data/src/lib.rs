//! Plain data types shared by the Formica simulation crates.
//!
//! Everything here is a value type with no simulation logic beyond pure
//! vector arithmetic. Behavior lives in `formica_core`, which implements
//! its logic traits on these types.

pub mod data;

pub use data::agent::{Agent, AgentState};
pub use data::food::FoodSource;
pub use data::pheromone::{PheromoneCell, TrailType};
pub use data::vector::Vector2D;
