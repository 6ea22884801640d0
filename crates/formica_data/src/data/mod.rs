//! Core data structures for the Formica simulation.

pub mod agent;
pub mod food;
pub mod pheromone;
pub mod vector;
