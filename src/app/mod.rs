pub mod host;
pub mod summary;

pub use host::SimulationHost;
pub use summary::RunSummary;
