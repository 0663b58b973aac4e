// Poll-and-publish loop
pub mod exporter;

pub use exporter::{Exporter, TickReport};
