pub mod observation;
pub mod table;

pub use observation::{Observation, PortState};
pub use table::{HOST_SEPARATOR, TableRow};
