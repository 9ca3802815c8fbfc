pub use cgmath;
pub use config::RoutingConfig;
pub use error::{LoadError, RouteError};
pub use generator::{GeneratedRoute, RouteGenerator};
pub use graph::{BuildReport, Junction, NamingConvention, RoadGraph, Street};
pub use network::{JunctionRecord, NetworkDescription, StreetRecord};
pub use route::{RouteResult, RouteStatus};
use slotmap::new_key_type;

#[cfg(feature = "debug")]
pub use debug::take_debug_frame;

mod config;
mod debug;
mod error;
mod generator;
mod graph;
pub mod math;
mod network;
mod route;

new_key_type! {
    /// Unique ID of a [Junction] within a [RoadGraph].
    pub struct JunctionId;
}
