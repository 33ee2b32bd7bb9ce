mod artifact_generator;
mod destination_planner;
mod naming_coordinator;

pub use artifact_generator::ArtifactGenerator;
pub use destination_planner::DestinationPlanner;
pub use naming_coordinator::{NamingCoordinator, NamingOutcome, NamingState};
