//! Domain model types

pub mod calculation;
pub mod company;
pub mod fleet;
pub mod projection;
pub mod proposal;
pub mod vehicle_type;

pub use calculation::{Calculation, EnvironmentalImpact, NewCalculation};
pub use company::{Company, NewCompany};
pub use fleet::{FleetProfile, RoiRequest};
pub use projection::RoiProjection;
pub use proposal::{NewProposal, Proposal, ProposalResults, ProposalStatus, ProposalUpdate};
pub use vehicle_type::{VehicleType, VehicleTypeProfile};
