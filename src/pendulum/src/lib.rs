pub mod controller_message;
pub mod integrator;
pub mod interaction;
pub mod kinematics;
pub mod physical_model;
pub mod pworld;
pub mod state;
pub mod time_manager;
pub mod trail;

pub use protocol::V2;
