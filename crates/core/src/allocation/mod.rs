pub mod allocation_model;
pub mod allocation_service;

pub use allocation_model::{AllocationResult, AssetAllocation};
pub use allocation_service::allocate;
