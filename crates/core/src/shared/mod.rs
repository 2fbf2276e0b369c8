pub mod capability;
pub mod constants;
