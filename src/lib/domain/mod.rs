//! The few pieces of data that flow through the dispatcher
pub mod build_type;
pub mod status;
