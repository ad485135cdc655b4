//! Data models for devices, reservation requests and room slots

pub mod device;
pub mod request;
pub mod room;
