//! Core, platform independent frame generation code.

pub mod config;
pub mod link;
pub mod packet;
pub mod repr;
