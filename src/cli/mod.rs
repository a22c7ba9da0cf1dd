//! Workflows driven by the binaries

pub mod orchestration;
