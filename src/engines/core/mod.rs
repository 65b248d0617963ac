//! Core engine services: file access and the parallel worker pool

pub mod io;
#[cfg(feature = "parallel")]
pub mod parallel;
