//! RANGELAB CLI library

pub mod commands;
