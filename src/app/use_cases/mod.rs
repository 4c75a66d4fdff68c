//! Use-Cases der Application-Layer-Orchestrierung.

pub mod alignment_table;
pub mod export;
pub mod levels;
