// colstat/src/commands/mod.rs
pub mod describe;
