//! Start-up configuration read from the environment.

pub mod db;
pub mod roster;
