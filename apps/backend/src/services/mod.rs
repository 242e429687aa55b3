//! Domain services: orchestrate repos and domain rules inside one connection or transaction.

pub mod players;
