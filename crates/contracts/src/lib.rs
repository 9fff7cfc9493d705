//! Types shared between the manager backend and its clients.

pub mod system;
pub mod usecases;
