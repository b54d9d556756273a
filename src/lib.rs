//! Barbershop Availability - open appointment slots for a barbershop day.
//!
//! Given a barbershop and a calendar date, answers which slots of the fixed
//! daily schedule are still free, after confirming the caller has a session.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
