//! Domain Layer
//!
//! Deployment logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - The deploy plan
//! - `value_objects/` - Immutable value types (Target)
//! - `services/` - Remote script rendering
//! - `ports/` - Interface definitions for infrastructure (transport, events)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
