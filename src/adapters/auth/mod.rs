//! Authentication adapters.
//!
//! Implementations of the `AccessGate` port:
//!
//! - `jwt` - HS256 bearer tokens issued by the identity service
//! - `mock` - Test implementation that doesn't require external services

mod jwt;
mod mock;

pub use jwt::{JwtAccessGate, JwtGateConfig};
pub use mock::MockAccessGate;
