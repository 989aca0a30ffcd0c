//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `jwt` - HS256 bearer tokens (production)
//! - `mock` - token table for tests

mod jwt;
mod mock;

pub use jwt::{JwtConfig, JwtSessionValidator, MemberClaims};
pub use mock::MockSessionValidator;
