//! Request handling subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request (from the host router)
//!     → handler.rs (stamp API version into extensions)
//!     → middleware.rs (run chain: pass-through + declared steps)
//!     → handler.rs (validation verdict, then implementation dispatch)
//!     → response.rs (422 body on validation failure)
//!     → Send to client
//! ```

pub mod handler;
pub mod middleware;
pub mod response;

pub use handler::{handle, implementation, validation, ApiVersion, ValidationOutcome};
pub use middleware::{middleware, pass_through, Middleware};
