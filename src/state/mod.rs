//! State Management
//!
//! Session store, shared reactive state, and the polling synchronizer.

pub mod global;
pub mod session;
pub mod sync;

pub use global::{provide_global_state, ChatMessage, GlobalState, Sighting};
pub use session::{provide_session_state, Session, SessionState, User};
pub use sync::Poller;
