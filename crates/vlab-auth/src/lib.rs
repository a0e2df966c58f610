//! Thin client for the lab's login backend.
//!
//! Requests are built and responses interpreted as plain data, so the whole
//! contract is testable without a network. The browser crate only moves
//! bytes: it sends an [`ApiRequest`] and hands back an [`ApiResponse`].

pub mod error;
pub mod forms;
pub mod gate;
pub mod request;
pub mod response;
pub mod session;
pub mod user;

pub use error::{AuthError, NETWORK_MESSAGE, Result};
pub use forms::{LoginForm, ProfileEditor, ProfileMode, RegisterForm};
pub use gate::{InFlight, RequestGate};
pub use request::{ApiConfig, ApiRequest, Method};
pub use response::ApiResponse;
pub use session::{MemoryStore, Session, SessionStore};
pub use user::{Credentials, LoginResponse, ProfileUpdate, Registration, User};
