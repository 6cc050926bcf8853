//! Authenticated session collaborator

#[allow(clippy::module_inception)]
mod session;
mod transport;

pub use session::Session;
pub use transport::{HttpResponse, SessionTransport};

#[cfg(test)]
pub use transport::mock;
