pub mod credentials;
pub mod session;

pub use credentials::*;
pub use session::*;
