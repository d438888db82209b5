//! Account handlers.

mod signup;

pub use signup::{SignupCommand, SignupHandler};
