pub mod engine;
pub mod interpreter;
pub mod primality;
pub mod session;

pub use crate::domain::model::{Command, Evaluation};
pub use crate::domain::ports::{Console, LineSource};
pub use crate::utils::error::Result;
