pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{console::StdoutConsole, stdin::StdinSource};
pub use crate::core::{engine::SessionEngine, session::Session};
pub use domain::model::{Command, Evaluation};
pub use utils::error::{PrimeError, Result};
