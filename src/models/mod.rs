pub mod flags;
pub mod task;
pub mod user;

pub use flags::{Activation, Completion};
pub use task::{Task, TaskInput};
pub use user::{User, UserInput};
