pub mod machine;
mod wake_method;

pub use machine::{Machine, Wakeup};
pub use wake_method::WakeMethod;
