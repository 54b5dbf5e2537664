mod builder;
mod exceptions;
pub mod global_fns;
mod out;
mod setup;

pub use builder::GlobalLogBuilder;
pub use out::GlobalLog;
