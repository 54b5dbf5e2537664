mod in_ci;
mod main_wrapper;

pub use in_ci::in_ci;
pub use main_wrapper::main_wrapper;
