pub mod cancel;
pub mod controller;
pub mod input_adapter;

pub use cancel::CancellationToken;
pub use controller::{Controller, Direction};
pub use input_adapter::KeyState;
