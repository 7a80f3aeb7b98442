pub mod engine;
pub mod rpc;

pub use engine::core::app_setup::create_app;
