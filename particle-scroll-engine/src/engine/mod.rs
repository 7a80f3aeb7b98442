pub mod animation;
pub mod camera;
pub mod core;
pub mod loading;
pub mod mesh;
pub mod sampling;
pub mod scroll;
pub mod systems;
