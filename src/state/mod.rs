pub mod camera;

pub use camera::CameraFeed;
