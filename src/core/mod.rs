//! Core-Domänentypen: Posen, Levels, Alignment-Store, Transformation.

pub mod alignment;
pub mod color;
pub mod level;
pub mod pose;
/// Pixel-Raum → physikalischer Export-Frame
pub mod transform;

pub use alignment::{AlignmentInfo, AlignmentStore, RelativePose};
pub use color::{ColorGenerator, LevelColor};
pub use level::{Building, Level, DEFAULT_METERS_PER_PIXEL};
pub use pose::{heading, Pose};
pub use transform::{pixel_to_metric, relative_transform, yaw_quaternion, RelativeTransform};
