pub mod clock;
pub mod constants;
pub mod cursor;
pub mod easing;
pub mod engine;
pub mod error;
pub mod frame;
pub mod loader;
pub mod pointer;
pub mod reveal;
pub mod sections;
pub mod signal;
pub mod spring;
pub mod tilt;
pub mod timer;
pub mod visibility;
pub mod visuals;
pub mod waveform;

pub use clock::*;
pub use cursor::*;
pub use easing::*;
pub use engine::*;
pub use error::*;
pub use frame::*;
pub use loader::*;
pub use pointer::*;
pub use reveal::*;
pub use sections::*;
pub use signal::*;
pub use spring::*;
pub use tilt::*;
pub use timer::*;
pub use visibility::*;
pub use visuals::*;
pub use waveform::*;
