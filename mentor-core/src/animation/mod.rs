//! Text reveal animation and the timer handle that drives it

pub mod decrypt;
pub mod scheduler;

pub use decrypt::{DecryptAnimator, DecryptConfig, DecryptText, Frame};
pub use scheduler::{ScheduledTask, TickControl};
