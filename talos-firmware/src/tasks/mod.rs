//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod controller;
pub mod leds;
pub mod pump;

pub use controller::controller_task;
pub use leds::led_task;
pub use pump::pump_task;
