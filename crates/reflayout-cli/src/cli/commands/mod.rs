pub mod dispatch;
pub mod format;
pub mod layouts;
pub mod run;

pub use dispatch::dispatch;
