mod monitor;

pub use monitor::*;
