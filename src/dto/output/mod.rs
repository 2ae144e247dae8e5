mod realtime_control_frame;

pub use realtime_control_frame::*;
