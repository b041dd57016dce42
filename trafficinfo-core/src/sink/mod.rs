mod route_sink;
mod sink_ops;

pub use route_sink::RouteSink;
pub use sink_ops::append_all;
