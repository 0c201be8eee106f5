mod pokemon;

pub use pokemon::configure;
