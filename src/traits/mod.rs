pub mod publisher;

pub use publisher::Publisher;
