pub mod matter;

pub use matter::Matter;
