pub mod envelope;
pub mod request;
pub mod shape;

pub use envelope::*;
pub use request::*;
pub use shape::*;
