pub mod anchor;
pub mod naming;
pub mod request;

pub use anchor::*;
pub use request::*;
