mod demo;
mod issue;
mod verify;

pub use demo::*;
pub use issue::*;
pub use verify::*;
