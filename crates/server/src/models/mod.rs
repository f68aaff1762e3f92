mod fortune;
mod visit;

pub use fortune::*;
pub use visit::*;
