mod category;
mod filters;
mod product;

pub use category::*;
pub use filters::*;
pub use product::*;
