pub mod excerpt;
pub mod result_link;
pub mod outcome;

pub use excerpt::*;
pub use outcome::*;
