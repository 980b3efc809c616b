pub mod builder;
pub mod catalog;
pub mod definition;
pub mod parameters;
pub mod routing;

pub use builder::generate;
pub use catalog::EventAction;
pub use definition::*;
pub use parameters::*;
