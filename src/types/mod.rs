pub mod chart;
pub mod compare;
pub mod forecast;
pub mod newsletter;
pub mod price;

pub use chart::*;
pub use compare::*;
pub use forecast::*;
pub use newsletter::*;
pub use price::*;
