pub mod badge;
pub mod document;
pub mod investment;
pub mod order;
pub mod product;

pub use badge::*;
pub use document::*;
pub use investment::*;
pub use order::*;
pub use product::*;
