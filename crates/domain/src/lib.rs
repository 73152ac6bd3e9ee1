pub mod entities;
pub mod errors;
pub mod providers;
pub mod repositories;
pub mod services;

pub use entities::*;
pub use errors::*;
pub use providers::*;
pub use repositories::*;
pub use services::*;
