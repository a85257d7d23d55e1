pub mod client;
pub mod endpoints;
pub mod router;

pub use crate::domain::filter::{Filter, Operator};
pub use crate::domain::model::Record;
pub use crate::domain::ports::ConfigProvider;
pub use crate::domain::resource::Resource;
pub use crate::utils::error::Result;
