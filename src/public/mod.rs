pub mod data;
pub mod github;

pub use data::PublicData;
