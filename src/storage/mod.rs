pub mod local_store;
pub mod store_model;

pub use local_store::LocalStore;
pub use store_model::{seed_data, DashboardData, DATA_VERSION};
