pub mod record;
pub mod seed;
pub mod store;
