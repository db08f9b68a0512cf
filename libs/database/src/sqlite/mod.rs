pub mod connector;
pub mod schema;
pub mod seed;

pub use connector::{connect, connect_url};
pub use schema::init_schema;
pub use seed::seed_demo_data;
