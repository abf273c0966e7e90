pub mod routes;
pub mod startup;
pub mod hateoas;
pub mod errors;
pub mod openapi;

pub use startup::{run, run_until};
