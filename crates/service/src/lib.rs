//! Service layer providing the store (`tienda`) business rules on top of models.
//! - Separates business logic from data access through `TiendaRepository`.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod tienda;
pub mod seed;
#[cfg(test)]
pub mod test_support;
