pub mod errors;
pub mod db;
pub mod tienda;

#[cfg(test)]
mod tests;
