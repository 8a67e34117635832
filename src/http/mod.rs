pub mod cors;
pub mod errors;
pub mod middleware;
pub mod query_params;
pub mod router;
#[cfg(test)]
pub mod tests;
