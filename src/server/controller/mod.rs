//! HTTP request handlers.
//!
//! Controllers convert DTOs to domain parameters, call the service layer and convert the
//! results back into DTOs. Every handler is documented for the OpenAPI document with
//! `#[utoipa::path]`.

pub mod health;
pub mod order;

#[cfg(test)]
mod test;
