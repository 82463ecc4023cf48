//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing ordering rules against the current catalog
//! - **Orchestration**: Coordinating catalog lookups, validation and the order write
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod order;

#[cfg(test)]
mod test;
