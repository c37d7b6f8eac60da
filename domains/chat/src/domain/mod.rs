//! Chat domain layer: schemas and stored records

pub mod entities;
