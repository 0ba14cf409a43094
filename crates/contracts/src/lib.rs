//! Wire contracts shared between the PDF Q&A page and its backend.

pub mod usecases;
