//! HTTP surface of the insights report service

pub mod routes;
