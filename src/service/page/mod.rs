//! Per-page markup extractors.
//!
//! Everything in here is a pure function over a parsed document so the
//! brittle parts of scraping stay testable without a network. Callers decide
//! how a missing marker maps into the response taxonomy.

pub mod contests;
pub mod login;
pub mod solution;
pub mod solutions;
pub mod submit;
pub mod team;
pub mod user;
