//! Presentation Layer
//!
//! HTTP handlers, pages, form DTOs, session gate and router.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod router;

pub use router::{auth_router, auth_router_generic};
