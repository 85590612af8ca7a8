//! Core domain operations. Functions here are generic over
//! [`sea_orm::ConnectionTrait`] so the caller decides the transaction
//! boundary; every multi-step write is expected to run inside one
//! transaction opened at the handler call site.

pub mod booking;
pub mod screen;
pub mod show;
