//! HTTP-level middleware: security headers. CORS lives in the router
//! builder since its configuration is environment-driven.

pub mod security;

pub use security::security_headers;
