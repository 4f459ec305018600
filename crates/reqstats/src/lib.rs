//! Top-level facade crate for reqstats.
//!
//! Re-exports the recorder core and the axum integration so users can depend on a single crate.

pub mod core {
    pub use reqstats_core::*;
}

pub mod server {
    pub use reqstats_server::*;
}
