//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits plus the HTTP
//! surface:
//! - DexScreener: trending-profile and batch market-data feeds
//! - Helius / Solscan: best-effort logo lookups
//! - Server: axum routes and middleware

pub mod dexscreener;
pub mod helius;
pub mod server;
pub mod solscan;

pub use dexscreener::DexScreenerClient;
pub use helius::HeliusLogoClient;
pub use solscan::SolscanLogoClient;
