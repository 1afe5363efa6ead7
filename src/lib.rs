#![allow(dead_code)]
//! Voteboard - Community token leaderboard API for Solana
//!
//! Merges DexScreener's trending-profile and batch market-data feeds into a
//! ranked, vote-weighted token leaderboard with best-effort logo fallbacks.
//!
//! # Modules
//!
//! - `domain`: Core types and logic (TokenRecord, TokenReconciler, VoteLedger)
//! - `ports`: Trait abstractions (TrendingFeed, MarketFeed, LogoProvider)
//! - `adapters`: External implementations (DexScreener, Helius, Solscan, HTTP)
//! - `config`: Configuration loading and validation
//! - `application`: Ranking pipeline and logo fallback chain

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
