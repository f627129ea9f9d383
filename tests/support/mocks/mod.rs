// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート
#![allow(dead_code)]

pub mod listings;

pub use listings::{FailingListingRepo, InMemoryListingRepo};
