/// 웹사이트 탄소 발자국 감사 모듈
///
pub mod types;
pub mod error;
pub mod emissions;
pub mod rating;
pub mod config;
pub mod client;
pub mod controller;

#[cfg(test)]
pub mod __tests__;

pub use types::*;
pub use error::*;
pub use emissions::*;
pub use rating::*;
pub use config::*;
pub use client::*;
pub use controller::*;
