//! foss4gov-site
//!
//! FOSS4Gov の静的サイト生成: 多言語翻訳（英語フォールバック付き）、企業 CSV の解析、
//! GitHub Issue 用 URL の生成

pub mod catalog;
pub mod cli;
pub mod companies;
pub mod config;
pub mod html;
pub mod i18n;
pub mod page;
pub mod submission;
mod test_utils;
