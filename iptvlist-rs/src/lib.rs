//! # iptvlist-rs
//! A library for parsing IPTV m3u playlists into grouped documents
//!
//! # Example
//! ```rust
//! use iptvlist_rs::Parser;
//! use std::io::Cursor;
//!
//! // 1. Parse
//! let mut parser = Parser::new(Cursor::new(r#"
//! #EXTM3U
//! #EXTVLCOPT:http-user-agent=Mozilla/5.0
//! #EXTINF:-1 tvg-id="a" group-title="News",A
//! http://example.com/A.m3u8|referer=http://example.com/"#));
//! parser.parse().unwrap();
//! let result = parser.get_result();
//! assert_eq!(result.group("News").unwrap().items[0].user_agent, "Mozilla/5.0");
//!
//! // 2. Generate
//! println!("{}", result.to_string());
//! ```

mod builder;
pub mod classifier;
pub mod format;
mod parser;
pub use parser::*;
