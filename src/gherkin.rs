//! Main module for feature-tree library functionality

pub mod ast;
pub mod building;
pub mod config;
pub mod formats;
pub mod parsing;
pub mod scanning;
pub mod testing;
