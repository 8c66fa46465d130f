//! Backend access for the pages

pub mod client;

pub use client::*;
