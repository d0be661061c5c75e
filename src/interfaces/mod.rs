//! Interface adapters: the HTTP API.

pub mod http;
