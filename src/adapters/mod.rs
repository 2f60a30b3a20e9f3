// Adapters layer: concrete implementations for external systems (storage, http, proxy server).

pub mod http;
#[cfg(feature = "proxy")]
pub mod proxy;
pub mod storage;
