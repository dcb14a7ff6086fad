//! 内置缓存后端

pub mod moka;
pub mod redis;
