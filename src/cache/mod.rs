//! 对象缓存模块
//!
//! 通过插件注册表按配置选择缓存后端（moka 内存缓存或 Redis）。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 注册一个对象缓存插件
///
/// 在程序启动时（main 之前）将构造函数写入注册表，
/// 由 `runtime::lifetime::startup` 按配置项 `cache.type` 取用。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $ty:ident) => {
        paste::paste! {
            #[ctor::ctor]
            #[allow(non_snake_case)]
            fn [<__register_object_cache_ $ty>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| {
                        Box::pin(async {
                            let cache = <$ty>::new()
                                .map_err($crate::errors::SimsError::cache_connection)?;
                            Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                        })
                            as $crate::cache::register::BoxedObjectCacheFuture
                    }),
                );
            }
        }
    };
}
