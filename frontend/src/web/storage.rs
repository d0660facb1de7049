//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现核心库的 [`KeyValueStore`]，值按原始字符串存取。

use printstrokes::{ClientError, ClientResult, KeyValueStore};

/// 浏览器 LocalStorage
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    /// 键不存在或发生错误时返回 `None`
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        let storage =
            Self::storage().ok_or_else(|| ClientError::Storage("LocalStorage 不可用".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| ClientError::Storage(format!("写入 {} 失败: {:?}", key, e)))
    }
}
