//! SessionStorage 封装模块
//!
//! 使用 `gloo-storage` 把路由历史栈镜像到会话存储，刷新后恢复。

use gloo_storage::{SessionStorage, Storage};
use h5bridge::HistoryStore;

const STORAGE_HISTORY_KEY: &str = "h5bridge_route_history";

/// 会话级历史栈存储
///
/// 尽力而为：读写失败只记录日志。
pub struct SessionHistoryStore;

impl HistoryStore for SessionHistoryStore {
    fn load(&self) -> Option<Vec<String>> {
        SessionStorage::get(STORAGE_HISTORY_KEY).ok()
    }

    fn save(&self, history: &[String]) {
        if let Err(e) = SessionStorage::set(STORAGE_HISTORY_KEY, history) {
            h5bridge::log_error!("[Storage] failed to mirror history: {}", e);
        }
    }
}
