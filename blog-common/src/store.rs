use once_cell::sync::OnceCell;
use std::sync::Mutex;

use crate::fetch::{fetch_index, FetchError};
use crate::models::Post;

// 会话级文章快照。加载成功一次后不再变化，页面卸载时随实例一起丢弃
static POSTS: OnceCell<Mutex<Option<Vec<Post>>>> = OnceCell::new();

fn cell() -> &'static Mutex<Option<Vec<Post>>> {
    POSTS.get_or_init(|| Mutex::new(None))
}

/// 写入会话快照。只有首次写入生效，后续调用被忽略
pub fn install(posts: Vec<Post>) {
    if let Ok(mut guard) = cell().lock() {
        if guard.is_none() {
            *guard = Some(posts);
        }
    }
}

/// 快照是否已写入（包括降级写入的空列表）
pub fn is_loaded() -> bool {
    cell().lock().map(|guard| guard.is_some()).unwrap_or(false)
}

/// 当前快照的拷贝；未加载时为空列表
pub fn snapshot() -> Vec<Post> {
    cell()
        .lock()
        .ok()
        .and_then(|guard| guard.clone())
        .unwrap_or_default()
}

/// 确保索引已加载，返回文章数量。
/// 加载失败时写入空快照（列表路径静默降级为“无文章”），错误只报告给首个调用者
pub async fn ensure_loaded() -> Result<usize, FetchError> {
    if is_loaded() {
        return Ok(snapshot().len());
    }
    match fetch_index().await {
        Ok(posts) => {
            let count = posts.len();
            install(posts);
            Ok(count)
        }
        Err(e) => {
            install(Vec::new());
            Err(e)
        }
    }
}
