use std::fmt;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::models::{post_body_path, Post, PostIndex, INDEX_PATH};

/// 获取内容时的错误。只有两类语义：获取失败与文章不存在
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// 网络层错误 (fetch被拒绝或无浏览器环境)
    Network(String),
    /// 非成功的HTTP状态码
    Http(u16),
    /// 请求的内容不存在 (HTTP 404)
    NotFound,
    /// 响应体无法解析
    Decode(String),
}

impl FetchError {
    /// 是否为“文章未找到”——调用方据此渲染“内容不存在”状态
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound)
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "网络请求失败: {}", msg),
            FetchError::Http(status) => write!(f, "请求失败: HTTP {}", status),
            FetchError::NotFound => write!(f, "文章未找到"),
            FetchError::Decode(msg) => write!(f, "解析响应失败: {}", msg),
        }
    }
}

impl From<FetchError> for JsValue {
    fn from(err: FetchError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// 对相对路径发起一次GET请求并读取文本响应。
/// 没有重试，也没有缓存策略，浏览器默认行为即全部策略
async fn fetch_text(path: &str) -> Result<String, FetchError> {
    let window =
        web_sys::window().ok_or_else(|| FetchError::Network("无法获取window对象".to_string()))?;

    let resp_value = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| FetchError::Network(format!("{:?}", e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| FetchError::Network("响应类型不正确".to_string()))?;

    if resp.status() == 404 {
        return Err(FetchError::NotFound);
    }
    if !resp.ok() {
        return Err(FetchError::Http(resp.status()));
    }

    let text_promise = resp
        .text()
        .map_err(|e| FetchError::Decode(format!("{:?}", e)))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|e| FetchError::Decode(format!("{:?}", e)))?;
    text_value
        .as_string()
        .ok_or_else(|| FetchError::Decode("响应不是文本".to_string()))
}

/// 获取文章索引文档并解析为文章列表。
/// 索引是整个筛选/搜索/分页链路唯一的数据来源
pub async fn fetch_index() -> Result<Vec<Post>, FetchError> {
    let body = fetch_text(INDEX_PATH).await?;
    let index: PostIndex =
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(index.posts)
}

/// 获取单篇文章的Markdown正文；404表现为 NotFound
pub async fn fetch_post_body(slug: &str) -> Result<String, FetchError> {
    fetch_text(&post_body_path(slug)).await
}
