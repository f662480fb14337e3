use serde::{Deserialize, Serialize};

/// 搜索请求结构
#[derive(Deserialize, Debug)]
pub struct SearchRequest {
    /// 搜索查询
    pub query: String,
    /// 当前页码
    #[serde(default = "default_page")]
    pub page: usize,
    /// 每页条数
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

/// 搜索结果
#[derive(Serialize, Debug)]
pub struct SearchResponse {
    /// 当前页的命中条目
    pub items: Vec<SearchItem>,
    /// 命中总数
    pub total: usize,
    /// 当前页码
    pub page: usize,
    /// 每页条数
    pub page_size: usize,
    /// 总页数
    pub total_pages: usize,
    /// 是否处于搜索状态；空查询（含纯空白）为false
    pub is_searching: bool,
    /// 规整（去除首尾空白并小写）后的查询词
    pub query: String,
}

impl SearchResponse {
    /// 空查询的短路结果：零命中且不处于搜索状态
    pub fn idle(page: usize, page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page,
            page_size,
            total_pages: 0,
            is_searching: false,
            query: String::new(),
        }
    }
}

/// 搜索结果条目
#[derive(Serialize, Debug, Clone)]
pub struct SearchItem {
    /// 文章唯一标识符
    pub slug: String,
    /// 高亮后的标题，命中部分包裹 <mark> 标记
    pub title: String,
    /// 文章摘要
    pub excerpt: Option<String>,
    /// 封面图URL
    pub cover: Option<String>,
    /// 发布日期 (原始字符串)
    pub date: String,
    /// 文章标签列表
    pub tags: Vec<String>,
}

/// 默认页码
fn default_page() -> usize {
    1
}

/// 默认每页条数
fn default_page_size() -> usize {
    10
}
