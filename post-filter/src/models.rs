use blog_common::models::Post;
use serde::{Deserialize, Serialize};

/// 筛选参数 - 客户端传递的筛选条件
#[derive(Deserialize, Debug, Default)]
pub struct FilterParams {
    /// 标签筛选条件（“全部”或缺省表示不按标签过滤）
    pub tag: Option<String>,
    /// 分类筛选条件，即文章的第一个标签（“全部”或缺省表示不过滤）
    pub category: Option<String>,
    /// 当前页码 (默认为1)
    pub page: Option<usize>,
    /// 每页条数 (默认为10)
    pub limit: Option<usize>,
}

/// 筛选结果 - 返回给客户端的当前页
#[derive(Serialize, Debug)]
pub struct FilterResult {
    /// 当前页的文章，保持索引中的相对顺序
    pub posts: Vec<Post>,
    /// 筛选命中总数
    pub total: usize,
    /// 当前页码
    pub page: usize,
    /// 每页条数
    pub limit: usize,
    /// 总页数
    pub total_pages: usize,
}

/// 分页控件条目：页码按钮或被折叠的省略号
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageControl {
    /// 可点击的页码
    Page { number: usize },
    /// 折叠的页码空档
    Gap,
}

/// 归档分组 - 按年月聚合的文章
#[derive(Serialize, Debug)]
pub struct ArchiveGroup {
    /// 分组标签，形如“2024年05月”
    pub label: String,
    /// 该月的文章，保持索引顺序
    pub posts: Vec<Post>,
}

/// 上一篇/下一篇导航结果
#[derive(Serialize, Debug)]
pub struct NavNeighbors {
    /// 索引顺序中的前一篇
    pub prev: Option<Post>,
    /// 索引顺序中的后一篇
    pub next: Option<Post>,
}
