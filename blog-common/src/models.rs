use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// “全部”筛选哨兵 - 标签或分类取该值时表示不过滤
pub const ALL: &str = "全部";

/// 无标签文章的分类哨兵
pub const UNCATEGORIZED: &str = "未分类";

/// 文章索引文档的固定路径
pub const INDEX_PATH: &str = "/posts/index.json";

/// 指定文章正文(Markdown)的请求路径
pub fn post_body_path(slug: &str) -> String {
    format!("/posts/{}.md", slug)
}

/// 文章元数据(frontmatter) - 由站外构建管线写入索引文档
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Frontmatter {
    /// 文章标题
    pub title: String,
    /// 发布日期 (ISO-8601字符串)
    #[serde(default)]
    pub date: String,
    /// 文章摘要
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// 文章标签列表
    #[serde(default)]
    pub tags: Vec<String>,
    /// 封面图URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    /// 预计阅读时长
    #[serde(default, rename = "readTime", skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
}

/// 文章条目 - 加载后在会话内不可变
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Post {
    /// 文章唯一标识符 (URL安全)
    pub slug: String,
    /// 文章元数据
    pub frontmatter: Frontmatter,
}

impl Post {
    /// 文章分类 - 定义为第一个标签，无标签时为“未分类”
    pub fn category(&self) -> &str {
        self.frontmatter
            .tags
            .first()
            .map(|t| t.as_str())
            .unwrap_or(UNCATEGORIZED)
    }

    /// 解析发布日期，接受 YYYY-MM-DD 与 RFC 3339 两种写法
    pub fn published(&self) -> Option<NaiveDate> {
        let raw = self.frontmatter.date.trim();
        if raw.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.date_naive())
                .ok()
        })
    }
}

/// 索引文档的线格式: { "posts": [...] }
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PostIndex {
    /// 所有文章，顺序即展示顺序
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// 标题结构 - 渲染后文章中的标题及其层级，目录侧边栏使用
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    /// 标题元素ID
    pub id: String,
    /// 标题文本
    pub text: String,
    /// 标题级别 (1表示h1，2表示h2，依此类推)
    pub level: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, date: &str, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_string(),
            frontmatter: Frontmatter {
                title: slug.to_string(),
                date: date.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                ..Frontmatter::default()
            },
        }
    }

    #[test]
    fn category_is_first_tag() {
        let p = post("a", "2024-05-01", &["小说", "2024"]);
        assert_eq!(p.category(), "小说");
    }

    #[test]
    fn category_falls_back_to_uncategorized() {
        let p = post("a", "2024-05-01", &[]);
        assert_eq!(p.category(), UNCATEGORIZED);
    }

    #[test]
    fn published_accepts_plain_date_and_rfc3339() {
        let plain = post("a", "2024-05-01", &[]);
        let rfc = post("b", "2024-05-01T08:30:00+08:00", &[]);
        assert_eq!(plain.published(), rfc.published());
        assert_eq!(
            plain.published(),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
    }

    #[test]
    fn published_rejects_empty_or_garbage() {
        assert_eq!(post("a", "", &[]).published(), None);
        assert_eq!(post("b", "   ", &[]).published(), None);
        assert_eq!(post("c", "不是日期", &[]).published(), None);
    }

    #[test]
    fn index_decodes_with_optional_fields_missing() {
        let json = r#"{"posts":[{"slug":"hello","frontmatter":{"title":"你好","date":"2024-01-02"}}]}"#;
        let index: PostIndex = serde_json::from_str(json).unwrap();
        assert_eq!(index.posts.len(), 1);
        let p = &index.posts[0];
        assert_eq!(p.slug, "hello");
        assert!(p.frontmatter.tags.is_empty());
        assert!(p.frontmatter.excerpt.is_none());
        assert!(p.frontmatter.read_time.is_none());
    }

    #[test]
    fn read_time_uses_camel_case_on_the_wire() {
        let json = r#"{"slug":"a","frontmatter":{"title":"t","date":"2024-01-01","readTime":"5分钟"}}"#;
        let p: Post = serde_json::from_str(json).unwrap();
        assert_eq!(p.frontmatter.read_time.as_deref(), Some("5分钟"));
    }
}
