pub mod fetch;
pub mod models;
pub mod store;

// 重新导出常用类型和函数，方便直接使用
pub use fetch::{fetch_index, fetch_post_body, FetchError};
pub use models::{post_body_path, Frontmatter, Heading, Post, PostIndex, ALL, INDEX_PATH, UNCATEGORIZED};
