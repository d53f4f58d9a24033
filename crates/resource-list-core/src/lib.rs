//! 资源清单核心库
//!
//! 设计要点：
//! - 扫描构建资源目录，按 Ant 风格模式（`*`、`?`、`**`）做包含/排除过滤。
//! - 清单输出稳定：按码点升序，每行一个相对路径，`\n` 结尾。
//! - 清单位于构建输出目录下时，可生成一个 Rust 访问类型，编译期内嵌清单内容。
//! - 单线程、同步；每次调用独立分配结果，无共享可变状态。

mod config;
mod error;
mod generator;
mod list;
mod manifest;
mod options;
mod paths;
mod pattern;
mod scan;
mod types;

pub use config::{default_class_output_directory, ClassConfig, ListConfig, DEFAULT_ARTIFACT_ID};
pub use error::{ResourceListError, Result};
pub use generator::{generate_class_file, render, ClassName};
pub use list::{add_source_root, list_resources, resource_list_resource};
pub use manifest::{write_manifest, write_resources};
pub use options::{ResourceListClass, ScanConfig, DEFAULT_EXCLUDES, DEFAULT_RESOURCE_ROOT};
pub use paths::{absolute_normalized, lexical_normalize, to_slash_path};
pub use pattern::{matches_any, matches_one};
pub use scan::{scan, ResourceScanner};
pub use types::{ListOutcome, ResourceListResource, ResourceSet};
