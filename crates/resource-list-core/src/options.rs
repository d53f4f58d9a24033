//! 扫描选项与访问类描述（模块）
use std::collections::HashSet;
use std::path::PathBuf;

/// 默认排除模式（`add_default_excludes` 为 true 时追加到排除列表末尾）
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "META-INF/MANIFEST.MF",
    "META-INF/LICENSE.*",
    "META-INF/services/**",
    "META-INF/maven/**",
    "META-INF/m2e/**",
];

/// 扫描选项
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// 包含模式；为空表示全部包含
    pub includes: Vec<String>,
    /// 调用方给出的排除模式（不含默认排除）
    pub excludes: Vec<String>,
    /// 无论模式如何都跳过的文件（绝对路径），用于让清单不列出自己
    pub excluded_files: HashSet<PathBuf>,
    /// 是否追加 [`DEFAULT_EXCLUDES`]
    pub add_default_excludes: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            excludes: Vec::new(),
            excluded_files: HashSet::new(),
            add_default_excludes: true,
        }
    }
}

impl ScanConfig {
    /// 实际生效的排除列表：调用方模式在前，默认排除在后
    pub fn effective_excludes(&self) -> Vec<String> {
        let mut out = self.excludes.clone();
        if self.add_default_excludes {
            out.extend(DEFAULT_EXCLUDES.iter().map(|s| s.to_string()));
        }
        out
    }

    /// 追加一个需要跳过的文件
    pub fn exclude_file(&mut self, file: impl Into<PathBuf>) {
        self.excluded_files.insert(file.into());
    }
}

/// 访问类生成请求
#[derive(Debug, Clone)]
pub struct ResourceListClass {
    /// 完整类型名，`.` 或 `::` 分隔，例如 `app::resources::ResourceList`
    pub class_name: String,
    /// true 生成 `pub`，否则生成 `pub(crate)`
    pub public_visibility: bool,
    /// 输出根目录（不含包路径）；None 时由流程按构建目录推导
    pub output_directory: Option<PathBuf>,
    /// 编译期资源根目录表达式，需展开为字符串字面量
    ///
    /// 生成的类型用 `include_str!(concat!(<resource_root>, "/<查找路径>"))` 内嵌清单，
    /// 所以该表达式在编译访问类的 crate 中必须指向本次调用的构建输出目录。
    /// 默认值 [`DEFAULT_RESOURCE_ROOT`] 仅在构建输出目录就是该 crate 的 `OUT_DIR`
    /// （例如从 build script 调用）时成立；其他布局需显式给出，
    /// 例如 `concat!(env!("CARGO_MANIFEST_DIR"), "/target/classes")`。
    pub resource_root: String,
}

/// 默认资源根：build script 的输出目录，对应把构建输出目录设为 `OUT_DIR` 的调用
pub const DEFAULT_RESOURCE_ROOT: &str = "env!(\"OUT_DIR\")";

impl Default for ResourceListClass {
    fn default() -> Self {
        Self {
            class_name: String::new(),
            public_visibility: false,
            output_directory: None,
            resource_root: DEFAULT_RESOURCE_ROOT.to_string(),
        }
    }
}
