//! 资源扫描：遍历基目录并按结构过滤 + 模式过滤
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{ResourceListError, Result};
use crate::options::ScanConfig;
use crate::pattern::matches_any;
use crate::paths::to_slash_path;
use crate::types::ResourceSet;

/// 编译产物后缀，永不视为资源
const CLASS_FILE_SUFFIX: &str = ".class";

/// 资源扫描器（持有已合并默认排除的模式列表）
#[derive(Debug, Clone)]
pub struct ResourceScanner {
    config: ScanConfig,
    excludes: Vec<String>,
}

impl ResourceScanner {
    pub fn new(config: ScanConfig) -> Self {
        let excludes = config.effective_excludes();
        Self { config, excludes }
    }

    /// 跳过指定文件（精确路径比较，与模式无关）
    pub fn exclude_file(&mut self, file: impl Into<std::path::PathBuf>) {
        self.config.exclude_file(file);
    }

    pub fn includes(&self) -> &[String] {
        &self.config.includes
    }

    /// 生效的排除模式（含默认排除）
    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }

    /// 扫描 `base_dir`，返回排好序的相对路径集合
    ///
    /// 遍历中的任何 I/O 错误都会让整次扫描失败，不返回部分结果。
    pub fn scan(&self, base_dir: &Path) -> Result<ResourceSet> {
        debug!(?base_dir, "scanning resources");
        debug!(includes = ?self.config.includes, "include patterns");
        debug!(excludes = ?self.excludes, "exclude patterns");

        let mut resources = Vec::new();
        for entry in WalkDir::new(base_dir) {
            let entry = entry.map_err(|source| ResourceListError::Scan {
                base_dir: base_dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if self.config.excluded_files.contains(path) {
                continue;
            }
            // 与 is_regular_file 一致：指向普通文件的符号链接也算
            let is_file = entry.file_type().is_file() || (entry.path_is_symlink() && path.is_file());
            if !is_file {
                continue;
            }
            // 基目录本身是文件时相对路径为空，不作为资源
            let relative = match path.strip_prefix(base_dir) {
                Ok(rel) if !rel.as_os_str().is_empty() => to_slash_path(rel),
                _ => continue,
            };
            if relative.ends_with(CLASS_FILE_SUFFIX) {
                continue;
            }
            if self.is_included(&relative) {
                resources.push(relative);
            }
        }
        Ok(resources.into_iter().collect())
    }

    /// 包含判定：先看包含模式（为空即包含），再看排除模式
    pub fn is_included(&self, relative_path: &str) -> bool {
        let included = self.config.includes.is_empty() || matches_any(relative_path, &self.config.includes);
        if !included {
            debug!(resource = relative_path, "resource not included");
            return false;
        }
        if matches_any(relative_path, &self.excludes) {
            debug!(resource = relative_path, "resource excluded");
            return false;
        }
        debug!(resource = relative_path, "resource included");
        true
    }
}

/// 便捷入口：按 `config` 扫描 `base_dir`
pub fn scan(base_dir: &Path, config: &ScanConfig) -> Result<ResourceSet> {
    ResourceScanner::new(config.clone()).scan(base_dir)
}
