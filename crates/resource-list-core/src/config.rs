//! 调用配置（TOML）与默认值推导
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{ResourceListError, Result};
use crate::options::{ResourceListClass, ScanConfig, DEFAULT_RESOURCE_ROOT};
use crate::paths::absolute_normalized;

/// 未指定时的制品名，用于推导清单文件名
pub const DEFAULT_ARTIFACT_ID: &str = "resources";

/// 访问类配置表 `[resource_list_class]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassConfig {
    pub class_name: String,
    #[serde(default)]
    pub public_visibility: bool,
    #[serde(default)]
    pub output_directory: Option<PathBuf>,
    #[serde(default)]
    pub resource_root: Option<String>,
}

/// 一次调用的全部输入
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListConfig {
    /// 构建输出目录（资源的最终根目录）
    pub build_output_dir: PathBuf,
    /// 扫描的基目录；默认等于构建输出目录
    #[serde(default)]
    pub resource_base_dir: Option<PathBuf>,
    /// 清单文件；默认 `<build_output_dir>/META-INF/<artifact_id>.resources`
    #[serde(default)]
    pub resource_list_file: Option<PathBuf>,
    #[serde(default)]
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
    #[serde(default = "default_true")]
    pub add_default_excludes: bool,
    #[serde(default)]
    pub resource_list_class: Option<ClassConfig>,
    /// 调用方已登记的源码根；生成访问类后其输出目录会追加进来
    #[serde(default)]
    pub compile_source_roots: Vec<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl ListConfig {
    pub fn new(build_output_dir: impl Into<PathBuf>) -> Self {
        Self {
            build_output_dir: build_output_dir.into(),
            resource_base_dir: None,
            resource_list_file: None,
            artifact_id: None,
            includes: Vec::new(),
            excludes: Vec::new(),
            add_default_excludes: true,
            resource_list_class: None,
            compile_source_roots: Vec::new(),
        }
    }

    /// 从 TOML 文件加载
    pub fn load(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path).map_err(|source| ResourceListError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&txt, path)
    }

    /// 解析 TOML 文本；`origin` 仅用于报错
    pub fn from_toml(txt: &str, origin: &Path) -> Result<Self> {
        toml::from_str(txt).map_err(|source| ResourceListError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// 归一化后的构建输出目录
    pub fn build_output_dir(&self) -> PathBuf {
        absolute_normalized(&self.build_output_dir)
    }

    pub fn resource_base_dir(&self) -> PathBuf {
        match &self.resource_base_dir {
            Some(dir) => absolute_normalized(dir),
            None => self.build_output_dir(),
        }
    }

    pub fn resource_list_file(&self) -> PathBuf {
        match &self.resource_list_file {
            Some(file) => absolute_normalized(file),
            None => {
                let artifact = self.artifact_id.as_deref().unwrap_or(DEFAULT_ARTIFACT_ID);
                self.build_output_dir()
                    .join("META-INF")
                    .join(format!("{artifact}.resources"))
            }
        }
    }

    /// 扫描选项（尚未加入自排除）
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            includes: self.includes.clone(),
            excludes: self.excludes.clone(),
            add_default_excludes: self.add_default_excludes,
            ..ScanConfig::default()
        }
    }

    /// 访问类请求；输出目录保持未设置时由流程补默认值
    pub fn resource_list_class(&self) -> Option<ResourceListClass> {
        self.resource_list_class.as_ref().map(|c| ResourceListClass {
            class_name: c.class_name.clone(),
            public_visibility: c.public_visibility,
            output_directory: c.output_directory.as_deref().map(absolute_normalized),
            resource_root: c
                .resource_root
                .clone()
                .unwrap_or_else(|| DEFAULT_RESOURCE_ROOT.to_string()),
        })
    }
}

/// 访问类默认输出目录：`<构建目录>/generated-sources/resource-lists`，构建目录为构建输出目录的上一级
pub fn default_class_output_directory(build_output_dir: &Path) -> PathBuf {
    build_output_dir
        .parent()
        .unwrap_or(build_output_dir)
        .join("generated-sources")
        .join("resource-lists")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = ListConfig::from_toml(r#"build_output_dir = "/project/target/classes""#, Path::new("t.toml")).unwrap();
        assert!(cfg.add_default_excludes);
        assert!(cfg.includes.is_empty());
        assert_eq!(cfg.resource_base_dir(), PathBuf::from("/project/target/classes"));
        assert_eq!(
            cfg.resource_list_file(),
            PathBuf::from("/project/target/classes/META-INF/resources.resources")
        );
        assert!(cfg.resource_list_class().is_none());
        assert!(cfg.compile_source_roots.is_empty());
    }

    #[test]
    fn full_config() {
        let txt = r#"
build_output_dir = "/project/target/classes"
resource_base_dir = "/project/src/main/resources"
artifact_id = "app"
includes = ["**/*.properties"]
excludes = ["secret/**"]
add_default_excludes = false
compile_source_roots = ["/project/src/main/rust"]

[resource_list_class]
class_name = "app.ResourceList"
public_visibility = true
"#;
        let cfg = ListConfig::from_toml(txt, Path::new("t.toml")).unwrap();
        assert_eq!(cfg.resource_list_file(), PathBuf::from("/project/target/classes/META-INF/app.resources"));
        let scan = cfg.scan_config();
        assert_eq!(scan.includes, vec!["**/*.properties"]);
        assert_eq!(scan.effective_excludes(), vec!["secret/**"]);
        let class = cfg.resource_list_class().unwrap();
        assert!(class.public_visibility);
        assert!(class.output_directory.is_none());
        assert_eq!(class.resource_root, DEFAULT_RESOURCE_ROOT);
        assert_eq!(cfg.compile_source_roots, vec![PathBuf::from("/project/src/main/rust")]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ListConfig::from_toml("build_output_dir = \"x\"\nincludez = []", Path::new("t.toml")).unwrap_err();
        assert!(matches!(err, ResourceListError::ConfigParse { .. }));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = ListConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ResourceListError::ConfigFile { .. }));
    }

    #[test]
    fn class_output_defaults_next_to_build_output() {
        assert_eq!(
            default_class_output_directory(Path::new("/project/target/classes")),
            PathBuf::from("/project/target/generated-sources/resource-lists")
        );
    }
}
