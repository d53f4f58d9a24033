//! 公共类型（对外暴露）
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// 扫描结果：`/` 分隔的相对路径，按码点升序、无重复
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResourceSet {
    resources: BTreeSet<String>,
}

impl ResourceSet {
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn contains(&self, resource: &str) -> bool {
        self.resources.contains(resource)
    }

    /// 按升序遍历
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.resources.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.resources.iter().cloned().collect()
    }
}

impl FromIterator<String> for ResourceSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self { resources: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a ResourceSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}

/// 清单文件作为构建资源时的描述（目录 + 文件名包含模式 + 相对构建输出目录的子路径）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceListResource {
    /// 清单所在目录（绝对路径）
    pub directory: PathBuf,
    /// 只有一项：清单文件名
    pub includes: Vec<String>,
    /// 相对构建输出目录的子目录，`/` 分隔；直接位于其下时为空串
    pub target_path: String,
}

impl ResourceListResource {
    /// 运行期查找路径：`<target_path>/<file_name>`，target_path 为空时只有文件名
    pub fn lookup_path(&self) -> String {
        let file_name = self.includes.first().map(String::as_str).unwrap_or_default();
        if self.target_path.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{}", self.target_path, file_name)
        }
    }
}

/// 一次 `list_resources` 调用交还给调用方的结果
#[derive(Debug, Clone, Serialize)]
pub struct ListOutcome {
    pub resource_count: usize,
    pub resource_list_file: PathBuf,
    /// 清单位于构建输出目录之下时才有
    pub resource: Option<ResourceListResource>,
    /// 生成了访问类时，需要登记为源码根的输出目录
    pub source_root: Option<PathBuf>,
    /// 登记后的源码根列表（调用方列表，必要时追加 `source_root`）
    pub compile_source_roots: Vec<PathBuf>,
}
