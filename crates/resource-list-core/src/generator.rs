//! 访问类源码生成：对内嵌模板做固定记号替换
use regex::Regex;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::error::{ResourceListError, Result};
use crate::options::ResourceListClass;
use crate::types::ResourceListResource;

/// 模板随库一起编译，不存在运行期缺失的情况
const TEMPLATE: &str = include_str!("templates/resource_list.rs.template");

/// 生成文件的扩展名
const SOURCE_EXT: &str = "rs";

/// 类型名每一段都必须是标识符
static IDENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern"));

/// 关键字（含保留字）不能作为包段或类型名，否则生成的源码无法编译
const KEYWORDS: &[&str] = &[
    "_", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

fn is_identifier(segment: &str) -> bool {
    IDENT_PATTERN.is_match(segment) && !KEYWORDS.contains(&segment)
}

/// 拆分后的类型名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassName {
    /// 包各段；为空表示直接放在输出根目录
    pub package: Vec<String>,
    pub simple_name: String,
}

impl ClassName {
    /// 解析 `a.b.Name` 或 `a::b::Name`
    pub fn parse(class_name: &str) -> Result<Self> {
        let normalized = class_name.trim().replace("::", ".");
        let mut segments: Vec<String> = normalized.split('.').map(str::to_string).collect();

        if !segments.iter().all(|s| is_identifier(s)) {
            return Err(ResourceListError::Configuration(format!(
                "invalid resource list class name: '{class_name}'"
            )));
        }
        // split 至少产出一段
        let simple_name = segments.pop().unwrap_or_default();
        Ok(Self { package: segments, simple_name })
    }

    /// 生成代码中展示的包名（`::` 分隔）
    pub fn package_name(&self) -> String {
        self.package.join("::")
    }

    /// 相对输出根目录的源码文件路径
    pub fn source_file(&self) -> PathBuf {
        let mut path: PathBuf = self.package.iter().collect();
        path.push(format!("{}.{}", self.simple_name, SOURCE_EXT));
        path
    }
}

/// 渲染访问类源码
pub fn render(class: &ResourceListClass, resource: &ResourceListResource) -> Result<String> {
    let name = ClassName::parse(&class.class_name)?;
    let visibility = if class.public_visibility { "pub " } else { "pub(crate) " };

    Ok(TEMPLATE
        .replace("${package}", &name.package_name())
        .replace("${className}", &name.simple_name)
        .replace("${resourceListFile}", &resource.lookup_path())
        .replace("${resourceRoot}", &class.resource_root)
        .replace("${visibility}", visibility))
}

/// 渲染并写入 `<output_directory>/<包路径>/<类型名>.rs`，返回写入的文件
///
/// `output_directory` 必须已设置；已有文件会被覆盖。
pub fn generate_class_file(class: &ResourceListClass, resource: &ResourceListResource) -> Result<PathBuf> {
    let output_directory = class.output_directory.as_ref().ok_or_else(|| {
        ResourceListError::Configuration("resource list class has no output directory".to_string())
    })?;
    let content = render(class, resource)?;
    let class_file = output_directory.join(ClassName::parse(&class.class_name)?.source_file());

    if let Some(package_dir) = class_file.parent() {
        fs::create_dir_all(package_dir).map_err(|source| ResourceListError::Generation {
            path: package_dir.to_path_buf(),
            source,
        })?;
    }

    let wrap = |source| ResourceListError::Generation { path: class_file.clone(), source };
    let mut out = BufWriter::new(File::create(&class_file).map_err(wrap)?);
    out.write_all(content.as_bytes()).map_err(wrap)?;
    out.flush().map_err(wrap)?;
    Ok(class_file)
}
