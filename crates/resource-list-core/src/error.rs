//! 错误类型（模块）
use std::path::PathBuf;
use thiserror::Error;

/// 资源清单流程中的所有错误；任何一种都会终止当前调用
#[derive(Debug, Error)]
pub enum ResourceListError {
    /// 目录遍历失败（基目录不存在、不可读等）
    #[error("failed to scan resources in {base_dir}: {source}")]
    Scan {
        base_dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// 无法创建父目录或写入清单文件
    #[error("failed to write resource list file {path}: {source}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 无法创建输出目录或写入生成的访问类源码
    #[error("failed to generate resource list class at {path}: {source}")]
    Generation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 使用错误（例如清单不在构建输出目录下却请求生成访问类）
    #[error("{0}")]
    Configuration(String),

    /// 配置文件读取失败
    #[error("failed to read config file {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件解析失败
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ResourceListError>;
