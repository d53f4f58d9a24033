use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use resource_list_core::{list_resources, ClassConfig, ListConfig};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "resource-list", version, about = "列出构建资源并生成访问类")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 扫描资源目录，写出清单文件（可选生成访问类）
    List(ListArgs),
}

#[derive(Args, Debug)]
struct ListArgs {
    /// 配置文件（TOML）；命令行参数覆盖其中的同名项
    #[arg(long)]
    config: Option<PathBuf>,

    /// 构建输出目录（未给配置文件时必填）
    #[arg(long)]
    build_output_dir: Option<PathBuf>,

    /// 扫描的资源目录，默认等于构建输出目录
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// 清单文件，默认 <build-output-dir>/META-INF/<artifact-id>.resources
    #[arg(long)]
    output: Option<PathBuf>,

    /// 制品名，用于推导默认清单文件名
    #[arg(long)]
    artifact_id: Option<String>,

    /// 包含模式（可重复）
    #[arg(long = "include")]
    includes: Vec<String>,

    /// 排除模式（可重复）
    #[arg(long = "exclude")]
    excludes: Vec<String>,

    /// 不追加默认排除模式
    #[arg(long)]
    no_default_excludes: bool,

    /// 访问类完整类型名，例如 app::resources::ResourceList
    #[arg(long)]
    class_name: Option<String>,

    /// 访问类使用 pub 可见性（默认 pub(crate)）
    #[arg(long, requires = "class_name")]
    public: bool,

    /// 访问类输出目录（不含包路径）
    #[arg(long, requires = "class_name")]
    class_output_dir: Option<PathBuf>,

    /// 编译期资源根目录表达式，默认 env!("OUT_DIR")
    #[arg(long, requires = "class_name")]
    resource_root: Option<String>,

    /// 已登记的源码根（可重复），结果中去重后追加访问类输出目录
    #[arg(long = "source-root")]
    source_roots: Vec<PathBuf>,
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::List(args) => {
            let config = build_config(args)?;
            info!(base_dir = ?config.resource_base_dir(), "listing resources");

            let outcome = list_resources(&config).context("list resources failed")?;

            // 结果以 JSON 打印到标准输出，便于上层构建工具登记资源与源码根
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &outcome).context("write outcome")?;
            writeln!(out)?;

            info!(resource_count = outcome.resource_count, file = ?outcome.resource_list_file, "resource list written");
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，标准输出只留给 JSON 结果
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 合并配置文件与命令行参数
fn build_config(args: ListArgs) -> Result<ListConfig> {
    let mut config = match (&args.config, &args.build_output_dir) {
        (Some(path), _) => ListConfig::load(path).context("load config file")?,
        (None, Some(dir)) => ListConfig::new(dir.clone()),
        (None, None) => anyhow::bail!("either --config or --build-output-dir is required"),
    };

    if let Some(dir) = args.build_output_dir {
        config.build_output_dir = dir;
    }
    if let Some(dir) = args.base_dir {
        config.resource_base_dir = Some(dir);
    }
    if let Some(file) = args.output {
        config.resource_list_file = Some(file);
    }
    if let Some(id) = args.artifact_id {
        config.artifact_id = Some(id);
    }
    if !args.includes.is_empty() {
        config.includes = args.includes;
    }
    if !args.excludes.is_empty() {
        config.excludes = args.excludes;
    }
    if args.no_default_excludes {
        config.add_default_excludes = false;
    }
    if !args.source_roots.is_empty() {
        config.compile_source_roots = args.source_roots;
    }

    if let Some(class_name) = args.class_name {
        let class = config.resource_list_class.get_or_insert_with(ClassConfig::default);
        class.class_name = class_name;
        class.public_visibility |= args.public;
        if args.class_output_dir.is_some() {
            class.output_directory = args.class_output_dir;
        }
        if args.resource_root.is_some() {
            class.resource_root = args.resource_root;
        }
    }

    Ok(config)
}
