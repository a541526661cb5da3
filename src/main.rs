use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use kustomize_dot::{config, error, graph, plugin, render, resource};
use std::io::Read;
use tracing_subscriber::EnvFilter;

type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "kustomize-dot", version)]
#[command(about = "Generate graphs from kustomize resources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate dot representation of the resources.
    #[command(visible_aliases = ["gen", "g"])]
    Generate(GenerateArgs),

    /// Run as a KRM function plugin (ResourceList on stdin/stdout).
    #[command(visible_alias = "p")]
    Plugin,
}

#[derive(Args)]
struct GenerateArgs {
    /// File containing the Kubernetes resources (`-` for stdin).
    #[arg(short = 'f', long)]
    file: String,

    /// Direction of graph layout: TB, BT, LR or RL.
    #[arg(short = 'l', long, default_value = "LR")]
    layout: String,

    /// Highlight resources of a given kind, e.g. `Deployment=green`.
    #[arg(long, visible_alias = "kind-color", env = "HIGHLIGHT_KIND", value_delimiter = ',')]
    highlight_kind: Vec<String>,

    /// Highlight resources from a given namespace, e.g. `kube-system=red`.
    #[arg(
        long,
        visible_alias = "namespace-color",
        env = "HIGHLIGHT_NAMESPACE",
        value_delimiter = ','
    )]
    highlight_namespace: Vec<String>,

    /// Drop resources of the given kind.
    #[arg(long, env = "DROP_KIND", value_delimiter = ',')]
    drop_kind: Vec<String>,

    /// Drop all resources from the given namespace.
    #[arg(long, env = "DROP_NAMESPACE", value_delimiter = ',')]
    drop_namespace: Vec<String>,

    /// Keep resources of the given kind only.
    #[arg(long, env = "KEEP_KIND", value_delimiter = ',')]
    keep_kind: Vec<String>,

    /// Keep resources from the given namespace only.
    #[arg(long, env = "KEEP_NAMESPACE", value_delimiter = ',')]
    keep_namespace: Vec<String>,

    #[arg(long, value_enum, default_value_t = render::Format::Dot)]
    format: render::Format,

    /// Output file; stdout when omitted.
    #[arg(short = 'o', long)]
    out: Option<String>,
}

/// Older names for `HIGHLIGHT_KIND` / `HIGHLIGHT_NAMESPACE`, read only when
/// the option and its primary variable are both unset.
const LEGACY_KIND_COLOR_ENV: &str = "KIND_COLOR";
const LEGACY_NAMESPACE_COLOR_ENV: &str = "NAMESPACE_COLOR";

/// `values` if any were given, otherwise the comma-separated `var`.
fn with_env_fallback(
    values: &[String],
    var: &str,
    env: &impl Fn(&str) -> Option<String>,
) -> Vec<String> {
    if !values.is_empty() {
        return values.to_vec();
    }
    env(var)
        .map(|v| v.split(',').filter(|s| !s.is_empty()).map(str::to_string).collect())
        .unwrap_or_default()
}

impl GenerateArgs {
    fn to_config(&self) -> error::Result<config::Config> {
        self.to_config_with_env(|var| std::env::var(var).ok())
    }

    fn to_config_with_env(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> error::Result<config::Config> {
        let layout: config::LayoutDirection = self.layout.parse()?;
        let mut cfg = config::Config::default().with_layout(layout);

        let highlight_kind = with_env_fallback(&self.highlight_kind, LEGACY_KIND_COLOR_ENV, &env);
        let highlight_namespace =
            with_env_fallback(&self.highlight_namespace, LEGACY_NAMESPACE_COLOR_ENV, &env);

        for pair in &highlight_kind {
            let (kind, color) = config::parse_kv(pair)?;
            cfg = cfg.with_highlight_kind(&kind, &color);
        }
        for pair in &highlight_namespace {
            let (namespace, color) = config::parse_kv(pair)?;
            cfg = cfg.with_highlight_namespace(&namespace, &color);
        }
        for kind in &self.drop_kind {
            cfg = cfg.with_drop_kind(kind);
        }
        for namespace in &self.drop_namespace {
            cfg = cfg.with_drop_namespace(namespace);
        }
        for kind in &self.keep_kind {
            cfg = cfg.with_keep_kind(kind);
        }
        for namespace in &self.keep_namespace {
            cfg = cfg.with_keep_namespace(namespace);
        }

        Ok(cfg)
    }
}

fn generate(args: &GenerateArgs) -> Result<()> {
    // Options are validated before any resource is read.
    let cfg = args.to_config()?;

    let resources = resource::parse_file(&args.file)
        .with_context(|| format!("cannot parse resources from {}", args.file))?;
    let g = graph::build_graph(&resources, &cfg).context("cannot generate graph")?;
    let text = render::render(&g, args.format)?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("write {}", path))?;
            tracing::info!(path = %path, "wrote graph");
        }
        None => print!("{}", text),
    }

    Ok(())
}

fn run_plugin() -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("read ResourceList from stdin")?;

    print!("{}", plugin::run(&input)?);
    Ok(())
}

fn main() -> Result<()> {
    // stdout carries the graph / ResourceList, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.cmd {
        Commands::Generate(args) => generate(args),
        Commands::Plugin => run_plugin(),
    }
}
