//! rangelab inspect command

use crate::commands::validate::read_document;
use anyhow::Context;
use clap::Args;
use shared::{Asset, AssetStats, TeamRole};
use std::path::PathBuf;
use visibility::filter_for_role;

#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Topology document (JSON)
    pub topology: PathBuf,

    /// Team role to inspect as (anything but red/blue sees nothing)
    #[arg(short, long)]
    pub role: String,

    /// Asset list (JSON array)
    #[arg(short, long)]
    pub assets: Option<PathBuf>,

    /// Print aggregate statistics as well
    #[arg(long)]
    pub stats: bool,
}

impl InspectCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let document = read_document(&self.topology)?;
        document
            .validate()
            .with_context(|| format!("{} failed validation", self.topology.display()))?;

        let assets: Vec<Asset> = match &self.assets {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("cannot parse {}", path.display()))?
            }
            None => Vec::new(),
        };

        let role = TeamRole::resolve(&self.role);
        let view = filter_for_role(&document, &assets, role);

        println!("project '{}' as role '{}'", document.project_id, role);
        println!("nodes:");
        for node in &view.nodes {
            println!(
                "  {} ({}){}",
                node.id,
                node.name,
                if node.is_structural() { " [structural]" } else { "" }
            );
        }
        println!("edges:");
        for edge in &view.edges {
            println!("  {} -> {}", edge.source, edge.target);
        }
        println!("assets:");
        for asset in &view.assets {
            println!(
                "  {} ({}){}",
                asset.id,
                asset.name,
                if asset.is_target { " [target]" } else { "" }
            );
        }

        if self.stats {
            let stats = AssetStats::of(&view.assets);
            println!(
                "stats: count={} highValueTargets={}",
                stats.count, stats.high_value_target_count
            );
        }

        Ok(())
    }
}
