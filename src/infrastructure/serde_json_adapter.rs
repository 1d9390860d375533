use crate::domain::model::{Namespace, NodeRecord, PageId, RawEdge};
use crate::infrastructure::schema_validator::validate_all_dump_items;
use crate::usecase::stats::AnalysisStats;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::fs;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LinkDumpDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki: Option<String>,

    #[serde(default)]
    pub pages: Vec<PageDto>,

    #[serde(default)]
    pub links: Vec<LinkDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageDto {
    pub page_id: PageId,
    pub namespace: Namespace,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkDto {
    pub from_id: PageId,
    pub from_namespace: Namespace,
    pub to_namespace: Namespace,
    pub to_title: String,
}

impl LinkDumpDto {
    pub fn into_records(self) -> (Vec<NodeRecord>, Vec<RawEdge>) {
        let nodes = self
            .pages
            .into_iter()
            .map(|p| NodeRecord::new(p.page_id, p.namespace, p.title))
            .collect();
        let edges = self
            .links
            .into_iter()
            .map(|l| RawEdge::new(l.from_id, l.from_namespace, l.to_namespace, l.to_title))
            .collect();
        (nodes, edges)
    }
}

/// Parses and schema-validates a link dump document.
pub fn parse_link_dump(raw: &str) -> Result<LinkDumpDto> {
    let value: Value = serde_json::from_str(raw).context("link dump is not valid JSON")?;
    validate_all_dump_items(&value)?;
    let dto: LinkDumpDto = serde_json::from_value(value)?;
    Ok(dto)
}

pub async fn read_link_dump_file(path: &str) -> Result<LinkDumpDto> {
    let raw = fs::read_to_string(path).await?;
    parse_link_dump(&raw)
}

pub async fn write_report_file(path: &str, stats: &AnalysisStats) -> Result<()> {
    let pretty = serde_json::to_string_pretty(stats)?;
    fs::write(path, pretty).await?;
    Ok(())
}
