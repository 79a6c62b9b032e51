use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
    Json,
    Jsonl,
}

/// Output mode (how much of the run result is shown).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Print only the final declaration total
    #[default]
    Total,
    /// Per-file listing plus totals
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Decls,
    Loops,
    Lines,
    Name,
    Ext,
}

#[derive(Debug, Clone)]
pub struct SortSpec(pub Vec<(SortKey, bool)>);

impl FromStr for SortSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let specs = s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(parse_single_spec)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(specs))
    }
}

fn parse_single_spec(part: &str) -> Result<(SortKey, bool), String> {
    let (key_str, desc) = part.split_once(':').map_or((part, false), |(k, d)| {
        (k.trim(), matches!(d.trim(), "desc" | "DESC"))
    });

    let key = parse_sort_key(key_str)?;
    Ok((key, desc))
}

fn parse_sort_key(key_str: &str) -> Result<SortKey, String> {
    match key_str.to_ascii_lowercase().as_str() {
        "decls" => Ok(SortKey::Decls),
        "loops" => Ok(SortKey::Loops),
        "lines" => Ok(SortKey::Lines),
        "name" => Ok(SortKey::Name),
        "ext" => Ok(SortKey::Ext),
        other => Err(format!("Unknown sort key: {other}")),
    }
}
