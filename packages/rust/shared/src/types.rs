//! Core domain types for FilterForge config generation.

use serde::{Deserialize, Serialize};

use crate::error::{FilterForgeError, Result};

// ---------------------------------------------------------------------------
// RuneDesign
// ---------------------------------------------------------------------------

/// The rune-display variant spliced into the base file's runes block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RuneDesign {
    CosmicRainbow,
    Classic,
}

impl RuneDesign {
    /// All accepted variants, in display order.
    pub const ALL: [RuneDesign; 2] = [RuneDesign::CosmicRainbow, RuneDesign::Classic];

    /// Canonical lowercase slug used in upstream file names.
    pub fn slug(&self) -> &'static str {
        match self {
            RuneDesign::CosmicRainbow => "cosmic-rainbow",
            RuneDesign::Classic => "classic",
        }
    }

    /// Upstream file name for this design's rune block.
    pub fn file_name(&self) -> String {
        format!("runes-{}.bh", self.slug())
    }
}

impl std::fmt::Display for RuneDesign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for RuneDesign {
    type Err = FilterForgeError;

    /// Case-insensitive; accepts both the spaced and hyphenated spelling.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "cosmic rainbow" | "cosmic-rainbow" => Ok(RuneDesign::CosmicRainbow),
            "classic" => Ok(RuneDesign::Classic),
            _ => Err(FilterForgeError::validation(format!(
                "invalid rune_design parameter: {s}"
            ))),
        }
    }
}

impl TryFrom<String> for RuneDesign {
    type Error = FilterForgeError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<RuneDesign> for String {
    fn from(d: RuneDesign) -> String {
        d.slug().to_string()
    }
}

// ---------------------------------------------------------------------------
// FilterBlock
// ---------------------------------------------------------------------------

/// A named filter block available for splicing into the filter section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilterBlock {
    Sorceress,
    Paladin,
    Necromancer,
    Amazon,
    Assassin,
    Barbarian,
    Druid,
    Leveling,
}

impl FilterBlock {
    /// All accepted blocks, in display order.
    pub const ALL: [FilterBlock; 8] = [
        FilterBlock::Sorceress,
        FilterBlock::Paladin,
        FilterBlock::Necromancer,
        FilterBlock::Amazon,
        FilterBlock::Assassin,
        FilterBlock::Barbarian,
        FilterBlock::Druid,
        FilterBlock::Leveling,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            FilterBlock::Sorceress => "sorceress",
            FilterBlock::Paladin => "paladin",
            FilterBlock::Necromancer => "necromancer",
            FilterBlock::Amazon => "amazon",
            FilterBlock::Assassin => "assassin",
            FilterBlock::Barbarian => "barbarian",
            FilterBlock::Druid => "druid",
            FilterBlock::Leveling => "leveling",
        }
    }

    /// Upstream file name for this block.
    pub fn file_name(&self) -> String {
        format!("{}.bh", self.name())
    }
}

impl std::fmt::Display for FilterBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FilterBlock {
    type Err = FilterForgeError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        FilterBlock::ALL
            .iter()
            .find(|b| b.name() == lower)
            .copied()
            .ok_or_else(|| {
                FilterForgeError::validation(format!("invalid filter_blocks parameter: {s}"))
            })
    }
}

impl TryFrom<String> for FilterBlock {
    type Error = FilterForgeError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<FilterBlock> for String {
    fn from(b: FilterBlock) -> String {
        b.name().to_string()
    }
}

// ---------------------------------------------------------------------------
// ConfigRequest
// ---------------------------------------------------------------------------

/// A validated config-generation request.
///
/// This is the strongly-typed boundary structure: by the time a
/// `ConfigRequest` exists, every name in it is known-good, so the merge
/// engine never re-validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRequest {
    /// Which rune design block to splice in.
    pub rune_design: RuneDesign,
    /// Filter blocks to splice in, in caller order. May be empty.
    #[serde(default)]
    pub filter_blocks: Vec<FilterBlock>,
}

/// Untyped request payload shape, used to batch validation errors.
#[derive(Debug, Deserialize)]
struct RawConfigRequest {
    #[serde(default)]
    rune_design: String,
    #[serde(default)]
    filter_blocks: Vec<String>,
}

impl ConfigRequest {
    /// Validate raw design and block names into a request.
    ///
    /// All invalid block names are reported in one error, matching the
    /// upstream API's batched message.
    pub fn from_parts(rune_design: &str, filter_blocks: &[String]) -> Result<Self> {
        let rune_design: RuneDesign = rune_design.parse()?;

        let mut blocks = Vec::with_capacity(filter_blocks.len());
        let mut invalid = Vec::new();
        for name in filter_blocks {
            match name.parse::<FilterBlock>() {
                Ok(block) => blocks.push(block),
                Err(_) => invalid.push(name.clone()),
            }
        }

        if !invalid.is_empty() {
            return Err(FilterForgeError::validation(format!(
                "invalid filter_blocks parameter: {}",
                invalid.join(", ")
            )));
        }

        Ok(Self {
            rune_design,
            filter_blocks: blocks,
        })
    }

    /// Parse and validate a JSON request payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        let raw: RawConfigRequest = serde_json::from_str(payload).map_err(|e| {
            FilterForgeError::validation(format!("invalid request data: {e}"))
        })?;
        Self::from_parts(&raw.rune_design, &raw.filter_blocks)
    }
}
