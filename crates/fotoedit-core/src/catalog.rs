//! Static filter catalog.
//!
//! Each preset is declared as a compact operator-chain string
//! (`"sepia(0.4) saturate(1.5) brightness(1.1)"`) and parsed into a
//! structured token list exactly once, when the catalog is built. Rendering
//! and export never re-parse the strings.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Id of the sentinel preset that applies no operators.
pub const IDENTITY_PRESET_ID: &str = "original";

/// Unit of an operator magnitude, inferred from its literal syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpUnit {
    /// `110%`
    Percent,
    /// `260deg`
    Degrees,
    /// bare number, e.g. `1.1`
    Unitless,
}

impl OpUnit {
    /// Suffix rendered after the magnitude.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Degrees => "deg",
            Self::Unitless => "",
        }
    }
}

/// Recognized filter operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpKind {
    Brightness,
    Contrast,
    Saturate,
    Grayscale,
    Sepia,
    HueRotate,
    Opacity,
}

impl OpKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "brightness" => Some(Self::Brightness),
            "contrast" => Some(Self::Contrast),
            "saturate" => Some(Self::Saturate),
            "grayscale" => Some(Self::Grayscale),
            "sepia" => Some(Self::Sepia),
            "hue-rotate" => Some(Self::HueRotate),
            "opacity" => Some(Self::Opacity),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
            Self::Saturate => "saturate",
            Self::Grayscale => "grayscale",
            Self::Sepia => "sepia",
            Self::HueRotate => "hue-rotate",
            Self::Opacity => "opacity",
        }
    }
}

/// One element of an operator chain.
///
/// Tokens that fail to parse (unknown operator name, non-numeric magnitude,
/// unsupported unit) are kept verbatim as `Raw`: they are never scaled by
/// intensity and the pixel applier skips them. Degradation is silent by
/// design, a bad token must not take the whole preset down.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ChainOp {
    Filter {
        kind: OpKind,
        value: f32,
        unit: OpUnit,
    },
    Raw(String),
}

impl ChainOp {
    pub fn filter(kind: OpKind, value: f32, unit: OpUnit) -> Self {
        Self::Filter { kind, value, unit }
    }
}

impl fmt::Display for ChainOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filter { kind, value, unit } => {
                write!(f, "{}({}{})", kind.name(), value, unit.suffix())
            }
            Self::Raw(token) => write!(f, "{token}"),
        }
    }
}

/// Parse a whitespace-separated operator chain into tokens.
pub fn parse_chain(chain: &str) -> Vec<ChainOp> {
    chain.split_whitespace().map(parse_token).collect()
}

fn parse_token(token: &str) -> ChainOp {
    let Some((name, rest)) = token.split_once('(') else {
        return ChainOp::Raw(token.to_string());
    };
    let Some(arg) = rest.strip_suffix(')') else {
        return ChainOp::Raw(token.to_string());
    };
    let Some(kind) = OpKind::from_name(name) else {
        return ChainOp::Raw(token.to_string());
    };

    let (literal, unit) = if let Some(v) = arg.strip_suffix('%') {
        (v, OpUnit::Percent)
    } else if let Some(v) = arg.strip_suffix("deg") {
        (v, OpUnit::Degrees)
    } else {
        (arg, OpUnit::Unitless)
    };

    match literal.trim().parse::<f32>() {
        Ok(value) => ChainOp::filter(kind, value, unit),
        Err(_) => ChainOp::Raw(token.to_string()),
    }
}

/// A named visual-effect preset with its baseline operator chain.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilterPreset {
    pub id: String,
    pub name: String,
    pub chain: Vec<ChainOp>,
}

impl FilterPreset {
    fn new(id: &str, name: &str, chain: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            chain: parse_chain(chain),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.id == IDENTITY_PRESET_ID
    }
}

/// The full set of presets, parsed once per process.
#[derive(Clone, Debug)]
pub struct FilterCatalog {
    presets: Vec<FilterPreset>,
}

impl FilterCatalog {
    /// The built-in catalog. Parsed on first access, then shared.
    pub fn builtin() -> &'static FilterCatalog {
        static CATALOG: OnceLock<FilterCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| FilterCatalog {
            presets: vec![
                FilterPreset::new(IDENTITY_PRESET_ID, "Original", ""),
                FilterPreset::new(
                    "pastel-pink",
                    "Rosé",
                    "sepia(0.2) saturate(1.2) hue-rotate(-30deg) brightness(1.1)",
                ),
                FilterPreset::new(
                    "golden",
                    "Golden",
                    "sepia(0.4) saturate(1.5) brightness(1.1) contrast(1.1)",
                ),
                FilterPreset::new("lilac", "Lilac", "hue-rotate(260deg) saturate(0.9) brightness(1.1)"),
                FilterPreset::new(
                    "vintage",
                    "Retro",
                    "sepia(0.6) contrast(0.8) brightness(0.9) saturate(0.8)",
                ),
                FilterPreset::new("emerald", "Emerald", "hue-rotate(90deg) saturate(1.2) brightness(0.9)"),
                FilterPreset::new(
                    "cyber",
                    "Cyber",
                    "hue-rotate(160deg) saturate(2) brightness(1.1) contrast(1.3)",
                ),
                FilterPreset::new("noir", "Noir", "grayscale(1) contrast(1.4) brightness(0.8)"),
                FilterPreset::new(
                    "faded",
                    "Faded",
                    "opacity(0.9) brightness(1.2) contrast(0.7) saturate(0.6)",
                ),
                FilterPreset::new(
                    "arctic",
                    "Arctic",
                    "hue-rotate(190deg) saturate(0.5) brightness(1.2) contrast(1.1)",
                ),
                FilterPreset::new("sunset", "Sunset", "hue-rotate(-40deg) saturate(1.8) brightness(1.1)"),
            ],
        })
    }

    pub fn presets(&self) -> &[FilterPreset] {
        &self.presets
    }

    pub fn get(&self, id: &str) -> Option<&FilterPreset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Look up a preset, erroring on unknown ids. For callers that take
    /// preset ids from user input rather than the UI.
    pub fn require(&self, id: &str) -> crate::error::Result<&FilterPreset> {
        self.get(id)
            .ok_or_else(|| crate::error::EditError::UnknownPreset(id.to_string()))
    }

    /// Look up a preset, falling back to the identity preset for unknown ids.
    pub fn get_or_identity(&self, id: &str) -> &FilterPreset {
        self.get(id).unwrap_or(&self.presets[0])
    }

    pub fn identity(&self) -> &FilterPreset {
        &self.presets[0]
    }
}
