//! The ionstat scoring model.
//!
//! A rank scorer extends an additive scorer: the additive level carries
//! the spectrum data type and mass-error settings, the rank level adds
//! the charge histogram and mass partitions. The embedding is declared
//! with `#[encodable(base)]`, so an encoded scorer carries the base's
//! fields inline and both type names in its lineage.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

use jsonizer_derive::Encodable;
use thiserror::Error;

/// A token that does not name any constant of the expected enumeration.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown {kind} `{token}`")]
pub struct ParseSymbolError {
    pub kind: &'static str,
    pub token: String,
}

/// Fragmentation method the spectra were acquired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encodable)]
pub enum ActivationMethod {
    Cid,
    Etd,
    Hcd,
    Uvpd,
}

impl FromStr for ActivationMethod {
    type Err = ParseSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cid" => Ok(Self::Cid),
            "etd" => Ok(Self::Etd),
            "hcd" => Ok(Self::Hcd),
            "uvpd" => Ok(Self::Uvpd),
            _ => Err(ParseSymbolError {
                kind: "activation method",
                token: s.to_owned(),
            }),
        }
    }
}

/// Instrument class the fragment tolerances were trained for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encodable)]
pub enum InstrumentType {
    LowRes,
    HighRes,
    Tof,
    QExactive,
}

impl FromStr for InstrumentType {
    type Err = ParseSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lowres" => Ok(Self::LowRes),
            "highres" => Ok(Self::HighRes),
            "tof" => Ok(Self::Tof),
            "qexactive" => Ok(Self::QExactive),
            _ => Err(ParseSymbolError {
                kind: "instrument type",
                token: s.to_owned(),
            }),
        }
    }
}

/// Unit of a mass tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encodable)]
pub enum ToleranceUnit {
    Da,
    Ppm,
}

impl FromStr for ToleranceUnit {
    type Err = ParseSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "da" => Ok(Self::Da),
            "ppm" => Ok(Self::Ppm),
            _ => Err(ParseSymbolError {
                kind: "tolerance unit",
                token: s.to_owned(),
            }),
        }
    }
}

/// A mass tolerance: magnitude plus unit.
#[derive(Debug, Clone, PartialEq, Encodable)]
pub struct Tolerance {
    pub value: f64,
    pub unit: ToleranceUnit,
}

#[derive(Debug, Clone, PartialEq, Encodable)]
pub struct Enzyme {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Encodable)]
pub struct Protocol {
    pub name: String,
    pub description: String,
}

/// What kind of spectra a scorer was trained on.
#[derive(Debug, Clone, PartialEq, Encodable)]
pub struct SpecDataType {
    pub method: ActivationMethod,
    pub instrument: InstrumentType,
    pub enzyme: Enzyme,
    pub protocol: Option<Protocol>,
}

/// One precursor partition: spectra of this charge around this parent
/// mass share a rank table segment.
#[derive(Debug, Clone, PartialEq, Encodable)]
pub struct Partition {
    pub charge: i32,
    pub parent_mass: f64,
    pub seg_index: usize,
}

/// Base scorer level: acquisition context and mass-error settings.
#[derive(Debug, Clone, PartialEq, Encodable)]
pub struct AdditiveScorer {
    pub data_type: SpecDataType,
    /// Maximum mass error of a precursor match.
    pub mme: Tolerance,
    pub apply_deconvolution: bool,
    pub deconvolution_error_tolerance: f64,
}

/// Rank scorer level: the trained statistics on top of the additive base.
#[derive(Debug, Clone, PartialEq, Encodable)]
pub struct RankScorer {
    #[encodable(base)]
    pub base: AdditiveScorer,
    /// Spectrum count per precursor charge.
    pub charge_histogram: BTreeMap<i32, u32>,
    pub partitions: Vec<Partition>,
    pub num_segments: usize,
    pub comment: Option<String>,
    /// Where this scorer was loaded from; provenance only, not part of
    /// the document.
    #[encodable(skip)]
    pub source_path: PathBuf,
}
