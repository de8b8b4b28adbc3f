//! Loader for the line-oriented `.param` text format.
//!
//! One `key=value` pair per line; `#` starts a comment line. Repeatable
//! keys (`charge <n>`, `partition`) accumulate; everything else is
//! last-one-wins. Parse failures carry the 1-based line number of the
//! offending line.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::{
    AdditiveScorer, Enzyme, Partition, Protocol, RankScorer, SpecDataType, Tolerance,
};

/// Failures while reading or parsing one `.param` file.
#[derive(Error, Debug)]
pub enum ParamError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("missing required key `{0}`")]
    Missing(&'static str),
}

fn parse_err(line: usize, message: impl Into<String>) -> ParamError {
    ParamError::Parse {
        line,
        message: message.into(),
    }
}

/// Reads and parses one `.param` file, recording its path on the model.
pub fn load_params(path: &Path) -> Result<RankScorer, ParamError> {
    let text = std::fs::read_to_string(path)?;
    let mut scorer = parse_params(&text)?;
    scorer.source_path = path.to_owned();
    Ok(scorer)
}

/// Parses `.param` text into a scorer model.
pub fn parse_params(text: &str) -> Result<RankScorer, ParamError> {
    let mut method = None;
    let mut instrument = None;
    let mut enzyme = None;
    let mut protocol = None;
    let mut mme = None;
    let mut deconvolution: Option<(bool, f64)> = None;
    let mut segments = None;
    let mut comment = None;
    let mut charge_histogram = BTreeMap::new();
    let mut partitions = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once('=') else {
            return Err(parse_err(line, format!("expected `key=value`, got `{trimmed}`")));
        };
        let key = key.trim();
        let value = value.trim();

        if let Some(charge) = key.strip_prefix("charge ") {
            let charge = charge
                .trim()
                .parse::<i32>()
                .map_err(|e| parse_err(line, format!("bad charge `{charge}`: {e}")))?;
            let count = value
                .parse::<u32>()
                .map_err(|e| parse_err(line, format!("bad spectrum count `{value}`: {e}")))?;
            charge_histogram.insert(charge, count);
            continue;
        }

        match key {
            "method" => {
                method = Some(value.parse().map_err(|e| parse_err(line, format!("{e}")))?);
            }
            "instrument" => {
                instrument = Some(value.parse().map_err(|e| parse_err(line, format!("{e}")))?);
            }
            "enzyme" => {
                enzyme = Some(Enzyme {
                    name: value.to_owned(),
                });
            }
            "protocol" => {
                let (name, description) = value.split_once(':').unwrap_or((value, ""));
                protocol = Some(Protocol {
                    name: name.trim().to_owned(),
                    description: description.trim().to_owned(),
                });
            }
            "mme" => {
                let mut parts = value.split_whitespace();
                mme = match (parts.next(), parts.next(), parts.next()) {
                    (Some(magnitude), Some(unit), None) => {
                        let value = magnitude.parse::<f64>().map_err(|e| {
                            parse_err(line, format!("bad tolerance `{magnitude}`: {e}"))
                        })?;
                        let unit = unit.parse().map_err(|e| parse_err(line, format!("{e}")))?;
                        Some(Tolerance { value, unit })
                    }
                    _ => return Err(parse_err(line, "expected `mme=<value> <unit>`")),
                };
            }
            "deconvolution" => {
                let mut parts = value.split_whitespace();
                deconvolution = match (parts.next(), parts.next(), parts.next()) {
                    (Some(apply), Some(tolerance), None) => {
                        let apply = apply.parse::<bool>().map_err(|e| {
                            parse_err(line, format!("bad deconvolution flag `{apply}`: {e}"))
                        })?;
                        let tolerance = tolerance.parse::<f64>().map_err(|e| {
                            parse_err(line, format!("bad error tolerance `{tolerance}`: {e}"))
                        })?;
                        Some((apply, tolerance))
                    }
                    _ => return Err(parse_err(line, "expected `deconvolution=<bool> <tolerance>`")),
                };
            }
            "segments" => {
                segments = Some(value.parse::<usize>().map_err(|e| {
                    parse_err(line, format!("bad segment count `{value}`: {e}"))
                })?);
            }
            "partition" => {
                let parts: Vec<&str> = value.split_whitespace().collect();
                let [charge, parent_mass, seg_index] = parts.as_slice() else {
                    return Err(parse_err(
                        line,
                        "expected `partition=<charge> <parent-mass> <seg-index>`",
                    ));
                };
                partitions.push(Partition {
                    charge: charge
                        .parse()
                        .map_err(|e| parse_err(line, format!("bad charge `{charge}`: {e}")))?,
                    parent_mass: parent_mass.parse().map_err(|e| {
                        parse_err(line, format!("bad parent mass `{parent_mass}`: {e}"))
                    })?,
                    seg_index: seg_index.parse().map_err(|e| {
                        parse_err(line, format!("bad segment index `{seg_index}`: {e}"))
                    })?,
                });
            }
            "comment" => comment = Some(value.to_owned()),
            other => return Err(parse_err(line, format!("unknown key `{other}`"))),
        }
    }

    let (apply_deconvolution, deconvolution_error_tolerance) = deconvolution.unwrap_or((false, 0.0));
    Ok(RankScorer {
        base: AdditiveScorer {
            data_type: SpecDataType {
                method: method.ok_or(ParamError::Missing("method"))?,
                instrument: instrument.ok_or(ParamError::Missing("instrument"))?,
                enzyme: enzyme.ok_or(ParamError::Missing("enzyme"))?,
                protocol,
            },
            mme: mme.ok_or(ParamError::Missing("mme"))?,
            apply_deconvolution,
            deconvolution_error_tolerance,
        },
        charge_histogram,
        partitions,
        num_segments: segments.ok_or(ParamError::Missing("segments"))?,
        comment,
        source_path: PathBuf::new(),
    })
}
