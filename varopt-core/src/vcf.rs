//! VCF ingestion.
//!
//! Reads a VCF file (plain text or gzipped/bgzf) and reduces every biallelic
//! SNV to an [AnnotatedVariant]: the value of one annotation, the
//! substitution class, dbSNP novelty (empty `ID`) and truth-set membership.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ANNOTATION, NOVEL_ID};
use crate::errors::VcfError;
use crate::models::{AnnotatedVariant, Substitution};
use crate::utils::get_dynamic_reader;

/// What to pull out of each VCF record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VcfOptions {
    /// `QUAL` or the key of a numeric INFO field
    pub annotation: String,
    /// INFO flag marking a call as part of the truth set
    pub truth_flag: Option<String>,
    /// `chrom:pos` keys of known true sites
    #[serde(skip)]
    pub truth_sites: Option<HashSet<String>>,
}

impl Default for VcfOptions {
    fn default() -> Self {
        VcfOptions {
            annotation: DEFAULT_ANNOTATION.to_string(),
            truth_flag: None,
            truth_sites: None,
        }
    }
}

/// Variants read from a VCF file, with bookkeeping on what was left out.
#[derive(Debug, Clone, Default)]
pub struct VcfScan {
    pub variants: Vec<AnnotatedVariant>,
    /// Data lines seen
    pub records: usize,
    /// Indels, MNVs, symbolic and multi-allelic records
    pub skipped_non_snv: usize,
    /// SNVs without a value for the annotation
    pub skipped_missing_annotation: usize,
}

/// Key a site by chromosome and 1-based position.
pub fn site_key(chrom: &str, pos: u64) -> String {
    format!("{}:{}", chrom, pos)
}

///
/// Read the sites of a truth-set VCF as `chrom:pos` keys.
///
pub fn read_truth_sites<P: AsRef<Path>>(path: P) -> Result<HashSet<String>, VcfError> {
    let reader = get_dynamic_reader(path.as_ref())?;
    let mut sites = HashSet::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let mut fields = line.splitn(3, '\t');
        let chrom = fields.next().unwrap_or_default();
        let pos = parse_pos(fields.next(), idx + 1)?;
        sites.insert(site_key(chrom, pos));
    }

    info!(
        "Loaded {} truth sites from {}",
        sites.len(),
        path.as_ref().display()
    );

    Ok(sites)
}

///
/// Read all biallelic SNVs of a VCF file as annotated variants.
///
/// # Arguments
///
/// - path: path to the VCF, gzipped or not
/// - options: annotation to bin on and how truth-set membership is decided
///
pub fn read_annotated_variants<P: AsRef<Path>>(
    path: P,
    options: &VcfOptions,
) -> Result<VcfScan, VcfError> {
    let mut reader = get_dynamic_reader(path.as_ref())?;
    let mut scan = VcfScan::default();
    let mut line_buf = String::new();
    let mut line_number = 0;

    loop {
        line_buf.clear();
        if reader.read_line(&mut line_buf)? == 0 {
            break;
        }
        line_number += 1;

        let line = line_buf.trim_end_matches('\n').trim_end_matches('\r');
        if line.starts_with('#') || line.is_empty() {
            continue;
        }
        scan.records += 1;

        let fields: Vec<&str> = line.splitn(9, '\t').collect();
        if fields.len() < 8 {
            return Err(VcfError::Parse {
                line: line_number,
                message: format!("expected at least 8 columns, found {}", fields.len()),
            });
        }

        let chrom = fields[0];
        let pos = parse_pos(Some(fields[1]), line_number)?;
        let id = fields[2];
        let ref_allele = fields[3];
        let alt_allele = fields[4];
        let info = fields[7];

        let substitution = match Substitution::from_alleles(ref_allele, alt_allele) {
            Some(substitution) => substitution,
            None => {
                scan.skipped_non_snv += 1;
                continue;
            }
        };

        let value = match annotation_value(&options.annotation, fields[5], info, line_number)? {
            Some(value) => value,
            None => {
                scan.skipped_missing_annotation += 1;
                continue;
            }
        };

        let in_truth_sites = options
            .truth_sites
            .as_ref()
            .is_some_and(|sites| sites.contains(&site_key(chrom, pos)));
        let has_truth_flag = options
            .truth_flag
            .as_deref()
            .is_some_and(|flag| info_field(info, flag).is_some());

        scan.variants.push(AnnotatedVariant {
            value,
            substitution,
            is_novel: id == NOVEL_ID,
            is_true: in_truth_sites || has_truth_flag,
        });
    }

    info!(
        "Read {} SNVs out of {} records from {}",
        scan.variants.len(),
        scan.records,
        path.as_ref().display()
    );
    debug!(
        "Skipped {} non-SNV records and {} records without {}",
        scan.skipped_non_snv, scan.skipped_missing_annotation, options.annotation
    );

    Ok(scan)
}

fn parse_pos(field: Option<&str>, line: usize) -> Result<u64, VcfError> {
    let field = field.unwrap_or_default();
    field.parse::<u64>().map_err(|_| VcfError::Parse {
        line,
        message: format!("invalid POS field: '{}'", field),
    })
}

///
/// Value of an INFO entry: `Some("")` for a flag, `Some(value)` for
/// `key=value`, `None` if the key is absent.
///
fn info_field<'a>(info: &'a str, key: &str) -> Option<&'a str> {
    info.split(';').find_map(|entry| match entry.split_once('=') {
        Some((k, v)) if k == key => Some(v),
        None if entry == key => Some(""),
        _ => None,
    })
}

fn annotation_value(
    annotation: &str,
    qual: &str,
    info: &str,
    line: usize,
) -> Result<Option<f64>, VcfError> {
    let raw = if annotation.eq_ignore_ascii_case(DEFAULT_ANNOTATION) {
        Some(qual)
    } else {
        info_field(info, annotation)
    };

    let raw = match raw {
        None | Some(".") | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    let value = raw.parse::<f64>().map_err(|_| VcfError::Parse {
        line,
        message: format!("non-numeric {} value: '{}'", annotation, raw),
    })?;

    if !value.is_finite() {
        return Err(VcfError::Parse {
            line,
            message: format!("non-finite {} value: '{}'", annotation, raw),
        });
    }

    Ok(Some(value))
}
