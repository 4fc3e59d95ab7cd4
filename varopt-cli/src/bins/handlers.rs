use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use serde::Serialize;

use varopt_core::histogram::{AnnotationHistogram, BinSummary, BinningConfig};
use varopt_core::vcf::{VcfOptions, read_annotated_variants, read_truth_sites};

use crate::output::write_json;

#[derive(Serialize, Debug)]
pub struct BinsReport {
    vcf: String,
    options: VcfOptions,
    binning: BinningConfig,
    records: usize,
    skipped_non_snv: usize,
    skipped_missing_annotation: usize,
    bins: Vec<BinSummary>,
}

pub fn run_bins(matches: &ArgMatches) -> Result<()> {
    let report = build_bins_report(matches)?;
    write_json(&report, matches.get_one::<String>("output"))
}

pub fn build_bins_report(matches: &ArgMatches) -> Result<BinsReport> {
    let vcf_path = matches
        .get_one::<String>("vcf")
        .expect("--vcf is required");

    let annotation = matches
        .get_one::<String>("annotation")
        .expect("--annotation has a default");

    let bin_width: f64 = matches
        .get_one::<String>("bin-width")
        .expect("--bin-width has a default")
        .parse()
        .context("--bin-width must be a number")?;

    let min_variants_per_bin: u32 = matches
        .get_one::<String>("min-variants")
        .expect("--min-variants has a default")
        .parse()
        .context("--min-variants must be a non-negative integer")?;

    let truth_sites = match matches.get_one::<String>("truth") {
        Some(p) => Some(
            read_truth_sites(p).with_context(|| format!("Failed to load truth VCF {}", p))?,
        ),
        None => None,
    };

    let options = VcfOptions {
        annotation: annotation.clone(),
        truth_flag: matches.get_one::<String>("truth-flag").cloned(),
        truth_sites,
    };

    let binning = BinningConfig {
        bin_width,
        min_variants_per_bin,
    };

    let scan = read_annotated_variants(vcf_path, &options)
        .with_context(|| format!("Failed to read VCF {}", vcf_path))?;

    let mut histogram = AnnotationHistogram::new(binning.clone())?;
    for variant in &scan.variants {
        histogram.add(variant)?;
    }
    histogram.merge_sparse_bins()?;

    info!(
        "Binned {} SNVs on {} into {} bins",
        scan.variants.len(),
        options.annotation,
        histogram.len()
    );

    Ok(BinsReport {
        vcf: vcf_path.clone(),
        options,
        binning,
        records: scan.records,
        skipped_non_snv: scan.skipped_non_snv,
        skipped_missing_annotation: scan.skipped_missing_annotation,
        bins: histogram.summaries()?,
    })
}
