//! End-to-end: VCF -> annotated variants -> annotation histogram

use std::fs::File;
use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use varopt_core::histogram::{AnnotationHistogram, BinningConfig};
use varopt_core::models::{Substitution, VariantSet};
use varopt_core::vcf::{VcfOptions, read_annotated_variants, read_truth_sites};
use varopt_core::VcfError;

const HEADER: &str = "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n";

fn calls_vcf() -> String {
    let mut vcf = String::from(HEADER);
    // low quality bin [0, 10)
    vcf.push_str("chr1\t100\t.\tA\tG\t5\tPASS\tMQ=20\n");
    vcf.push_str("chr1\t200\trs1\tC\tA\t7\tPASS\tMQ=21;TRUTH\n");
    // high quality bin [50, 60)
    vcf.push_str("chr1\t300\trs2\tC\tT\t55\tPASS\tMQ=60\n");
    vcf.push_str("chr1\t400\t.\tT\tC\t58\tPASS\tMQ=60\n");
    vcf.push_str("chr2\t500\t.\tG\tT\t51\tPASS\tMQ=59;TRUTH\n");
    // skipped: indel, multi-allelic, symbolic, no QUAL
    vcf.push_str("chr2\t600\t.\tGA\tG\t80\tPASS\tMQ=60\n");
    vcf.push_str("chr2\t700\t.\tG\tA,T\t80\tPASS\tMQ=60\n");
    vcf.push_str("chr2\t800\t.\tG\t<DEL>\t80\tPASS\tMQ=60\n");
    vcf.push_str("chr2\t900\t.\tG\tA\t.\tPASS\tMQ=60\n");
    vcf
}

#[test]
fn test_vcf_to_bins_end_to_end() {
    let dir = tempdir().unwrap();
    let vcf_path = dir.path().join("calls.vcf");
    std::fs::write(&vcf_path, calls_vcf()).unwrap();

    let options = VcfOptions {
        truth_flag: Some("TRUTH".to_string()),
        ..Default::default()
    };
    let scan = read_annotated_variants(&vcf_path, &options).unwrap();

    assert_eq!(scan.records, 9);
    assert_eq!(scan.variants.len(), 5);
    assert_eq!(scan.skipped_non_snv, 3);
    assert_eq!(scan.skipped_missing_annotation, 1);

    assert_eq!(scan.variants[0].substitution, Substitution::Transition);
    assert!(scan.variants[0].is_novel);
    assert!(!scan.variants[1].is_novel);
    assert!(scan.variants[1].is_true);

    let mut histogram = AnnotationHistogram::new(BinningConfig {
        bin_width: 10.0,
        min_variants_per_bin: 1,
    })
    .unwrap();
    for variant in &scan.variants {
        histogram.add(variant).unwrap();
    }
    histogram.merge_sparse_bins().unwrap();

    let summaries = histogram.summaries().unwrap();
    assert_eq!(summaries.len(), 2);

    let low = &summaries[0];
    assert_eq!(low.value, 0.0);
    assert_eq!(low.n_full, 2);
    assert_eq!(low.n_novel, 1);
    assert_eq!(low.n_known, 1);
    assert_eq!(low.ti_tv_full, 1.0);
    assert_eq!(low.true_positive_rate, 0.5);

    let high = &summaries[1];
    assert_eq!(high.value, 50.0);
    assert_eq!(high.n_full, 3);
    assert_eq!(high.ti_tv_full, 2.0);
    assert_eq!(high.ti_tv_novel, 1.0);
    assert_eq!(high.ti_tv_known, 0.0);
    assert_eq!(high.n_truth, 1);
}

#[test]
fn test_info_annotation_and_truth_sites_from_gzipped_vcf() {
    let dir = tempdir().unwrap();

    let vcf_path = dir.path().join("calls.vcf.gz");
    let mut encoder = GzEncoder::new(File::create(&vcf_path).unwrap(), Compression::default());
    encoder.write_all(calls_vcf().as_bytes()).unwrap();
    encoder.finish().unwrap();

    let truth_path = dir.path().join("truth.vcf");
    {
        let mut f = File::create(&truth_path).unwrap();
        write!(f, "{}", HEADER).unwrap();
        writeln!(f, "chr1\t400\t.\tT\tC\t.\tPASS\t.").unwrap();
        writeln!(f, "chr2\t500\t.\tG\tT\t.\tPASS\t.").unwrap();
    }

    let truth_sites = read_truth_sites(&truth_path).unwrap();
    assert_eq!(truth_sites.len(), 2);

    let options = VcfOptions {
        annotation: "MQ".to_string(),
        truth_flag: None,
        truth_sites: Some(truth_sites),
    };
    let scan = read_annotated_variants(&vcf_path, &options).unwrap();

    // the record without QUAL still has MQ
    assert_eq!(scan.variants.len(), 6);
    assert_eq!(scan.skipped_missing_annotation, 0);

    let values: Vec<f64> = scan.variants.iter().map(|v| v.value).collect();
    assert_eq!(values, vec![20.0, 21.0, 60.0, 60.0, 59.0, 60.0]);

    let truth: Vec<bool> = scan.variants.iter().map(|v| v.is_true).collect();
    assert_eq!(truth, vec![false, false, false, true, true, false]);

    let mut histogram = AnnotationHistogram::new(BinningConfig {
        bin_width: 50.0,
        min_variants_per_bin: 1,
    })
    .unwrap();
    for variant in &scan.variants {
        histogram.add(variant).unwrap();
    }

    let bins: Vec<_> = histogram.bins().collect();
    assert_eq!(bins.len(), 2);
    assert_eq!(bins[1].variant_count(VariantSet::Truth).unwrap(), 2);
}

#[test]
fn test_malformed_position_reports_line() {
    let dir = tempdir().unwrap();
    let vcf_path = dir.path().join("bad.vcf");
    std::fs::write(
        &vcf_path,
        format!("{}chr1\tone\t.\tA\tG\t5\tPASS\t.\n", HEADER),
    )
    .unwrap();

    let result = read_annotated_variants(&vcf_path, &VcfOptions::default());
    assert!(matches!(result, Err(VcfError::Parse { line: 3, .. })));
}
