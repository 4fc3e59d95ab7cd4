use clap::{Arg, Command, arg};

use varopt_core::consts::DEFAULT_ANNOTATION;

pub const BINS_CMD: &str = "bins";

pub fn create_bins_cli() -> Command {
    Command::new(BINS_CMD)
        .about("Bin the SNVs of a VCF by one annotation and report ti/tv and truth-set rates per bin.")
        .arg(
            arg!(--vcf <VCF>)
                .required(true)
                .help("Path to the input VCF (.vcf, .vcf.gz or .vcf.bgz)"),
        )
        .arg(
            arg!(--annotation <ANNOTATION>)
                .required(false)
                .default_value(DEFAULT_ANNOTATION)
                .help("QUAL or the key of a numeric INFO field to bin on"),
        )
        .arg(
            arg!(--truth <TRUTH>)
                .required(false)
                .help("VCF of true sites; calls at these positions count as truth-set calls"),
        )
        .arg(
            Arg::new("truth-flag")
                .long("truth-flag")
                .required(false)
                .help("INFO flag marking a call as part of the truth set"),
        )
        .arg(
            Arg::new("bin-width")
                .long("bin-width")
                .required(false)
                .default_value("1.0")
                .help("Width of one bin in annotation units"),
        )
        .arg(
            Arg::new("min-variants")
                .long("min-variants")
                .required(false)
                .default_value("100")
                .help("Bins with fewer novel + known variants are merged into a neighbour"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output JSON path (default: stdout)"),
        )
}
