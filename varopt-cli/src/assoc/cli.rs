use clap::{Command, arg};

pub const ASSOC_CMD: &str = "assoc";

pub fn create_assoc_cli() -> Command {
    Command::new(ASSOC_CMD)
        .about("Run a case/control association test.")
        .arg_required_else_help(true)
        .arg(
            arg!(--test <TEST>)
                .required(true)
                .help("Which test to run: t, z or u (Mann-Whitney)"),
        )
        .arg(
            arg!(--case <CASE>)
                .required(true)
                .allow_hyphen_values(true)
                .help("Comma-separated case values; for z: successes,trials"),
        )
        .arg(
            arg!(--control <CONTROL>)
                .required(true)
                .allow_hyphen_values(true)
                .help("Comma-separated control values; for z: successes,trials"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output JSON path (default: stdout)"),
        )
}
