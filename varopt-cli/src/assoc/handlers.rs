use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::Serialize;

use varopt_assoc::{
    AssociationTest, CaseControl, TestResult, mann_whitney_u, student_t, two_proportion_z,
};

use crate::output::write_json;

#[derive(Serialize, Debug, PartialEq)]
pub struct AssocReport {
    test: AssociationTest,
    statistic: f64,
    p_value: f64,
}

pub fn run_assoc(matches: &ArgMatches) -> Result<()> {
    let report = build_assoc_report(matches)?;
    write_json(&report, matches.get_one::<String>("output"))
}

pub fn build_assoc_report(matches: &ArgMatches) -> Result<AssocReport> {
    let test = matches
        .get_one::<String>("test")
        .expect("--test is required");
    let case = matches
        .get_one::<String>("case")
        .expect("--case is required");
    let control = matches
        .get_one::<String>("control")
        .expect("--control is required");

    let test = match AssociationTest::from_str(test) {
        Ok(test) => test,
        Err(_err) => anyhow::bail!("Unknown association test supplied: {}", test),
    };

    let TestResult { statistic, p_value } = match test {
        AssociationTest::StudentT => student_t(&CaseControl::new(
            parse_values(case).context("Invalid --case values")?,
            parse_values(control).context("Invalid --control values")?,
        ))?,
        AssociationTest::MannWhitneyU => mann_whitney_u(&CaseControl::new(
            parse_values(case).context("Invalid --case values")?,
            parse_values(control).context("Invalid --control values")?,
        ))?,
        AssociationTest::Z => two_proportion_z(&CaseControl::new(
            parse_proportion(case).context("Invalid --case proportion")?,
            parse_proportion(control).context("Invalid --control proportion")?,
        ))?,
    };

    Ok(AssocReport {
        test,
        statistic,
        p_value,
    })
}

fn parse_values(list: &str) -> Result<Vec<f64>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .with_context(|| format!("'{}' is not a number", s))
        })
        .collect()
}

fn parse_proportion(pair: &str) -> Result<(u64, u64)> {
    let (successes, trials) = pair
        .split_once(',')
        .with_context(|| format!("expected successes,trials but got '{}'", pair))?;

    Ok((
        successes.trim().parse().context("successes must be an integer")?,
        trials.trim().parse().context("trials must be an integer")?,
    ))
}
