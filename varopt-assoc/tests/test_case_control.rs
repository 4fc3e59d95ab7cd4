//! Case/control fixtures for the t, z and U statistics.

use pretty_assertions::assert_eq;

use varopt_assoc::{CaseControl, mann_whitney_u, student_t, two_proportion_z};

fn cohorts(case: &[i32], control: &[i32]) -> CaseControl<Vec<f64>> {
    let mut case_control = CaseControl::default();
    case_control.set_case(case.iter().map(|&x| x as f64).collect());
    case_control.set_control(control.iter().map(|&x| x as f64).collect());
    case_control
}

// ============================================================================
// t statistic
// ============================================================================

#[test]
fn test_t_statistic_p_values() {
    let small = cohorts(&[1, 1, 2, 3, 4], &[10, 10, 20, 30, 40]);
    assert!((student_t(&small).unwrap().p_value - 0.1702).abs() < 1e-2);

    let medium = cohorts(
        &[5, 6, 5, 2, 3, 8, 7, 12, 10, 6, 4, 2, 8, 7, 3],
        &[1, 6, 7, 2, 3, 3, 4, 1, 2, 5, 7, 3, 10, 3, 3, 2, 3],
    );
    assert!((student_t(&medium).unwrap().p_value - 0.5805).abs() < 1e-2);

    let uniform = cohorts(
        &[
            94, 25, 68, 4, 27, 51, 9, 10, 91, 61, 61, 37, 39, 44, 36, 27, 86, 33, 3, 38, 5, 6, 28,
            93, 30, 56, 81, 8, 40, 44,
        ],
        &[
            6, 64, 96, 85, 20, 74, 93, 18, 31, 20, 88, 38, 80, 50, 33, 81, 35, 8, 2, 69, 49, 6, 26,
            74, 79, 63, 63, 96, 45, 18,
        ],
    );
    assert!((student_t(&uniform).unwrap().p_value - 0.8229).abs() < 1e-4);
}

#[test]
fn test_t_statistic_value() {
    let shifted = cohorts(
        &[
            14, 8, 8, 17, 8, 12, 10, 10, 13, 9, 13, 9, 9, 12, 12, 11, 16, 12, 13, 16, 10, 13, 11,
            16, 13, 16, 11, 13, 9, 16, 16, 14, 9, 14, 17, 10, 15, 15, 9, 15, 17, 15, 17, 12, 10, 13,
            11, 14, 8, 14,
        ],
        &[
            7, 1, 4, 2, 3, 7, 8, 5, 5, 4, 10, 6, 4, 9, 2, 9, 9, 3, 3, 10, 1, 8, 9, 5, 3, 7, 2, 7, 10,
            9, 4, 9, 2, 10, 10, 3, 2, 3, 4, 4, 5, 10, 9, 4, 3, 5, 6, 10, 5, 10,
        ],
    );
    let result = student_t(&shifted).unwrap();

    assert!((result.statistic - 1.657989).abs() < 1e-6);
    assert!((result.p_value - 0.1006).abs() < 1e-4);
}

// ============================================================================
// z statistic
// ============================================================================

#[test]
fn test_z_statistic() {
    let first = two_proportion_z(&CaseControl::new((100, 500), (55, 300))).unwrap();
    assert!((first.statistic - 0.57742362050306).abs() < 2e-6);
    assert!((first.p_value - 0.56367).abs() < 2e-5);

    let second = two_proportion_z(&CaseControl::new((1020, 1800), (680, 1670))).unwrap();
    assert!((second.statistic - 9.3898178216531).abs() < 2e-6);
    assert!(second.p_value < 1e-15);

    let third = two_proportion_z(&CaseControl::new((20, 60), (30, 80))).unwrap();
    assert!((third.statistic - -0.50917511840392).abs() < 2e-6);
    assert!((third.p_value - 0.610643593).abs() < 2e-4);
}

// ============================================================================
// U statistic
// ============================================================================

#[test]
fn test_u_statistic_exact() {
    let first = mann_whitney_u(&cohorts(&[2, 4, 5, 6, 8], &[1, 3, 7, 9, 10, 11, 12, 13])).unwrap();
    assert_eq!(first.statistic, 10.0);
    assert!((first.p_value - 220.0 / 1287.0).abs() < 1e-9);

    let second = mann_whitney_u(&cohorts(
        &[1, 7, 8, 9, 10, 11, 15, 18],
        &[2, 3, 4, 5, 6, 12, 13, 14, 16, 17],
    ))
    .unwrap();
    assert_eq!(second.statistic, 37.0);
    assert!((second.p_value - 0.828557).abs() < 1e-6);

    let fourth = mann_whitney_u(&cohorts(&[1, 2, 4, 5, 6, 9], &[3, 8, 11, 12, 13])).unwrap();
    assert_eq!(fourth.statistic, 5.0);
    assert!((fourth.p_value - 38.0 / 462.0).abs() < 1e-9);
}

#[test]
fn test_u_statistic_with_ties() {
    let tied = mann_whitney_u(&cohorts(
        &[
            13, 14, 7, 18, 5, 2, 9, 17, 8, 10, 3, 15, 19, 6, 20, 16, 11, 4, 12, 1,
        ],
        &[
            29, 21, 14, 10, 12, 11, 28, 19, 18, 13, 7, 27, 20, 5, 17, 16, 9, 23, 22, 26,
        ],
    ))
    .unwrap();

    assert_eq!(tied.statistic, 95.5);
    assert!((tied.p_value - 0.0046773).abs() < 1e-6);
}
