//! End-to-end checks from an RFC 3339 string to sidereal time.

use griha_time::{TimeError, TimeScales, gmst_deg, local_sidereal_time_deg, parse_utc};

#[test]
fn tokyo_millennium_scales() {
    let t = parse_utc("2000-01-01T00:00:00Z").unwrap();
    let s = TimeScales::from_utc(&t);
    assert!((s.jd_utc - 2_451_544.5).abs() < 1e-9, "JD = {}", s.jd_utc);
    assert!((s.delta_t_s - 63.8738).abs() < 1e-3, "ΔT = {}", s.delta_t_s);
}

#[test]
fn offset_instant_equals_zulu_instant() {
    let a = parse_utc("1970-03-26T19:00:00+09:00").unwrap();
    let b = parse_utc("1970-03-26T10:00:00Z").unwrap();
    assert_eq!(TimeScales::from_utc(&a), TimeScales::from_utc(&b));
    assert!((TimeScales::from_utc(&a).jd_utc - 2_440_671.916_667).abs() < 1e-6);
}

#[test]
fn local_sidereal_time_east_of_greenwich() {
    let t = parse_utc("2000-01-01T00:00:00Z").unwrap();
    let s = TimeScales::from_utc(&t);
    let lst = local_sidereal_time_deg(gmst_deg(s.jd_utc), 139.6917);
    // GMST 99.9678° + 139.6917° = 239.6595°
    assert!((lst - 239.6595).abs() < 0.001, "LST = {lst}");
}

#[test]
fn naive_and_malformed_inputs() {
    assert!(matches!(
        parse_utc("2000-01-01 00:00:00"),
        Err(TimeError::MissingOffset(_))
    ));
    assert!(matches!(parse_utc(""), Err(TimeError::Malformed { .. })));
}
