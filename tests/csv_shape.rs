use std::fs;
use std::process::Command;

fn bin() -> Command { Command::new(env!("CARGO_BIN_EXE_ycurve")) }

#[test]
fn smooth_curve_csv_has_one_header() {
    let out = "out_shape_test";
    let status = bin()
        .args(["--step-size", "1.0", "--out-dir", out, "--no-draw"])
        .status()
        .expect("run ycurve");
    assert!(status.success());

    let s = fs::read_to_string(format!("{out}/smooth_curve.csv")).unwrap();
    let header_count = s.lines().filter(|l| l.starts_with("label,")).count();
    assert_eq!(header_count, 1, "CSV must have exactly one header row");
    assert_eq!(s.lines().find(|l| l.starts_with("label,")).unwrap(), "label,maturity,yield");

    let rows: Vec<&str> = s
        .lines()
        .filter(|l| !l.is_empty() && !l.starts_with('#') && !l.starts_with("label,"))
        .collect();
    assert_eq!(rows.len(), 9);
    assert!(rows[0].starts_with("2.0Y Interpolated,2"));
    assert!(rows[8].starts_with("10.0Y Interpolated,10"));

    // file round-trips through the loader
    let curve = ycurve::curves::load_curve_csv(format!("{out}/smooth_curve.csv")).unwrap();
    assert_eq!(curve.len(), 9);

    let _ = fs::remove_dir_all(out);
}

#[test]
fn text_report_matches_sample_values() {
    let out = "out_text_test";
    let output = bin()
        .args(["--out-dir", out, "--no-draw"])
        .output()
        .expect("run ycurve");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();

    assert!(text.contains("2Y Bond - 2Y: 1.80%"));
    assert!(text.contains("Average Yield: 2.17%"));
    assert!(text.contains("3.5Y yield (interpolated): 2.00%"));
    assert!(text.contains("1Y yield (interpolated): 1.67%"));
    assert!(text.contains("15Y yield (interpolated): 2.80%"));
    assert!(text.contains("7.5Y: 2.35%"));
    assert!(text.contains("10.0Y: 2.50%"));

    let _ = fs::remove_dir_all(out);
}

#[test]
fn json_output_from_csv_curve() {
    let out = "out_json_test";
    fs::create_dir_all(out).unwrap();
    let input = format!("{out}/input.csv");
    fs::write(&input, "label,maturity,yield\n10Y,10,2.5\n2Y,2,1.8\n5Y,5,2.2\n").unwrap();

    let output = bin()
        .args(["--curve", &input, "--at", "12,0.5,12", "--step-size", "3", "--out-dir", out, "--no-draw", "--json"])
        .output()
        .expect("run ycurve");
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let queries = v["queries"].as_array().unwrap();
    assert_eq!(queries.len(), 2);
    assert_eq!(queries[0]["maturity"].as_f64().unwrap(), 12.0);
    assert!((queries[0]["yield"].as_f64().unwrap() - 2.62).abs() < 1e-9);
    assert!((queries[1]["yield"].as_f64().unwrap() - 1.6).abs() < 1e-9);

    let smooth: Vec<f64> = v["smooth_curve"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["maturity"].as_f64().unwrap())
        .collect();
    assert_eq!(smooth, vec![2.0, 5.0, 8.0, 10.0]);
    assert_eq!(v["curve"][0]["label"], "10Y");
    assert_eq!(v["report"]["endpoints_ok"], true);

    let _ = fs::remove_dir_all(out);
}

#[test]
fn invalid_step_size_fails() {
    let out = "out_invalid_test";
    let status = bin()
        .args(["--step-size", "0", "--out-dir", out, "--no-draw"])
        .status()
        .expect("run ycurve");
    assert!(!status.success());

    let one_point = format!("{out}_one.csv");
    fs::write(&one_point, "label,maturity,yield\n5Y,5,2.2\n").unwrap();
    let status = bin()
        .args(["--curve", &one_point, "--out-dir", out, "--no-draw"])
        .status()
        .expect("run ycurve");
    assert!(!status.success());

    let _ = fs::remove_file(&one_point);
    let _ = fs::remove_dir_all(out);
}
