//! Tests for the office demo's argument handling and file output.

#[cfg(test)]
mod args_tests {
    use std::path::PathBuf;

    use clap::Parser;

    use crate::Args;

    #[test]
    fn defaults_without_arguments() {
        let args = Args::try_parse_from(["office"]).unwrap();
        assert_eq!(args.params, None);
        assert_eq!(args.output_dir, PathBuf::from("output/office"));
    }

    #[test]
    fn positional_params_and_output() {
        let args = Args::try_parse_from(["office", "p.json", "out/a"]).unwrap();
        assert_eq!(args.params, Some(PathBuf::from("p.json")));
        assert_eq!(args.output_dir, PathBuf::from("out/a"));
    }

    #[test]
    fn extra_argument_rejected() {
        assert!(Args::try_parse_from(["office", "a", "b", "c"]).is_err());
    }
}

#[cfg(test)]
mod run_tests {
    use std::fs;

    use crate::{Args, run, write_frames};

    fn run_with(json: &str) -> (tempfile::TempDir, anyhow::Result<()>) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let params = dir.path().join("params.json");
        fs::write(&params, json).unwrap();
        let result = run(Args { params: Some(params), output_dir: dir.path().join("out") });
        (dir, result)
    }

    #[test]
    fn writes_csv_and_frames() {
        let (dir, result) = run_with(r#"{"population_size":4,"duration_ticks":3}"#);
        result.unwrap();

        let out = dir.path().join("out");
        for name in ["tick_summaries.csv", "interactions.csv", "roster.csv"] {
            assert!(out.join(name).exists(), "{name} missing");
        }
        let frames: Vec<Vec<Vec<u8>>> =
            serde_json::from_str(&fs::read_to_string(out.join("frames.json")).unwrap()).unwrap();
        assert_eq!(frames.len(), 3);
    }

    #[test]
    fn oversized_population_is_a_config_error() {
        let (dir, result) = run_with(r#"{"population_size":1000}"#);
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("exceeds the 12 desks"), "{msg}");
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn bad_json_reports_the_file() {
        let (_dir, result) = run_with("{not json");
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("parsing"), "{msg}");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn frame_write_failure_is_reported() {
        // Small enough to sit entirely in the write buffer until flushed.
        let frames = Vec::new();
        let err = write_frames(std::path::Path::new("/dev/full"), &frames).unwrap_err();
        assert!(format!("{err:#}").contains("/dev/full"));
    }
}
