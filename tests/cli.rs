use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn stdgrimmsim() -> Command {
    Command::cargo_bin("stdgrimmsim").unwrap()
}

fn load(path: &std::path::Path) -> tskit::TreeSequence {
    tskit::TreeSequence::load(path.to_str().unwrap()).unwrap()
}

#[test]
fn test_single_population_model_yields_sample_nodes() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("zweberg.trees");

    // default engine options
    stdgrimmsim()
        .arg("-q")
        .args(["ZweBerg", "BlackForest:5", "-d", "BlackForest_1D12"])
        .args(["-c", "1", "--right", "50000", "-s", "13", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let ts = load(&out);
    assert_eq!(ts.num_samples().as_usize(), 10);
    assert_eq!(ts.populations().num_rows().as_usize(), 1);
    assert_eq!(ts.provenances().num_rows().as_usize(), 2);
}

#[test]
fn test_haploid_mitogenome_contig() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("mito.trees");

    stdgrimmsim()
        .arg("-q")
        .args(["ZweBerg", "BlackForest:3", "-d", "BlackForest_1D12"])
        .args(["-c", "mountain_mitogenome", "-s", "3", "-o"])
        .arg(&out)
        .assert()
        .success();

    assert_eq!(load(&out).num_samples().as_usize(), 3);
}

#[test]
fn test_provenance_records_command_line() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("prov.trees");
    let args = [
        "-q",
        "--wf-scaling-factor",
        "2000",
        "ZweBerg",
        "pop_0:2",
        "-L",
        "5000",
        "-s",
        "4",
        "-o",
        out.to_str().unwrap(),
    ];

    stdgrimmsim().args(args).assert().success();

    let ts = load(&out);
    let last = ts.provenances().iter().last().unwrap();
    let record: serde_json::Value = serde_json::from_str(&last.record).unwrap();
    assert_eq!(record["software"]["name"], "stdgrimmsim");
    assert_eq!(record["parameters"]["args"], serde_json::json!(args));
}

#[test]
fn test_two_population_model() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("harz.trees");

    stdgrimmsim()
        .args(["-q", "--wf-scaling-factor", "1000"])
        .args(["ZweBerg", "Harz:3", "BlackForest:2", "-d", "HarzBlackForest_2D12"])
        .args(["-c", "2", "--left", "1000", "--right", "21000", "-s", "5", "-o"])
        .arg(&out)
        .assert()
        .success();

    let ts = load(&out);
    assert_eq!(ts.num_samples().as_usize(), 10);
    assert_eq!(ts.populations().num_rows().as_usize(), 2);
}

#[test]
fn test_same_seed_same_genealogy() {
    let temp = tempdir().unwrap();
    let run = |name: &str| {
        let out = temp.path().join(name);
        stdgrimmsim()
            .args(["-q", "--wf-scaling-factor", "2000", "ZweBerg", "pop_0:4"])
            .args(["-L", "20000", "-s", "99", "-o"])
            .arg(&out)
            .assert()
            .success();
        load(&out)
    };
    let a = run("a.trees");
    let b = run("b.trees");
    assert_eq!(a.num_samples().as_usize(), 8);
    assert_eq!(a.edges().num_rows(), b.edges().num_rows());
    assert_eq!(a.sites().num_rows(), b.sites().num_rows());
}

#[test]
fn test_stdout_matches_output_file() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("file.trees");
    let piped = temp.path().join("piped.trees");
    let common = ["-q", "--wf-scaling-factor", "2000", "ZweBerg", "pop_0:3", "-L", "20000", "-s", "21"];

    stdgrimmsim().args(common).arg("-o").arg(&file).assert().success();
    let output = stdgrimmsim().args(common).output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.starts_with(b"\x89KAS"));
    std::fs::write(&piped, &output.stdout).unwrap();

    let a = load(&file).dump_tables().unwrap();
    let b = load(&piped).dump_tables().unwrap();
    assert!(a.equals(&b, tskit::TableEqualityOptions::IGNORE_PROVENANCE));
    assert_eq!(a.provenances().num_rows(), b.provenances().num_rows());
}

#[test]
fn test_dry_run_prints_citations_only() {
    stdgrimmsim()
        .args(["ZweBerg", "BlackForest:2", "-d", "BlackForest_1D12", "-D"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "If you use this simulation in published work, please cite:",
        ))
        .stderr(predicate::str::contains("10.7554/eLife.54967"));
}

#[test]
fn test_verbose_dry_run_logs_rates() {
    stdgrimmsim()
        .args(["-v", "ZweBerg", "BlackForest:2", "-d", "BlackForest_1D12", "-D"])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO: Mean recombination rate"));
}

#[test]
fn test_legacy_sample_counts_warn() {
    stdgrimmsim()
        .args(["ZweBerg", "4", "-D"])
        .assert()
        .success()
        .stderr(predicate::str::contains("WARNING: DeprecatedFeatureWarning"));
}

#[test]
fn test_help_models_lists_catalog() {
    stdgrimmsim()
        .args(["ZweBerg", "--help-models"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BlackForest_1D12"))
        .stdout(predicate::str::contains("HarzBlackForest_2D12"));
}

#[test]
fn test_unknown_model_is_reported() {
    stdgrimmsim()
        .args(["ZweBerg", "BlackForest:2", "-d", "XXX"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with(
            "stdgrimmsim: error: DemographicModel 'ZweBerg/XXX' not in catalog (",
        ));
}

#[test]
fn test_unknown_species_is_rejected() {
    stdgrimmsim()
        .args(["XXX", "pop_0:2"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with(
            "stdgrimmsim: error: Species 'XXX' not in catalog (AlpNac, AscPut, ",
        ))
        .stderr(predicate::str::contains("ZweBerg)"));
}

#[test]
fn test_bad_sample_specs() {
    stdgrimmsim()
        .args(["ZweBerg", "BlackForest:2", "BlackForest:3", "-d", "BlackForest_1D12", "-D"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("BlackForest specified more than once"));

    stdgrimmsim()
        .args(["ZweBerg", "BlackForest", "-d", "BlackForest_1D12", "-D"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Sample specification must be in the form <population_name>:<number of samples>",
        ));

    stdgrimmsim()
        .args(["ZweBerg", "1", "1", "1", "-d", "HarzBlackForest_2D12", "-D"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot sample from more than 2 populations"));
}

#[test]
fn test_unknown_genetic_map_and_dfe() {
    stdgrimmsim()
        .args(["ZweBerg", "pop_0:2", "-g", "NoSuchMap", "-D"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GeneticMap 'ZweBerg/NoSuchMap' not in catalog"));

    stdgrimmsim()
        .args(["ZweBerg", "pop_0:2", "--dfe", "Gamma", "-D"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("DFE 'ZweBerg/Gamma' not in catalog"));
}

#[test]
fn test_download_with_nothing_to_fetch() {
    let temp = tempdir().unwrap();
    stdgrimmsim()
        .arg("-c")
        .arg(temp.path())
        .args(["download-genetic-maps", "ZweBerg"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No genetic maps to download"));
}

#[test]
fn test_docs_binary_writes_pages() {
    let temp = tempdir().unwrap();
    Command::cargo_bin("stdgrimmsim-docs")
        .unwrap()
        .args(["ZweBerg", "-o"])
        .arg(temp.path())
        .assert()
        .success();
    let page = std::fs::read_to_string(temp.path().join("zweberg.rst")).unwrap();
    assert!(page.contains("BlackForest_1D12"));
}
