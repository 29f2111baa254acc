//! End-to-end tests of the genome-matcher binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn fasta_file(records: &[(&str, &str)]) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".fa").expect("Failed to create temp file");
    for (name, sequence) in records {
        writeln!(file, ">{name}\n{sequence}").expect("Failed to write FASTA");
    }
    file.flush().expect("Failed to flush FASTA");
    file
}

fn two_genome_library() -> NamedTempFile {
    fasta_file(&[("G1", "ACTGACTG"), ("G2", "ACTGACTT")])
}

fn genome_matcher() -> Command {
    Command::cargo_bin("genome-matcher").expect("binary should be built")
}

#[test]
fn search_reports_exact_matches_as_text() {
    let library = two_genome_library();

    genome_matcher()
        .arg("search")
        .arg(library.path())
        .args(["-k", "4", "--fragment", "ACTGACTG", "-m", "6", "--exact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 match(es) for ACTGACTG"))
        .stdout(predicate::str::contains("#1 G1: length 8 at position 0"))
        .stdout(predicate::str::contains("#2 G2: length 7 at position 0"));
}

#[test]
fn search_tolerates_one_substitution_by_default() {
    let library = two_genome_library();

    genome_matcher()
        .arg("search")
        .arg(library.path())
        .args(["-k", "4", "--fragment", "actgactg", "-m", "6"])
        .args(["--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("genome\tposition\tlength\n"))
        .stdout(predicate::str::contains("G1\t0\t8\n"))
        .stdout(predicate::str::contains("G2\t0\t8\n"));
}

#[test]
fn search_json_output() {
    let library = two_genome_library();

    let output = genome_matcher()
        .arg("search")
        .arg(library.path())
        .args(["-k", "4", "--fragment", "ACTGACTG", "--exact", "--format", "json"])
        .output()
        .expect("Failed to run binary");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["fragment"], "ACTGACTG");
    assert_eq!(json["minimum_length"], 8);
    assert_eq!(json["exact_match_only"], true);

    // G2 only covers 7 exact bases, below the default minimum of the fragment length
    let matches = json["matches"].as_array().expect("matches should be an array");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["genome_name"], "G1");
    assert_eq!(matches[0]["position"], 0);
    assert_eq!(matches[0]["length"], 8);
}

#[test]
fn search_without_matches() {
    let library = two_genome_library();

    genome_matcher()
        .arg("search")
        .arg(library.path())
        .args(["-k", "4", "--fragment", "GGGGGGGG"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No matches found."));
}

#[test]
fn related_ranks_by_percent_then_name() {
    let library = fasta_file(&[
        ("C", "AAAATCCCCTGGGGTTTT"),
        ("B", "AAAAGCCCCGTTTT"),
        ("A", "GGGGTAAACTTTT"),
    ]);
    let query = fasta_file(&[("query", "AAAACCCCGGGGTTTTAAAC")]);

    genome_matcher()
        .arg("related")
        .arg(library.path())
        .arg("--query")
        .arg(query.path())
        .args(["-k", "4", "-l", "4", "-t", "0", "--exact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Query: query (20 bases, 5 chunks)"))
        .stdout(predicate::str::is_match(
            r"(?s)#1 C 80\.00% \(HIGH\).*#2 A 60\.00% \(MEDIUM\).*#3 B 60\.00% \(MEDIUM\)",
        )
        .expect("valid regex"));
}

#[test]
fn related_applies_threshold() {
    let library = fasta_file(&[
        ("C", "AAAATCCCCTGGGGTTTT"),
        ("B", "AAAAGCCCCGTTTT"),
        ("A", "GGGGTAAACTTTT"),
    ]);
    let query = fasta_file(&[("query", "AAAACCCCGGGGTTTTAAAC")]);

    genome_matcher()
        .arg("related")
        .arg(library.path())
        .arg("--query")
        .arg(query.path())
        .args(["-k", "4", "-l", "4", "-t", "70", "--exact", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "query\tgenome\tpercent_match\trelatedness\nquery\tC\t80.0000\tHigh\n",
        ));
}

#[test]
fn related_reports_queries_without_relatives() {
    let library = two_genome_library();
    let query = fasta_file(&[("lonely", "GGGGGGGGGGGGGGGG")]);

    genome_matcher()
        .arg("related")
        .arg(library.path())
        .arg("--query")
        .arg(query.path())
        .args(["-k", "4", "-l", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Query: lonely (16 bases, 2 chunks)"))
        .stdout(predicate::str::contains("No related genomes found."));
}

#[test]
fn stats_summarizes_the_index() {
    let library = two_genome_library();

    genome_matcher()
        .arg("stats")
        .arg(library.path())
        .args(["-k", "4", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "genome_count\ttotal_bases\tminimum_search_length\tanchor_count\tnode_count",
        ))
        .stdout(predicate::str::contains("2\t16\t4\t10\t"));
}

#[test]
fn missing_library_file_fails() {
    genome_matcher()
        .args(["stats", "/nonexistent/library.fa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load genomes from"));
}

#[test]
fn invalid_base_fails_the_load() {
    let library = fasta_file(&[("bad", "ACGTXACGT")]);

    genome_matcher()
        .arg("stats")
        .arg(library.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load genomes from"));
}
