// Composition tests: verifying that the pieces chain together correctly.
//
// These tests exercise the data flow between modules:
//   source -> vectorize -> rank -> pipeline -> CSV / JSON
// without network access. Filesystem tests use temporary directories.

use resumerank::config::Config;
use resumerank::output::csv::{render_csv, write_csv};
use resumerank::output::terminal;
use resumerank::pipeline::{screen, Limits};
use resumerank::source::{load_documents, SourceDocument};
use resumerank::vectorize::TfIdfVectorizer;
use resumerank::{rank, vectorize, RankError};

const JOB: &str = "python developer with five years experience";

fn vectorize_and_rank(reference: &str, candidates: &[&str]) -> resumerank::RankedResult {
    let corpus: Vec<&str> = std::iter::once(reference)
        .chain(candidates.iter().copied())
        .collect();
    let m = vectorize(&corpus).unwrap();
    rank(m.reference(), m.candidates()).unwrap()
}

// ============================================================
// Chain: vectorize -> rank
// ============================================================

#[test]
fn python_developer_scenario() {
    let ranked = vectorize_and_rank(
        JOB,
        &[
            "python developer",
            "java developer",
            "python developer with five years experience",
        ],
    );

    let order: Vec<usize> = ranked.iter().map(|s| s.index).collect();
    assert_eq!(order, vec![2, 0, 1]);

    assert!(
        (ranked[0].score - 1.0).abs() < 1e-9,
        "Exact match should score ~1.0, got {}",
        ranked[0].score
    );
    assert!(ranked[1].score > 0.0 && ranked[1].score < 1.0);
    assert!(ranked[2].score >= 0.0 && ranked[2].score < ranked[1].score);
}

#[test]
fn identical_text_scores_one() {
    let ranked = vectorize_and_rank("Senior Rust engineer", &["senior rust ENGINEER!"]);
    assert!((ranked[0].score - 1.0).abs() < 1e-9);
}

#[test]
fn disjoint_vocabularies_score_zero() {
    let ranked = vectorize_and_rank("rust engineer", &["watercolor painting", "jazz piano"]);
    assert!(ranked.iter().all(|s| s.score == 0.0));
}

#[test]
fn empty_candidate_scores_zero_without_error() {
    let ranked = vectorize_and_rank(JOB, &["", "python developer"]);
    let empty = ranked.iter().find(|s| s.index == 0).unwrap();
    assert_eq!(empty.score, 0.0);
    assert_eq!(ranked[0].index, 1);
}

#[test]
fn empty_reference_scores_everything_zero() {
    let ranked = vectorize_and_rank("", &["python developer", "java developer"]);
    assert!(ranked.iter().all(|s| s.score == 0.0));
    assert_eq!(ranked[0].index, 0);
}

#[test]
fn engineered_ties_keep_input_order() {
    // Candidates 0 and 2 are identical, so their scores are exactly equal.
    // "beta" is rarer than "alpha", so candidate 1 ranks first.
    let ranked = vectorize_and_rank("alpha beta", &["alpha", "beta", "alpha"]);
    let order: Vec<usize> = ranked.iter().map(|s| s.index).collect();
    assert_eq!(order, vec![1, 0, 2]);
    assert_eq!(ranked[1].score, ranked[2].score);
}

#[test]
fn no_candidates_empty_ranking() {
    assert!(vectorize_and_rank(JOB, &[]).is_empty());
}

#[test]
fn vectorize_then_rank_is_idempotent() {
    let candidates = [
        "python developer",
        "data engineer with python and spark",
        "five years of java experience",
    ];
    let first = vectorize_and_rank(JOB, &candidates);
    let second = vectorize_and_rank(JOB, &candidates);
    assert_eq!(first, second);
}

#[test]
fn rows_from_different_corpora_rejected() {
    let a = vectorize(&["rust engineer", "rust"]).unwrap();
    let b = vectorize(&["python developer with five years", "python"]).unwrap();
    let result = rank(a.reference(), b.candidates());
    assert!(matches!(result, Err(RankError::InvalidInput(_))));
}

// ============================================================
// Chain: source -> pipeline -> reports
// ============================================================

#[test]
fn files_to_csv_report() {
    let dir = tempfile::tempdir().unwrap();
    let files = [
        ("alice.txt", "Python developer with five years experience"),
        ("bob.txt", "Java developer"),
        ("carol, jr.txt", "Python developer"),
        ("blank.txt", "   \n  "),
    ];
    let paths: Vec<_> = files
        .iter()
        .map(|(name, text)| {
            let path = dir.path().join(name);
            std::fs::write(&path, text).unwrap();
            path
        })
        .collect();

    let docs = load_documents(&paths).unwrap();
    assert!(docs[3].unreadable);

    let screening = screen(&TfIdfVectorizer::default(), &Limits::default(), JOB, &docs).unwrap();
    let names: Vec<&str> = screening
        .candidates
        .iter()
        .map(|c| c.identifier.as_str())
        .collect();
    assert_eq!(names, vec!["alice.txt", "carol, jr.txt", "bob.txt", "blank.txt"]);
    assert_eq!(screening.unreadable().len(), 1);
    assert_eq!(screening.unreadable()[0].score, 0.0);

    let csv_path = dir.path().join("ranked_resumes.csv");
    write_csv(&screening, &csv_path).unwrap();
    let content = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Candidate Name,Score");
    assert_eq!(lines[1], "alice.txt,1.00");
    assert_eq!(lines[2], "\"carol, jr.txt\",0.48");
    assert_eq!(lines[3], "bob.txt,0.15");
    assert_eq!(lines[4], "blank.txt,0.00");
    assert_eq!(lines.len(), 5);
}

#[test]
fn keyword_matches_follow_ranking() {
    let docs = vec![
        SourceDocument::new("java.txt", "java developer"),
        SourceDocument::new("chef.txt", "pastry chef"),
        SourceDocument::new("python.txt", "python developer"),
    ];
    let screening = screen(&TfIdfVectorizer::default(), &Limits::default(), JOB, &docs).unwrap();

    let matched: Vec<&str> = screening
        .keyword_matches()
        .iter()
        .map(|c| c.identifier.as_str())
        .collect();
    assert_eq!(matched, vec!["python.txt", "java.txt"]);
    assert_eq!(
        screening.candidates[0].matched_keywords,
        vec!["developer", "python"]
    );
}

#[test]
fn screening_scores_match_core_ranking() {
    let texts = ["python developer", "java developer", JOB];
    let docs: Vec<SourceDocument> = texts
        .iter()
        .enumerate()
        .map(|(i, t)| SourceDocument::new(format!("r{i}.txt"), *t))
        .collect();
    let screening = screen(&TfIdfVectorizer::default(), &Limits::default(), JOB, &docs).unwrap();
    assert_eq!(screening.scores(), vectorize_and_rank(JOB, &texts));
}

#[test]
fn config_driven_screening_respects_limits() {
    let config = Config {
        max_candidates: 2,
        ..Config::default()
    };
    let docs = vec![
        SourceDocument::new("a.txt", "python"),
        SourceDocument::new("b.txt", "python"),
        SourceDocument::new("c.txt", "python"),
    ];
    let result = screen(&config.vectorizer(), &config.limits(), JOB, &docs);
    assert!(matches!(result, Err(RankError::InvalidInput(_))));
}

#[test]
fn screening_serializes_to_json() {
    let docs = vec![SourceDocument::new("alice.txt", "python developer")];
    let screening = screen(&TfIdfVectorizer::default(), &Limits::default(), JOB, &docs).unwrap();
    let json: serde_json::Value = serde_json::to_value(&screening).unwrap();
    assert_eq!(json["candidates"][0]["identifier"], "alice.txt");
    assert_eq!(json["candidates"][0]["rank"], 1);
    assert!(json["vocabulary_size"].as_u64().unwrap() >= 6);
}

#[test]
fn csv_render_of_empty_screening() {
    let screening = screen(&TfIdfVectorizer::default(), &Limits::default(), JOB, &[]).unwrap();
    assert_eq!(render_csv(&screening), "Candidate Name,Score\n");
}

#[test]
fn zero_resumes_render_empty_ranking() {
    let docs = load_documents(&[]).unwrap();
    let screening = screen(&TfIdfVectorizer::default(), &Limits::default(), JOB, &docs).unwrap();
    assert!(screening.is_empty());
    assert!(screening.top().is_none());

    terminal::display_ranking(&screening);
    terminal::display_keyword_matches(&screening, &docs, 8);
    assert!(terminal::keyword_excerpts(&screening, &docs, 3, 500).is_empty());

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("ranked_resumes.csv");
    write_csv(&screening, &csv_path).unwrap();
    assert_eq!(
        std::fs::read_to_string(&csv_path).unwrap(),
        "Candidate Name,Score\n"
    );
}

#[test]
fn keyword_section_shows_top_three_with_excerpts() {
    let docs: Vec<SourceDocument> = [
        "python developer",
        "pastry chef",
        "java developer",
        "python engineer",
        "developer relations",
    ]
    .iter()
    .enumerate()
    .map(|(i, t)| SourceDocument::new(format!("r{i}.txt"), format!("{t} {}", "x".repeat(600))))
    .collect();
    let screening = screen(&TfIdfVectorizer::default(), &Limits::default(), JOB, &docs).unwrap();
    assert_eq!(screening.keyword_matches().len(), 4);
    assert_eq!(screening.top().unwrap().identifier, "r0.txt");

    let excerpts = terminal::keyword_excerpts(
        &screening,
        &docs,
        terminal::KEYWORD_MATCH_LIMIT,
        terminal::EXCERPT_CHARS,
    );
    assert_eq!(excerpts.len(), 3);
    assert_eq!(excerpts[0].0.identifier, "r0.txt");
    for (candidate, excerpt) in &excerpts {
        assert!(!candidate.matched_keywords.is_empty());
        assert!(docs[candidate.index].text.starts_with(&excerpt[..10]));
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.chars().count(), terminal::EXCERPT_CHARS + 3);
    }
}

#[test]
fn scored_candidates_serialize() {
    let ranked = vectorize_and_rank(JOB, &["python developer"]);
    let json = serde_json::to_value(&ranked).unwrap();
    assert_eq!(json[0]["index"], 0);
    assert!(json[0]["score"].as_f64().unwrap() > 0.0);
}
