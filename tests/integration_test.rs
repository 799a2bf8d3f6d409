// Integration tests for matchX
use matchx::pipeline::{run, FeedbackRun, PipelineConfig};
use matchx_engine::FeedbackConfig;
use std::fs;
use std::path::Path;

fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn write_demo_data(dir: &Path) {
    write_file(
        dir,
        "users.csv",
        "user_id,university,degree_program,exams_subjects,bio,city\n\
         u1,UT Austin,Computer Science,\"hiking,music\",Loves trail runs,Austin\n\
         u2,CU Boulder,Biology,\"genetics,lab work\",Aspiring researcher,Denver\n\
         u3,,,,,\n",
    );
    write_file(
        dir,
        "events.csv",
        "event_id,title,description,category,tags,city\n\
         e1,Jazz Night,Live jazz music downtown,music,music;nightlife,Austin\n\
         e2,Trail Day,Guided hiking trip with long scenic routes and a picnic,outdoor,hiking;nature,Austin\n\
         e3,Science Fair,Student research projects,science,research,Denver\n",
    );
    write_file(
        dir,
        "jobs.csv",
        "job_id,title,description,category,tags,city,company\n\
         j1,Data Analyst,Analyze campus datasets,data,analytics;python,Austin,Acme\n\
         j2,Lab Assistant,Support genetics research in the biology lab,science,genetics;research,Denver,BioCorp\n",
    );
    write_file(
        dir,
        "posts.csv",
        "post_id,title,content,category,tags,city\n\
         p1,Study Group,Looking for a study group for algorithms,academics,algorithms;study,Austin\n\
         p2,Concert Review,The jazz concert last weekend was amazing,music,music;review,Austin\n",
    );
}

fn config(data: &Path, output: &Path, feedback: Option<FeedbackRun>) -> PipelineConfig {
    PipelineConfig {
        data_dir: data.to_path_buf(),
        output_dir: output.to_path_buf(),
        feedback,
        ..PipelineConfig::default()
    }
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_full_pipeline_produces_all_outputs() {
    let data = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_demo_data(data.path());

    run(&config(data.path(), output.path(), None)).unwrap();

    for name in [
        "event_recommendations.json",
        "job_recommendations.json",
        "post_recommendations.json",
        "user_recommendations.json",
    ] {
        assert!(output.path().join(name).exists(), "missing {name}");
    }

    let per_user = read_json(&output.path().join("user_recommendations.json"));
    let users = per_user.as_array().unwrap();
    assert_eq!(users.len(), 3);
    // Sorted by user id
    assert_eq!(users[0]["user_id"], "u1");
    assert_eq!(users[1]["user_id"], "u2");
    assert_eq!(users[2]["user_id"], "u3");

    // Each list is ranked descending
    for user in users {
        for kind in ["events", "jobs", "posts"] {
            let recs = user["recommendations"][kind].as_array().unwrap();
            let scores: Vec<f64> = recs.iter().map(|r| r["score"].as_f64().unwrap()).collect();
            for pair in scores.windows(2) {
                assert!(pair[0] >= pair[1], "{kind} not ranked: {scores:?}");
            }
        }
    }
}

#[test]
fn test_boosted_match_ranks_first_with_reasons() {
    let data = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_demo_data(data.path());

    run(&config(data.path(), output.path(), None)).unwrap();

    let per_user = read_json(&output.path().join("user_recommendations.json"));
    let u2_jobs = per_user[1]["recommendations"]["jobs"].as_array().unwrap();

    // u2 (Denver, genetics/lab work) should see the Denver lab job on top:
    // strong text similarity plus city and tag boosts. The Austin data job
    // shares no profile text and triggers no boost.
    assert_eq!(u2_jobs[0]["item_id"], "j2");
    let reasons: Vec<&str> = u2_jobs[0]["reasons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r.as_str().unwrap())
        .collect();
    assert_eq!(reasons[0], "text similarity");
    assert!(reasons.contains(&"city match"));
    assert!(reasons.contains(&"tag overlap"));

    let j1 = u2_jobs.iter().find(|r| r["item_id"] == "j1").unwrap();
    assert_eq!(j1["reasons"].as_array().unwrap().len(), 1);
}

#[test]
fn test_cold_start_user_sees_popularity_ranking() {
    let data = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_demo_data(data.path());

    run(&config(data.path(), output.path(), None)).unwrap();

    let per_user = read_json(&output.path().join("user_recommendations.json"));
    let u3_events = per_user[2]["recommendations"]["events"].as_array().unwrap();

    // u3 has a blank profile: every reason list starts with the fallback
    // and the longest-description item wins.
    for rec in u3_events {
        assert_eq!(rec["reasons"][0], "popularity fallback");
    }
    assert_eq!(u3_events[0]["item_id"], "e2");
}

#[test]
fn test_fixed_seed_output_is_byte_identical() {
    let data = tempfile::tempdir().unwrap();
    let out_a = tempfile::tempdir().unwrap();
    let out_b = tempfile::tempdir().unwrap();
    write_demo_data(data.path());

    let feedback = Some(FeedbackRun {
        config: FeedbackConfig {
            like_ratio: 0.2,
            dislike_ratio: 0.1,
            ..FeedbackConfig::default()
        },
        seed: 42,
    });

    run(&config(data.path(), out_a.path(), feedback)).unwrap();
    run(&config(data.path(), out_b.path(), feedback)).unwrap();

    for name in [
        "event_recommendations.json",
        "job_recommendations.json",
        "post_recommendations.json",
        "user_recommendations.json",
    ] {
        let a = fs::read(out_a.path().join(name)).unwrap();
        let b = fs::read(out_b.path().join(name)).unwrap();
        assert_eq!(a, b, "{name} differs between identical runs");
    }
}

#[test]
fn test_skipping_feedback_matches_unperturbed_scores() {
    let data = tempfile::tempdir().unwrap();
    let out_a = tempfile::tempdir().unwrap();
    let out_b = tempfile::tempdir().unwrap();
    write_demo_data(data.path());

    // Zero ratios sample nothing, so a zero-ratio pass and a skipped pass
    // must agree.
    let noop_feedback = Some(FeedbackRun {
        config: FeedbackConfig {
            like_ratio: 0.0,
            dislike_ratio: 0.0,
            ..FeedbackConfig::default()
        },
        seed: 7,
    });

    run(&config(data.path(), out_a.path(), noop_feedback)).unwrap();
    run(&config(data.path(), out_b.path(), None)).unwrap();

    let a = fs::read(out_a.path().join("user_recommendations.json")).unwrap();
    let b = fs::read(out_b.path().join("user_recommendations.json")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_empty_catalog_yields_empty_list_not_error() {
    let data = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_demo_data(data.path());
    // Replace events with a header-only file.
    write_file(
        data.path(),
        "events.csv",
        "event_id,title,description,category,tags,city\n",
    );

    run(&config(data.path(), output.path(), None)).unwrap();

    let events = read_json(&output.path().join("event_recommendations.json"));
    assert_eq!(events.as_array().unwrap().len(), 0);

    // The other catalogs are unaffected.
    let jobs = read_json(&output.path().join("job_recommendations.json"));
    assert!(!jobs.as_array().unwrap().is_empty());
}

#[test]
fn test_missing_data_file_aborts_run() {
    let data = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_demo_data(data.path());
    fs::remove_file(data.path().join("jobs.csv")).unwrap();

    let err = run(&config(data.path(), output.path(), None));
    assert!(err.is_err());
}

#[test]
fn test_non_utf8_input_aborts_run() {
    let data = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_demo_data(data.path());
    fs::write(
        data.path().join("posts.csv"),
        b"post_id,title\np1,caf\xE9\n",
    )
    .unwrap();

    let err = run(&config(data.path(), output.path(), None));
    assert!(err.is_err());
}
