//! End-to-end pipeline orchestration
//!
//! Load all datasets, fit one shared vector space, score every user
//! against every item catalog, optionally run the feedback simulation,
//! write JSON output. Single-threaded and single-pass; the fitted
//! vocabulary and vectors live exactly as long as one run.
//!
//! Per-user and per-kind failures are logged and isolated; structural
//! failures (schema, encoding, I/O) abort the run.

use anyhow::Result;
use matchx_core::{TfidfConfig, TfidfModel};
use matchx_engine::{
    rank, BoostConfig, Catalog, FeedbackConfig, FeedbackSimulator, Recommendation,
    Recommender, RecommendationsByKind, UserRecommendations,
};
use matchx_schema::{document_text, EntityKind, EntitySchema, Record};
use matchx_store::{load_datasets, write_flat, write_per_user};
use std::path::PathBuf;
use tracing::{info, warn};

/// Feedback simulation settings for one run
#[derive(Debug, Clone, Copy)]
pub struct FeedbackRun {
    pub config: FeedbackConfig,
    pub seed: u64,
}

/// Everything one pipeline run needs
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub top_n: usize,
    pub tfidf: TfidfConfig,
    pub boosts: BoostConfig,
    /// `None` skips the feedback simulation entirely
    pub feedback: Option<FeedbackRun>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            top_n: 10,
            tfidf: TfidfConfig::default(),
            boosts: BoostConfig::default(),
            feedback: Some(FeedbackRun {
                config: FeedbackConfig::default(),
                seed: 42,
            }),
        }
    }
}

/// Run the whole pipeline once.
pub fn run(config: &PipelineConfig) -> Result<()> {
    let datasets = load_datasets(&config.data_dir)?;

    // Build profile documents, then fit users and items together so every
    // vector shares one vocabulary.
    let user_schema = EntitySchema::builtin(EntityKind::User)?;
    let user_docs = documents(&user_schema, &datasets.users);

    let mut item_docs: Vec<(EntityKind, Vec<String>)> = Vec::new();
    for kind in EntityKind::ITEMS {
        let schema = EntitySchema::builtin(kind)?;
        item_docs.push((kind, documents(&schema, datasets.items(kind))));
    }

    let corpus = user_docs
        .iter()
        .map(String::as_str)
        .chain(item_docs.iter().flat_map(|(_, docs)| docs.iter().map(String::as_str)));
    let model = TfidfModel::fit(config.tfidf.clone(), corpus);
    info!("fitted vocabulary of {} terms", model.vocabulary().len());

    let user_vectors = user_docs.iter().map(|d| model.transform(d)).collect();
    let mut recommender = Recommender::new(datasets.users.clone(), user_vectors, config.boosts);
    let user_ids: Vec<String> = recommender.user_ids().map(str::to_string).collect();

    let mut active_kinds = Vec::new();
    for (kind, docs) in &item_docs {
        let items = datasets.items(*kind).to_vec();
        if items.is_empty() {
            warn!("no {kind} items loaded; {kind} recommendations will be empty");
            continue;
        }
        let vectors = docs.iter().map(|d| model.transform(d)).collect();
        recommender.insert_catalog(*kind, Catalog::new(items, vectors));
        active_kinds.push(*kind);
    }

    // Score every user against every active catalog, isolating failures.
    let mut per_user: Vec<UserRecommendations> = Vec::with_capacity(user_ids.len());
    for user_id in &user_ids {
        let mut recommendations = RecommendationsByKind::default();
        for kind in &active_kinds {
            match recommender.recommend(user_id, *kind, config.top_n) {
                Ok(recs) => *recommendations.slot_mut(*kind) = recs,
                Err(e) => warn!("skipping {kind} recommendations for {user_id}: {e}"),
            }
        }
        per_user.push(UserRecommendations {
            user_id: user_id.clone(),
            recommendations,
        });
    }

    if let Some(feedback) = &config.feedback {
        simulate_feedback(feedback, &mut per_user);
    } else {
        info!("feedback simulation skipped");
    }

    for kind in EntityKind::ITEMS {
        let flat: Vec<Recommendation> = per_user
            .iter()
            .flat_map(|u| u.recommendations.slot(kind).iter().cloned())
            .collect();
        write_flat(&config.output_dir, kind, &flat)?;
    }
    write_per_user(&config.output_dir, &per_user)?;

    info!("pipeline completed for {} users", per_user.len());
    Ok(())
}

fn documents(schema: &EntitySchema, records: &[Record]) -> Vec<String> {
    records.iter().map(|r| document_text(schema, r)).collect()
}

/// Sample synthetic feedback over the flattened list and fold it back into
/// each per-user ranking.
fn simulate_feedback(feedback: &FeedbackRun, per_user: &mut [UserRecommendations]) {
    let flat: Vec<Recommendation> = per_user
        .iter()
        .flat_map(|u| {
            EntityKind::ITEMS
                .iter()
                .flat_map(|kind| u.recommendations.slot(*kind).iter().cloned())
                .collect::<Vec<_>>()
        })
        .collect();

    let mut simulator = FeedbackSimulator::new(feedback.config, feedback.seed);
    let events = simulator.sample(&flat);
    info!("simulated {} feedback events (seed {})", events.len(), feedback.seed);

    for user in per_user.iter_mut() {
        for kind in EntityKind::ITEMS {
            let list = user.recommendations.slot_mut(kind);
            simulator.apply(list, &events);
            rank(list);
        }
    }
}
