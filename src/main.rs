use assess_ai::config::AppConfig;
use assess_ai::error::AppError;
use assess_ai::telemetry;
use assess_ai::workflows::assessment::{
    assessment_router, AssessmentService, CorpusDocument, GradingConfig, GradingResult,
    PlagiarismConfig, PlagiarismReport, Rubric, RubricCriterion, SubmissionId,
};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Assessment Engine",
    about = "Run the automated assessment service or grade submissions from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Grade a submission file against an inline rubric
    Grade(GradeArgs),
    /// Compare a submission file against a CSV corpus of candidate texts
    Similarity(SimilarityArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct GradeArgs {
    /// Path to the submission text
    #[arg(long)]
    content: PathBuf,
    /// Rubric entry in name=points[:min_words] form (repeatable)
    #[arg(long = "criterion", value_parser = parse_criterion, required = true)]
    criteria: Vec<RubricCriterion>,
}

#[derive(Args, Debug)]
struct SimilarityArgs {
    /// Path to the submission text
    #[arg(long)]
    content: PathBuf,
    /// CSV corpus with candidate_id,text rows
    #[arg(long)]
    corpus: PathBuf,
    /// Flag threshold on the 0-100 similarity scale
    #[arg(long, default_value_t = 70.0)]
    threshold: f64,
    /// Candidate id of the submission itself, excluded from comparison
    #[arg(long, default_value = "submission-cli")]
    submission_id: String,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Grade(args) => run_grade(args),
        Command::Similarity(args) => run_similarity(args),
    }
}

fn parse_criterion(raw: &str) -> Result<RubricCriterion, String> {
    let (name, rest) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=points[:min_words], got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing criterion name in '{raw}'"));
    }

    let (points, min_words) = match rest.split_once(':') {
        Some((points, min_words)) => (points, Some(min_words)),
        None => (rest, None),
    };

    let max_points = points
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid points in '{raw}' ({err})"))?;
    let min_words = min_words
        .map(|value| {
            value
                .trim()
                .parse::<usize>()
                .map_err(|err| format!("invalid min_words in '{raw}' ({err})"))
        })
        .transpose()?;

    Ok(RubricCriterion {
        name: name.to_string(),
        max_points,
        min_words,
    })
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let service = Arc::new(AssessmentService::new(
        GradingConfig::default(),
        PlagiarismConfig {
            flag_threshold: config.assessment.similarity_threshold,
            ..PlagiarismConfig::default()
        },
    ));

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(assessment_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_grade(args: GradeArgs) -> Result<(), AppError> {
    let text = std::fs::read_to_string(&args.content)?;
    let rubric = Rubric::new(args.criteria);

    let service = AssessmentService::new(GradingConfig::default(), PlagiarismConfig::default());
    let result = service.grade_submission(&text, &rubric)?;

    render_grading_report(&result);
    Ok(())
}

fn run_similarity(args: SimilarityArgs) -> Result<(), AppError> {
    let text = std::fs::read_to_string(&args.content)?;
    let file = std::fs::File::open(&args.corpus)?;
    let corpus = read_corpus(file).map_err(std::io::Error::other)?;

    let service = AssessmentService::new(
        GradingConfig::default(),
        PlagiarismConfig {
            flag_threshold: args.threshold,
            ..PlagiarismConfig::default()
        },
    );
    let report = service.detect_similarity(&SubmissionId(args.submission_id), &text, &corpus, None);

    render_similarity_report(&report);
    Ok(())
}

fn read_corpus<R: std::io::Read>(reader: R) -> Result<Vec<CorpusDocument>, csv::Error> {
    let mut rows = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut corpus = Vec::new();
    for record in rows.records() {
        let record = record?;
        let candidate_id = record.get(0).unwrap_or("").trim();
        let text = record.get(1).unwrap_or("");
        if candidate_id.is_empty() {
            continue;
        }
        corpus.push(CorpusDocument {
            candidate_id: SubmissionId(candidate_id.to_string()),
            text: text.to_string(),
        });
    }

    Ok(corpus)
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn render_grading_report(result: &GradingResult) {
    println!("Grading report");
    println!(
        "Total: {:.1}/{:.1} ({:.1}%), confidence {:.2}",
        result.total_score,
        result.max_score,
        result.percentage(),
        result.confidence
    );

    println!("\nCriterion scores");
    for score in &result.criterion_scores {
        println!(
            "- {}: {:.1}/{:.1} ({:.1}%) - {}",
            score.criterion, score.score, score.max_points, score.percentage, score.rationale
        );
    }

    if result.strengths.is_empty() {
        println!("\nStrengths: none");
    } else {
        println!("\nStrengths");
        for strength in &result.strengths {
            println!("- {strength}");
        }
    }

    if result.improvements.is_empty() {
        println!("\nImprovements: none");
    } else {
        println!("\nImprovements");
        for improvement in &result.improvements {
            println!("- {improvement}");
        }
    }

    println!("\nFeedback\n{}", result.feedback);
}

fn render_similarity_report(report: &PlagiarismReport) {
    println!("Similarity report for {}", report.submission_id.0);

    if report.matches.is_empty() {
        println!("Matches: none");
    } else {
        println!("Matches");
        for candidate in &report.matches {
            println!("- {}: {:.1}", candidate.candidate_id.0, candidate.similarity);
        }
    }

    println!("Highest similarity: {:.1}", report.highest_similarity);
    println!("Flagged: {}", report.is_flagged);
    println!(
        "Likely generated: {} (confidence {:.2})",
        report.ai_detection.is_likely_generated, report.ai_detection.confidence
    );
    println!("Report confidence: {:.2}", report.confidence);
}
