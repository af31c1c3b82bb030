//! Developer tool for the discussions configuration core
//!
//! Drives a full configuration session against a fixture-backed gateway
//! (a JSON `ConfigSnapshot` on disk) and prints the resulting state, so
//! the state core can be inspected without a UI or a running backend.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use discussions_core::logging::{init_logging_with_config, LogConfig, LogLevel};
use discussions_core::model::{AppId, CourseId};
use discussions_core::sync::{ConfigSnapshot, NullNavigator, SyncOrchestrator};
use discussions_core::test_utils::StaticGateway;
use discussions_core::{topics, ClientConfig, Session};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "discussions")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Set the log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Enable JSON formatted logging
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a session from a fixture snapshot and print its state
    Show {
        /// Path to a JSON ConfigSnapshot
        #[arg(long)]
        fixture: PathBuf,

        /// Course id; falls back to DISCUSSIONS_COURSE_ID
        #[arg(long)]
        course_id: Option<String>,
    },

    /// Validate the fixture's topic list and print per-entry results
    CheckTopics {
        /// Path to a JSON ConfigSnapshot
        #[arg(long)]
        fixture: PathBuf,
    },
}

#[derive(Serialize)]
struct TopicReport {
    id: String,
    name: String,
    missing_name: bool,
    duplicate_name: bool,
}

#[derive(Serialize)]
struct SessionReport {
    status: discussions_core::LoadStatus,
    save_status: discussions_core::SaveStatus,
    active_app_id: Option<AppId>,
    selected_app_id: Option<AppId>,
    app_ids: Vec<AppId>,
    topics: Vec<TopicReport>,
    divide_discussion_ids: Vec<String>,
}

fn load_snapshot(path: &PathBuf) -> Result<ConfigSnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading fixture {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing fixture {}", path.display()))
}

fn resolve_course_id(explicit: Option<String>) -> Result<CourseId> {
    if let Some(id) = explicit {
        return Ok(CourseId::new(id));
    }
    let config = ClientConfig::from_env()?;
    config
        .course_id
        .context("no course id given; pass --course-id or set DISCUSSIONS_COURSE_ID")
}

async fn fetch_session(fixture: &PathBuf, course_id: &CourseId) -> Result<Session> {
    let snapshot = load_snapshot(fixture)?;
    let orchestrator = SyncOrchestrator::new(
        Arc::new(StaticGateway::new(snapshot)),
        Arc::new(NullNavigator),
    );

    let mut session = Session::new();
    orchestrator.fetch_apps(&mut session, course_id).await;
    info!(status = %session.status, "session fetched");
    Ok(session)
}

fn session_report(session: &Session) -> SessionReport {
    let validations = topics::validate_session(session);
    let topics = session
        .discussion_topics()
        .into_iter()
        .map(|topic| {
            let entry = validations
                .iter()
                .find(|validation| validation.id == topic.id);
            TopicReport {
                id: topic.id.to_string(),
                name: topic.name.clone(),
                missing_name: entry.is_some_and(|e| e.missing_name),
                duplicate_name: entry.is_some_and(|e| e.duplicate_name),
            }
        })
        .collect();

    SessionReport {
        status: session.status,
        save_status: session.save_status,
        active_app_id: session.active_app_id.clone(),
        selected_app_id: session.selected_app_id.clone(),
        app_ids: session.app_ids.clone(),
        topics,
        divide_discussion_ids: session
            .divide_discussion_ids
            .iter()
            .map(ToString::to_string)
            .collect(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level: LogLevel = args.log_level.parse().unwrap_or_else(|_| {
        eprintln!("Invalid log level '{}', using 'warn'", args.log_level);
        LogLevel::Warn
    });
    init_logging_with_config(LogConfig::new(log_level).json_format(args.json_logs))?;

    match args.command {
        Command::Show { fixture, course_id } => {
            let course_id = resolve_course_id(course_id)?;
            let session = fetch_session(&fixture, &course_id).await?;
            println!("{}", serde_json::to_string_pretty(&session_report(&session))?);
        }
        Command::CheckTopics { fixture } => {
            let snapshot = load_snapshot(&fixture)?;
            let validations = topics::validate_names(&snapshot.discussion_topics);
            let invalid = validations.iter().filter(|v| !v.is_valid()).count();

            for validation in &validations {
                if !validation.is_valid() {
                    println!(
                        "{}: missing_name={} duplicate_name={}",
                        validation.id, validation.missing_name, validation.duplicate_name
                    );
                }
            }
            if invalid == 0 {
                println!("all {} topics valid", validations.len());
            } else {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
