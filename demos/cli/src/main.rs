use std::path::PathBuf;

use agenda_core::{CategoryFilter, FilterState, SubjectFilter};
use agenda_feed::load_feed_str;
use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "agenda-cli", about = "Renders a school agenda feed as text.")]
struct Args {
    /// Path to the feed JSON document.
    #[arg(short, long)]
    input: PathBuf,

    /// Reference date (YYYY-MM-DD); defaults to the local day.
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Category filter: all, dev, te, autre or annule.
    #[arg(long, default_value = "all")]
    filter: String,

    /// Subject filter; omit to keep every subject.
    #[arg(long)]
    subject: Option<String>,

    /// Dump the built view as JSON instead of the text listing.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Could not read feed file {:?}", args.input))?;

    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let snapshot = load_feed_str(&data, today)?;

    let category = match args.filter.as_str() {
        "all" => CategoryFilter::All,
        "dev" => CategoryFilter::Homework,
        "te" => CategoryFilter::Test,
        "autre" => CategoryFilter::OtherOrAnnouncement,
        "annule" => CategoryFilter::Cancelled,
        other => anyhow::bail!("Unknown filter {other:?} (expected all, dev, te, autre or annule)"),
    };
    let mut state = FilterState {
        category,
        subject: match args.subject {
            Some(name) => SubjectFilter::Only(name),
            None => SubjectFilter::All,
        },
    };
    state.revalidate(&snapshot.subjects);

    let view = snapshot.view(&state);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", view.summary);
    println!("Matières : {}", snapshot.subjects.join(", "));
    println!();

    if let Some(empty) = &view.empty_state {
        println!("{}", empty.title);
        println!("{}", empty.text);
        return Ok(());
    }

    for entry in &view.entries {
        if let Some(label) = &entry.separator {
            println!("-- {label}");
        }
        let mut line = format!(
            "  {} [{}] {}",
            entry.item.due_label, entry.display.label, entry.item.display_title
        );
        if let Some(info) = entry.display.info_line.as_deref() {
            if !info.is_empty() {
                line.push_str(" · ");
                line.push_str(info);
            }
        }
        if !entry.display.interactive {
            line.push_str(" (verrouillé)");
        }
        println!("{line}");
    }

    Ok(())
}
