use std::{path::PathBuf, time::Instant};

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::Parser;
use client_core::{DataLoader, DirSource, HttpSource};
use projection::{Carousel, ChronoDateFormatter, Clock, MemoryView, Page, PageOptions, SiteEvent};
use shared::{CategoryKey, LanguageCode};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod scaffold;

use config::load_settings;
use scaffold::scaffold_view;

/// Loads the site data, projects it into an in-memory page and prints it.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "site.toml")]
    config: PathBuf,
    /// Base URL the `data/*.json` documents are served under.
    #[arg(long, conflicts_with = "data_dir")]
    data_url: Option<String>,
    /// Directory containing `data/*.json`.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Switch to this language after loading.
    #[arg(long)]
    lang: Option<String>,
    /// Select this program category after loading.
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    toggle_nav: bool,
    /// Pretend the current moment is this (`YYYY-MM-DD` or `YYYY-MM-DDTHH:MM`).
    #[arg(long, value_parser = parse_moment)]
    now: Option<NaiveDateTime>,
    /// Number of carousel slides on the page.
    #[arg(long)]
    slides: Option<usize>,
    /// Wait for this many carousel auto-advances before printing.
    #[arg(long, default_value_t = 0)]
    autoplay_ticks: u32,
    #[arg(long)]
    json: bool,
}

fn parse_moment(raw: &str) -> Result<NaiveDateTime, String> {
    if let Ok(moment) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Ok(moment);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|err| format!("expected YYYY-MM-DD or YYYY-MM-DDTHH:MM: {err}"))
}

/// Wall time may be pinned from the command line; the carousel always runs
/// on the real monotonic clock.
struct PreviewClock {
    pinned: Option<NaiveDateTime>,
}

impl Clock for PreviewClock {
    fn now(&self) -> NaiveDateTime {
        self.pinned.unwrap_or_else(|| Local::now().naive_local())
    }

    fn instant(&self) -> Instant {
        Instant::now()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = load_settings(&args.config);

    let loader = match (&args.data_url, &args.data_dir, &settings.data_url) {
        (Some(url), _, _) | (None, None, Some(url)) => {
            let source = HttpSource::new(url).with_context(|| format!("invalid data url {url}"))?;
            DataLoader::new(source)
        }
        (None, Some(dir), _) => DataLoader::new(DirSource::new(dir)),
        (None, None, None) => DataLoader::new(DirSource::new(&settings.data_dir)),
    };

    let data = loader
        .load()
        .await
        .context("site data could not be loaded; nothing rendered")?;

    let initial_language = LanguageCode::new(settings.default_lang.clone());
    let slides = args.slides.unwrap_or(settings.carousel_slides);
    let view = scaffold_view(&data, &initial_language, slides);

    let mut page = Page::new(
        view,
        ChronoDateFormatter,
        PreviewClock { pinned: args.now },
        PageOptions {
            initial_language,
            carousel_interval: settings.carousel_interval(),
        },
    );
    page.init_carousel();
    page.load(data);

    if let Some(lang) = args.lang {
        page.dispatch(SiteEvent::SetLanguage(LanguageCode::new(lang)));
    }
    if let Some(category) = args.category {
        page.dispatch(SiteEvent::SelectCategory(CategoryKey::new(category)));
    }
    if args.toggle_nav {
        page.dispatch(SiteEvent::ToggleNav);
    }

    for tick in 0..args.autoplay_ticks {
        let Some(deadline) = page.carousel().and_then(Carousel::deadline) else {
            bail!("--autoplay-ticks needs a page with carousel slides");
        };
        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        page.dispatch(SiteEvent::CarouselTick);
        info!(
            tick = tick + 1,
            slide = page.carousel().map(Carousel::current),
            "carousel advanced"
        );
    }

    print_view(page.view(), args.json)
}

fn print_view(view: &MemoryView, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        print!("{view}");
    }
    Ok(())
}
