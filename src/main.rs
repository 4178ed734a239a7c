use clap::Parser;
use navkit::utils::{logger, validation::Validate};
use navkit::{
    CliConfig, Dom, FixturePage, PageEngine, PageSpec, Result, SystemClock, TomlConfig, Viewport,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SweepEntry {
    offset: f64,
    active: Option<String>,
    revealed: usize,
}

#[derive(Debug, Serialize)]
struct RunReport {
    page: String,
    sections: usize,
    footer_year: Option<String>,
    entries: Vec<SweepEntry>,
}

fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting navkit walkthrough");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let mut page = match load_page(&cli) {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("❌ Page description failed to load: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let clock = SystemClock;
    let mut engine = PageEngine::mount(&mut page, &clock, &config);

    for n in 1..=cli.toggle_clicks {
        engine.on_toggle_click(&mut page);
        tracing::info!(
            "Toggle click {}: menu {}",
            n,
            if engine.menu_open(&page) { "open" } else { "closed" }
        );
    }

    let offsets = if cli.scroll.is_empty() {
        sweep_offsets(&page, cli.step)
    } else {
        cli.scroll.clone()
    };

    let mut entries = Vec::with_capacity(offsets.len());
    for offset in offsets {
        page.scroll_to(offset);
        engine.on_scroll(&mut page);
        entries.push(SweepEntry {
            offset: page.scroll_y(),
            active: engine.active_section().map(str::to_string),
            revealed: engine.revealed_count(),
        });
    }

    let footer_year = page
        .query(&config.selectors.footer_year)
        .map(|node| page.text_of(node).to_string());
    let report = RunReport {
        page: cli.page.clone().unwrap_or_else(|| "sample landing".to_string()),
        sections: engine.section_count(),
        footer_year,
        entries,
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                let e = navkit::PageError::from(e);
                eprintln!("❌ {}", e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
    } else {
        println!("✅ Walkthrough of {} complete", report.page);
        println!("📄 {} sections tracked", report.sections);
        if let Some(year) = &report.footer_year {
            println!("📅 Footer year: {}", year);
        }
        for entry in &report.entries {
            println!(
                "  offset {:>7.1} → active: {:<12} revealed: {}",
                entry.offset,
                entry.active.as_deref().unwrap_or("(none)"),
                entry.revealed
            );
        }
    }
}

fn load_config(cli: &CliConfig) -> Result<TomlConfig> {
    let config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn load_page(cli: &CliConfig) -> Result<FixturePage> {
    match &cli.page {
        Some(path) => FixturePage::from_spec(&PageSpec::from_file(path)?),
        None => Ok(FixturePage::sample_landing()),
    }
}

/// Offsets from the top of the page to the bottom of the scrollable
/// range, stepping by `step` and always ending exactly at the bottom.
fn sweep_offsets(page: &FixturePage, step: f64) -> Vec<f64> {
    let step = if step.is_finite() && step > 0.0 { step } else { 200.0 };
    let max_scroll = (page.document_height() - page.inner_height()).max(0.0);

    let mut offsets = Vec::new();
    let mut offset = 0.0;
    while offset < max_scroll {
        offsets.push(offset);
        offset += step;
    }
    offsets.push(max_scroll);
    offsets
}
