use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use pagescroll_core::{AppConfig, EasingType, FrameQueue, SimulatedPage, TokioClock, Viewport};
use pagescroll_engine::{drive, ScrollConfigExt, ScrollController, ScrollEvent, ScrollRequest};

#[derive(Args, Debug)]
pub struct ScrollArgs {
    #[command(flatten)]
    target: TargetArgs,

    /// Pixels to stop short of the target (negative scrolls past it)
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<i64>,

    /// Animation duration in milliseconds
    #[arg(long)]
    duration: Option<u64>,

    /// Easing curve, e.g. linear or ease_in_out_quad
    #[arg(long)]
    easing: Option<EasingType>,

    /// Scroll speed in pixels per second (overrides --duration)
    #[arg(long)]
    speed: Option<f64>,

    /// Initial scroll offset of the page
    #[arg(long)]
    start: Option<i64>,

    #[arg(long, default_value_t = 800)]
    viewport_height: i64,

    #[arg(long, default_value_t = 3000)]
    document_height: i64,

    /// Element position as id=top, may be repeated
    #[arg(long = "layout", value_parser = parse_layout)]
    layout: Vec<(String, i64)>,

    /// JSON page fixture; replaces the viewport and document heights
    #[arg(long)]
    page: Option<PathBuf>,

    /// Print a JSON report including every written position
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct TargetArgs {
    /// Scroll to an absolute offset
    #[arg(long)]
    position: Option<i64>,

    /// Scroll to the top of an element
    #[arg(long)]
    element: Option<String>,

    /// Scroll to the end of the document
    #[arg(long)]
    end: bool,
}

#[derive(Serialize)]
struct Report {
    destination: i64,
    completed: bool,
    final_position: i64,
    frames: usize,
    history: Vec<i64>,
}

fn parse_layout(value: &str) -> std::result::Result<(String, i64), String> {
    let (id, top) = value
        .split_once('=')
        .ok_or_else(|| format!("expected id=top, got '{}'", value))?;
    let top = top
        .trim()
        .parse()
        .map_err(|e| format!("invalid top for '{}': {}", id, e))?;
    Ok((id.trim().trim_start_matches('#').to_string(), top))
}

fn build_page(args: &ScrollArgs) -> Result<SimulatedPage> {
    let mut page = match &args.page {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading page fixture {}", path.display()))?;
            SimulatedPage::from_json(&json)?
        }
        None => SimulatedPage::new(args.viewport_height, args.document_height),
    };

    for (id, top) in &args.layout {
        page.insert_element(id.as_str(), *top);
    }
    if let Some(start) = args.start {
        page.jump_to(start);
    }

    Ok(page)
}

pub async fn run(config: &AppConfig, args: ScrollArgs) -> Result<()> {
    let scroll_config = config.scroll.clone();
    let page = build_page(&args)?;
    let initial = page.current_scroll_offset();

    let offset = args.offset.unwrap_or(scroll_config.offset);
    let target = &args.target;
    let request = if let Some(position) = target.position {
        ScrollRequest::position(position)
    } else if let Some(element) = &target.element {
        ScrollRequest::element(element.trim_start_matches('#'))
    } else if target.end {
        ScrollRequest::document_end()
    } else {
        bail!("no scroll target given");
    };
    let request = request.with_offset(offset);

    let mut options = scroll_config.default_options();
    if let Some(duration) = args.duration {
        options = options.with_duration_ms(duration);
    }
    if let Some(easing) = args.easing {
        options = options.with_easing(easing);
    }
    if let Some(speed) = args.speed {
        options = options.with_speed(speed);
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut controller = ScrollController::new(
        page,
        TokioClock::new(),
        FrameQueue::new(),
        scroll_config.clone(),
    )
    .with_event_sender(event_tx);

    let handle = controller.scroll_to(request.clone(), options)?;
    let destination = handle.destination();
    if !args.json {
        println!("Scrolling from {}px to {} -> {}px", initial, request, destination);
    }

    // Ctrl-C stops the animation where it is
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    let frames = drive(&mut controller, scroll_config.frame_interval(), shutdown_rx).await;
    let completion = handle.finished().await;

    while let Ok(event) = event_rx.try_recv() {
        if let ScrollEvent::Cancelled { position, .. } = event {
            warn!("Scroll stopped early at {}px", position);
        } else {
            debug!(?event, "Scroll event");
        }
    }

    let final_position = controller.viewport().current_scroll_offset();

    if args.json {
        let report = Report {
            destination,
            completed: completion.is_some(),
            final_position,
            frames,
            history: controller.viewport().history().to_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match completion {
        Some(done) => println!(
            "Yeah, we reached our destination: {}px after {} frames",
            done.final_position, frames
        ),
        None => println!("Scroll cancelled at {}px after {} frames", final_position, frames),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layout() {
        assert_eq!(parse_layout("head7=1000").unwrap(), ("head7".to_string(), 1000));
        assert_eq!(parse_layout("#footer = 2900").unwrap(), ("footer".to_string(), 2900));
        assert!(parse_layout("head7").is_err());
        assert!(parse_layout("head7=top").is_err());
    }
}
