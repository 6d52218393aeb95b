//! Async frame loop for running scroll animations in real time

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use pagescroll_core::{Clock, Scheduler, Viewport};

use crate::scroll::ScrollController;

/// Run frames every `frame_interval` until the controller is idle
///
/// A `true` on `shutdown` cancels the running animation and returns early.
/// Returns the number of frames that were run.
pub async fn drive<V, C, S>(
    controller: &mut ScrollController<V, C, S>,
    frame_interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> usize
where
    V: Viewport,
    C: Clock,
    S: Scheduler,
{
    if !controller.is_animating() {
        return 0;
    }

    // interval() panics on a zero period
    let mut interval = tokio::time::interval(frame_interval.max(Duration::from_millis(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // Skip the first tick (fires immediately)
    interval.tick().await;

    let mut frames = 0;
    let mut watching = true;

    loop {
        tokio::select! {
            biased;

            result = shutdown.changed(), if watching => {
                match result {
                    Ok(()) if *shutdown.borrow() => {
                        info!("Frame driver received shutdown signal");
                        controller.cancel();
                        break;
                    }
                    Ok(()) => {}
                    // Sender dropped, nobody can ask us to stop any more
                    Err(_) => watching = false,
                }
            }

            _ = interval.tick() => {
                frames += 1;
                controller.run_frame();
                if !controller.is_animating() {
                    break;
                }
            }
        }
    }

    debug!("Frame driver stopped after {} frames", frames);
    frames
}
