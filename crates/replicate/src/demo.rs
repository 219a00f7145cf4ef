//! Credential-free demo path.
//!
//! A deterministic staged simulation that never contacts the upstream
//! API: fixed stages at fixed delays, then a uniformly random pick
//! from a small pool of sample clips. Lets a user exercise the full
//! surface without an API token.

use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;
use videoai_core::progress::{
    ProgressEvent, STAGE_COMPLETE, STAGE_DEMO, STAGE_GENERATING, STAGE_PROCESSING, STAGE_RENDERING,
};
use videoai_core::types::GenerationResult;

/// Model name recorded on demo results and history entries.
pub const DEMO_MODEL_NAME: &str = "Demo Mode";

/// Sample clips served in demo mode: `(video_url, blurb)`.
pub const DEMO_VIDEOS: &[(&str, &str)] = &[
    (
        "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
        "Fire and explosions",
    ),
    (
        "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerJoyrides.mp4",
        "Sports car driving",
    ),
    (
        "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerFun.mp4",
        "Animated characters",
    ),
    (
        "https://storage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
        "Animated elephant dream",
    ),
];

/// Run the fixed demo sequence and return a sample clip.
///
/// Stage sequence (after the engine's initial `starting` event):
/// demo(20) -> processing(40) -> generating(60) -> rendering(80) ->
/// complete(100), separated by 1.0-1.5 s delays.
pub async fn generate_demo<F>(prompt: &str, on_progress: &mut F) -> GenerationResult
where
    F: FnMut(ProgressEvent),
{
    on_progress(ProgressEvent::new(
        STAGE_DEMO,
        "Demo mode - preparing a sample video...",
        20,
    ));
    sleep(Duration::from_millis(1000)).await;

    on_progress(ProgressEvent::new(
        STAGE_PROCESSING,
        "Analyzing the prompt...",
        40,
    ));
    sleep(Duration::from_millis(1500)).await;

    on_progress(ProgressEvent::new(
        STAGE_GENERATING,
        "Generating frames...",
        60,
    ));
    sleep(Duration::from_millis(1500)).await;

    on_progress(ProgressEvent::new(
        STAGE_RENDERING,
        "Rendering the video...",
        80,
    ));
    sleep(Duration::from_millis(1000)).await;

    let (video_url, _) = DEMO_VIDEOS[rand::rng().random_range(0..DEMO_VIDEOS.len())];

    on_progress(ProgressEvent::new(
        STAGE_COMPLETE,
        "Done! (sample video)",
        100,
    ));

    GenerationResult {
        video_url: video_url.to_string(),
        model: DEMO_MODEL_NAME.to_string(),
        prompt: prompt.to_string(),
        is_demo: true,
    }
}
