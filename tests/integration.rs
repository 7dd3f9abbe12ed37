// SPDX-License-Identifier: MPL-2.0
use iced_spin::config::{self, Config, DragCapture, LoaderConfig, ViewerConfig};
use iced_spin::domain::MaxAttempts;
use iced_spin::{
    load_frames, Bitmap, Direction, DragInput, Error, Fetch, RetryPolicy, Spinner, SpinnerOptions,
    Surface,
};
use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::collections::HashMap;
use std::future::Future;
use std::io::Cursor;
use tempfile::tempdir;

/// Serves PNGs from memory; frame `i` is a solid image with red channel `i`.
struct MemoryFetcher {
    bodies: HashMap<String, Vec<u8>>,
}

impl MemoryFetcher {
    fn with_frames(count: u8, width: u32, height: u32) -> (Self, Vec<String>) {
        let mut bodies = HashMap::new();
        let mut sources = Vec::new();
        for i in 0..count {
            let url = format!("https://cdn.example.com/shoe/{i:02}.png");
            let image = RgbaImage::from_pixel(width, height, Rgba([i, 10, 20, 255]));
            let mut bytes = Vec::new();
            image
                .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
                .expect("encode png");
            bodies.insert(url.clone(), bytes);
            sources.push(url);
        }
        (Self { bodies }, sources)
    }
}

impl Fetch for MemoryFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = iced_spin::Result<Vec<u8>>> + Send {
        let body = self.bodies.get(url).cloned().ok_or_else(|| Error::Fetch {
            url: url.to_string(),
            message: "404".to_string(),
        });
        async move { body }
    }
}

#[derive(Default)]
struct RecordingSurface {
    size: (u32, u32),
    shown: Vec<u8>,
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn draw(&mut self, bitmap: &Bitmap) {
        self.shown.push(bitmap.rgba_bytes()[0]);
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }
}

#[tokio::test]
async fn demo_then_drag_walks_through_frames() {
    let (fetcher, sources) = MemoryFetcher::with_frames(4, 12, 8);
    let mut spinner = Spinner::new(
        sources,
        RecordingSurface::default(),
        SpinnerOptions {
            demo_on_load: true,
            ..SpinnerOptions::default()
        },
    );
    assert!(!spinner.is_loaded());

    let frames = spinner
        .load(fetcher, RetryPolicy::unbounded())
        .await
        .expect("frames load");
    assert_eq!(frames.len(), 4);

    assert!(spinner.on_frames_loaded(frames));
    assert_eq!(spinner.surface().size(), (12, 8));

    while spinner.demo_tick() {}
    assert_eq!(spinner.current_frame(), 3);
    assert_eq!(spinner.surface().shown, vec![0, 1, 2, 3]);

    // Drag right past the last frame wraps to the first.
    spinner.handle_input(DragInput::Press);
    spinner.handle_input(DragInput::PointerMoved { delta_x: 3.0 });
    assert_eq!(spinner.current_frame(), 0);
    spinner.handle_input(DragInput::PointerMoved { delta_x: -1.0 });
    spinner.handle_input(DragInput::PointerMoved { delta_x: -1.0 });
    assert_eq!(spinner.current_frame(), 2);
    spinner.handle_input(DragInput::Release);

    // Touch: finger moving left steps forward.
    spinner.handle_input(DragInput::TouchStart { x: 100.0 });
    spinner.handle_input(DragInput::TouchMove { x: 90.0 });
    assert_eq!(spinner.current_frame(), 3);
    spinner.handle_input(DragInput::TouchEnd);

    spinner.set_frame(1).expect("in range");
    assert_eq!(spinner.current_frame(), 1);
    assert_eq!(
        spinner.set_frame(4),
        Err(Error::FrameOutOfRange { index: 4, total: 4 })
    );

    spinner.update(Direction::Backward);
    assert_eq!(spinner.surface().shown.last(), Some(&0));
}

#[tokio::test]
async fn missing_frame_faults_the_whole_load() {
    let (fetcher, mut sources) = MemoryFetcher::with_frames(3, 4, 4);
    sources.push("https://cdn.example.com/shoe/missing.png".to_string());

    let result = load_frames(
        &fetcher,
        &sources,
        RetryPolicy::bounded(MaxAttempts::new(2)),
    )
    .await;

    assert!(matches!(result, Err(Error::Fetch { ref url, .. }) if url.ends_with("missing.png")));
}

#[test]
fn config_file_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let config = Config {
        viewer: ViewerConfig {
            sources: vec!["https://cdn.example.com/shoe/00.png".to_string()],
            demo_on_load: Some(true),
            demo_interval_ms: Some(30),
            drag_capture: Some(DragCapture::Surface),
        },
        loader: LoaderConfig {
            max_attempts: Some(3),
            retry_delay_ms: Some(50),
            user_agent: None,
        },
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);
    assert_eq!(loaded.max_attempts().map(MaxAttempts::value), Some(3));
}
