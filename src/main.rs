// src/main.rs
use nannou::event::{TouchEvent, TouchPhase};
use nannou::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bouncybox::{
    config::Config,
    host::{FrameScheduler, Host},
    render::NannouCanvas,
    views::Scene,
};

struct Model {
    scene: Scene,
    scheduler: FrameScheduler,

    // Draw list recorded by the last scene frame, replayed on every view
    draw: nannou::Draw,
    drawn_size: Vec2,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config, logging comes up before the fallback is reported
    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&config);
    if let Err(err) = loaded {
        warn!(%err, "no usable config, using defaults");
    }

    let window = app
        .new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .touch(touch)
        .key_pressed(key_pressed)
        .build();
    if let Err(err) = window {
        warn!(?err, "failed to build window");
        app.quit();
    }

    let mut scheduler = FrameScheduler::new();
    // first frame paints the resting column
    scheduler.request_redraw();

    info!(
        width = config.window.width,
        height = config.window.height,
        "bouncybox ready"
    );

    Model {
        scene: Scene::new(),
        scheduler,
        draw: nannou::Draw::new(),
        drawn_size: Vec2::ZERO,
    }
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

// ******************************* Input *******************************

fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.scene.on_tap(&mut model.scheduler);
    }
}

fn touch(_app: &App, model: &mut Model, touch: TouchEvent) {
    if touch.phase == TouchPhase::Started {
        model.scene.on_tap(&mut model.scheduler);
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if key == Key::Space {
        model.scene.on_tap(&mut model.scheduler);
    }
}

// ******************************* Frame loop *******************************

fn update(app: &App, model: &mut Model, _update: Update) {
    let rect = app.window_rect();
    let due = model.scheduler.poll(app.duration.since_start);
    let resized = model.drawn_size != rect.wh();
    if !due && !resized {
        return;
    }

    model.draw.reset();
    let mut canvas = NannouCanvas::new(&model.draw, rect.w(), rect.h());
    if due {
        model.scene.on_frame(&mut canvas, &mut model.scheduler);
    } else {
        // relayout only, no tick
        model.scene.draw(&mut canvas);
    }
    model.drawn_size = rect.wh();
}

fn view(app: &App, model: &Model, frame: Frame) {
    if let Err(err) = model.draw.to_frame(app, &frame) {
        warn!(?err, "failed to render frame");
    }
}
