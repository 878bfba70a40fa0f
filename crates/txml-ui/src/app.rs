use std::time::Duration;

use anyhow::Result;
use winit::dpi::LogicalSize;

use txml_engine::core::{App as EngineApp, AppControl, FrameCtx};
use txml_engine::device::GpuInit;
use txml_engine::paint::Color;
use txml_engine::render::shapes::rect::RectRenderer;
use txml_engine::render::shapes::text::TextRenderer;
use txml_engine::text::{FontId, FontSystem};
use txml_engine::window::{Runtime, RuntimeConfig};
use txml_markup::Document;

use crate::scene::UiScene;

/// Window application that displays one interpreted document.
///
/// Configure with the builder methods, then hand over the document with
/// [`run`](Application::run):
///
/// ```rust,ignore
/// Application::new()
///     .title("TXML Interpreter")
///     .size(400.0, 300.0)
///     .font(fonts, font_id, 24.0)
///     .run(txml_markup::parse_document(&src))?;
/// ```
pub struct Application {
    title: String,
    width: f64,
    height: f64,
    fonts: FontSystem,
    font: FontId,
    font_size: f32,
    poll_interval: Duration,
}

impl Application {
    pub fn new() -> Self {
        let defaults = RuntimeConfig::default();
        Self {
            title: defaults.title,
            width: defaults.initial_size.width,
            height: defaults.initial_size.height,
            fonts: FontSystem::new(),
            font: FontId::default(),
            font_size: 24.0,
            poll_interval: defaults.poll_interval,
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the window size in logical pixels. The window is not resizable.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the loaded fonts, the one used for all text, and its pixel size.
    pub fn font(mut self, fonts: FontSystem, font: FontId, size: f32) -> Self {
        self.fonts = fonts;
        self.font = font;
        self.font_size = size;
        self
    }

    /// Set how often the idle loop wakes up to check for events.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Opens the window and shows `document` until the window is closed.
    ///
    /// Fails when the window or GPU cannot be created.
    pub fn run(self, document: Document) -> Result<()> {
        let scene = UiScene::new(self.fonts, self.font, self.font_size);

        let config = RuntimeConfig {
            title: self.title,
            initial_size: LogicalSize::new(self.width, self.height),
            resizable: false,
            poll_interval: self.poll_interval,
        };
        let state = UiAppState {
            document,
            scene,
            laid_out: false,
            rect_renderer: RectRenderer::new(),
            text_renderer: TextRenderer::new(),
        };

        Runtime::run(config, GpuInit::default(), state)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

/// Implements `txml_engine::core::App`; renderers and layout state live here.
struct UiAppState {
    document: Document,
    scene: UiScene,
    laid_out: bool,
    rect_renderer: RectRenderer,
    text_renderer: TextRenderer,
}

impl EngineApp for UiAppState {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // The window cannot be resized, so one layout serves every repaint.
        if !self.laid_out {
            self.scene.frame(&self.document.elements, ctx.viewport());
            self.laid_out = true;
        }

        let dl = &self.scene.draw_list;
        let fs = &self.scene.font_system;
        let r_rect = &mut self.rect_renderer;
        let r_text = &mut self.text_renderer;

        ctx.render(Color::BLACK, |rctx, target| {
            r_rect.render(rctx, target, dl);
            r_text.render(rctx, target, dl, fs);
        })
    }
}
