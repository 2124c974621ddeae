use crate::color;
use crate::export::{self, PngExport};
use crate::fill;
use crate::model::{
    CursorStyle, Rgba, Tool, ToolState, BRUSH_WIDTH, ERASER_WIDTH, PENCIL_WIDTH,
    SHAPE_STROKE_WIDTH, SPRAY_DENSITY, SPRAY_RADIUS,
};
use crate::raster;
use crate::settings::PaintSettings;
use crate::state::{can_transition, PaintPhase};
use crate::surface::Surface;
use crate::text;
use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

/// Something the controller needs from its host before it can proceed.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintRequest {
    /// The text tool was pressed; prompt the user and hand the answer to
    /// [`PaintController::submit_text_input`].
    TextInput { x: f64, y: f64 },
}

/// The paint surface controller: owns the pixel buffer and the whole
/// drawing state machine. One instance per widget; hosts feed it
/// surface-space input events and read the buffer back for presentation.
pub struct PaintController {
    surface: Surface,
    tools: ToolState,
    phase: PaintPhase,
    pending_text_origin: Option<(f64, f64)>,
    rng: StdRng,
    spray_radius: f64,
    spray_density: u32,
    resize: ResizeDebouncer,
}

impl PaintController {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::build(width, height, ToolState::default(), StdRng::from_entropy())
    }

    /// Controller with a fixed spray seed, for deterministic tests.
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Result<Self> {
        Self::build(
            width,
            height,
            ToolState::default(),
            StdRng::seed_from_u64(seed),
        )
    }

    /// Builds a controller from loaded settings. Unknown tool names and
    /// unresolvable colors are loud errors rather than silent fallbacks;
    /// numeric fields get the same clamping as the settings loader.
    pub fn from_settings(width: u32, height: u32, settings: &PaintSettings) -> Result<Self> {
        let mut settings = settings.clone();
        settings.sanitize();
        let tool = Tool::from_name(&settings.default_tool)
            .ok_or_else(|| anyhow!("unknown default tool '{}'", settings.default_tool))?;
        let color = color::resolve(&settings.default_color)?;

        let mut controller = Self::build(
            width,
            height,
            ToolState {
                current_tool: tool,
                current_color: color,
                brush_size: settings.brush_size,
                ..ToolState::default()
            },
            StdRng::from_entropy(),
        )?;
        controller.spray_radius = settings.spray_radius;
        controller.spray_density = settings.spray_density;
        controller.resize = ResizeDebouncer::new(Duration::from_millis(settings.resize_quiet_ms));
        Ok(controller)
    }

    fn build(width: u32, height: u32, tools: ToolState, rng: StdRng) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(anyhow!(
                "surface dimensions must be positive, got {width}x{height}"
            ));
        }
        Ok(Self {
            surface: Surface::new(width, height),
            tools,
            phase: PaintPhase::Idle,
            pending_text_origin: None,
            rng,
            spray_radius: SPRAY_RADIUS,
            spray_density: SPRAY_DENSITY,
            resize: ResizeDebouncer::new(Duration::from_millis(250)),
        })
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn phase(&self) -> PaintPhase {
        self.phase
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    /// Activates a tool, deactivating the previous one, and returns the
    /// cursor the host should show. No drawing side effect.
    pub fn select_tool(&mut self, tool: Tool) -> CursorStyle {
        trace!(tool = tool.name(), "tool selected");
        self.tools.current_tool = tool;
        tool.cursor_style()
    }

    /// Resolves a palette expression and makes it the active color.
    pub fn select_color(&mut self, expression: &str) -> Result<()> {
        let rgba = color::resolve(expression)?;
        self.set_color(rgba);
        Ok(())
    }

    /// Sets an already-resolved color. Never retroactive.
    pub fn set_color(&mut self, rgba: Rgba) {
        trace!(?rgba, "color selected");
        self.tools.current_color = rgba;
    }

    /// Press in surface space. Fill commits synchronously; the text tool
    /// answers with a [`PaintRequest`] and suspends drawing input until
    /// [`Self::submit_text_input`] resolves it.
    pub fn on_press_at(&mut self, x: f64, y: f64) -> Option<PaintRequest> {
        if !self.phase.accepts_drawing_input() {
            trace!("press ignored while awaiting text input");
            return None;
        }
        if self.phase == PaintPhase::Drawing {
            // A second press means the release was lost; end the stale stroke.
            debug!("press during an active stroke");
            self.set_phase(PaintPhase::Idle);
        }
        let tool = self.tools.current_tool;
        if tool.is_inert() {
            return None;
        }

        match tool {
            Tool::Fill => {
                let seed = (x.floor() as i32, y.floor() as i32);
                let outcome = fill::flood_fill(&mut self.surface, seed, self.tools.current_color);
                debug!(?seed, ?outcome, "flood fill");
                None
            }
            Tool::Text => {
                self.set_phase(PaintPhase::AwaitingTextInput);
                self.pending_text_origin = Some((x, y));
                Some(PaintRequest::TextInput { x, y })
            }
            _ => {
                self.set_phase(PaintPhase::Drawing);
                self.tools.stroke_start = (x, y);
                self.tools.last_position = (x, y);
                None
            }
        }
    }

    /// Drag in surface space. Freehand tools paint a step; shape tools and
    /// the tracked-but-inert picker/curve just follow the pointer.
    pub fn on_drag_to(&mut self, x: f64, y: f64) {
        if self.phase != PaintPhase::Drawing {
            trace!("drag ignored outside a stroke");
            return;
        }

        let from = to_pixel(self.tools.last_position);
        let to = to_pixel((x, y));
        let color = self.tools.current_color;
        match self.tools.current_tool {
            Tool::Pencil => raster::draw_segment(&mut self.surface, from, to, PENCIL_WIDTH, color),
            Tool::Brush => raster::draw_segment(&mut self.surface, from, to, BRUSH_WIDTH, color),
            Tool::Eraser => {
                raster::draw_segment(&mut self.surface, from, to, ERASER_WIDTH, Rgba::WHITE)
            }
            Tool::Spray => raster::spray(
                &mut self.surface,
                (x, y),
                self.spray_radius,
                self.spray_density,
                color,
                &mut self.rng,
            ),
            // Shape geometry is committed on release; picker and curve track
            // the stroke without touching pixels.
            _ => {}
        }
        self.tools.last_position = (x, y);
    }

    /// Release in surface space. Shape tools commit their geometry here,
    /// from the press point to this point.
    pub fn on_release_at(&mut self, x: f64, y: f64) {
        if self.phase != PaintPhase::Drawing {
            trace!("release ignored outside a stroke");
            return;
        }

        let tool = self.tools.current_tool;
        if tool.is_shape() {
            let start = to_pixel(self.tools.stroke_start);
            let end = to_pixel((x, y));
            let color = self.tools.current_color;
            match tool {
                Tool::Line => {
                    raster::draw_segment(&mut self.surface, start, end, SHAPE_STROKE_WIDTH, color)
                }
                Tool::Rectangle => raster::draw_rect_outline(
                    &mut self.surface,
                    start,
                    end,
                    SHAPE_STROKE_WIDTH,
                    color,
                ),
                Tool::Ellipse => raster::draw_ellipse_outline(
                    &mut self.surface,
                    start,
                    end,
                    SHAPE_STROKE_WIDTH,
                    color,
                ),
                _ => unreachable!("is_shape covers exactly the shape tools"),
            }
            debug!(tool = tool.name(), ?start, ?end, "shape committed");
        }
        self.tools.last_position = (x, y);
        self.set_phase(PaintPhase::Idle);
    }

    /// Pointer left the surface. Ends any active stroke like a release,
    /// except that shape geometry is deliberately not committed; only an
    /// explicit release inside the surface commits shapes.
    pub fn on_leave(&mut self) {
        if self.phase != PaintPhase::Drawing {
            return;
        }
        debug!(
            tool = self.tools.current_tool.name(),
            "stroke ended by leaving the surface"
        );
        self.set_phase(PaintPhase::Idle);
    }

    /// Resolves a pending text prompt. `None` or an empty string cancels
    /// without stamping; otherwise the text lands at the press position in
    /// the current color.
    pub fn submit_text_input(&mut self, value: Option<String>) {
        if self.phase != PaintPhase::AwaitingTextInput {
            warn!("text input submitted with no pending prompt");
            return;
        }
        let origin = self.pending_text_origin.take();
        self.set_phase(PaintPhase::Idle);

        let Some(origin) = origin else { return };
        match value {
            Some(text) if !text.is_empty() => {
                text::stamp_text(
                    &mut self.surface,
                    to_pixel(origin),
                    &text,
                    self.tools.current_color,
                );
                debug!(chars = text.chars().count(), "text stamped");
            }
            _ => trace!("text prompt cancelled"),
        }
    }

    /// Fills the whole surface opaque white. The confirmation for the menu
    /// path lives with the host; this call is unconditional.
    pub fn clear(&mut self) {
        self.surface.clear();
        info!("surface cleared");
    }

    pub fn export_png(&self) -> Result<PngExport> {
        export::export_png(&self.surface)
    }

    /// Records a resize wish. The surface only changes once the quiet
    /// period passes without a newer request, via [`Self::poll_resize`].
    pub fn request_resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(anyhow!(
                "resize dimensions must be positive, got {width}x{height}"
            ));
        }
        self.resize.request((width, height), Instant::now());
        Ok(())
    }

    /// Applies the trailing resize request once its quiet period has
    /// elapsed at `now`. Returns whether the surface was replaced.
    pub fn poll_resize(&mut self, now: Instant) -> bool {
        let Some((width, height)) = self.resize.poll(now) else {
            return false;
        };
        self.surface.resize(width, height);
        info!(width, height, "surface resized and cleared");
        true
    }

    fn set_phase(&mut self, to: PaintPhase) {
        debug_assert!(
            can_transition(self.phase, to),
            "illegal phase transition {:?} -> {to:?}",
            self.phase
        );
        self.phase = to;
    }
}

fn to_pixel(point: (f64, f64)) -> (i32, i32) {
    (point.0.round() as i32, point.1.round() as i32)
}

/// Trailing-edge debouncer for resize bursts: each request supersedes the
/// pending one and re-arms the quiet period; only the last request fires.
struct ResizeDebouncer {
    quiet: Duration,
    pending: Option<(u32, u32)>,
    requested_at: Option<Instant>,
}

impl ResizeDebouncer {
    fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            requested_at: None,
        }
    }

    fn request(&mut self, dims: (u32, u32), now: Instant) {
        self.pending = Some(dims);
        self.requested_at = Some(now);
    }

    fn poll(&mut self, now: Instant) -> Option<(u32, u32)> {
        let armed_at = self.requested_at?;
        if now.saturating_duration_since(armed_at) < self.quiet {
            return None;
        }
        self.requested_at = None;
        self.pending.take()
    }
}
