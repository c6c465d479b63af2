//! Draw calls for the frame, header band and squares

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{BORDER_WIDTH, HEADER_HEIGHT};
use crate::sim::state::{CONTACT_COLOR, GameState, Square};

const OUTER_COLOR: &str = "#d0d0d0";
const INNER_COLOR: &str = "#e8eaec";
const HEADER_COLOR: &str = "#303030";
const TEXT_COLOR: &str = "#ffffff";
const LABEL_COLOR: &str = "#000000";

const TITLE: &str = "Bouncy Boxes";

/// Renderer over the canvas 2D context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    /// Wrap the canvas' 2D context
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Draw one frame; a zero-sized surface skips it entirely
    pub fn render(&self, state: &GameState) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return;
        }

        self.draw_frame(state.fps.fps());
        for square in &state.squares {
            self.draw_square(square);
        }
    }

    /// Background, inset border and the header band with title and FPS
    fn draw_frame(&self, fps: u32) {
        let ctx = &self.ctx;
        let border = BORDER_WIDTH as f64;

        ctx.set_fill_style_str(OUTER_COLOR);
        ctx.fill_rect(0.0, 0.0, self.width, self.height);
        ctx.set_fill_style_str(INNER_COLOR);
        ctx.fill_rect(
            border,
            border,
            self.width - 2.0 * border,
            self.height - 2.0 * border,
        );

        ctx.set_fill_style_str(HEADER_COLOR);
        ctx.fill_rect(0.0, 0.0, self.width, HEADER_HEIGHT as f64);

        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_font("24px Verdana");
        let _ = ctx.fill_text(TITLE, 10.0, 30.0);

        ctx.set_font("12px Verdana");
        let _ = ctx.fill_text(&format!("Fps: {fps}"), 13.0, 50.0);
    }

    fn draw_square(&self, square: &Square) {
        let ctx = &self.ctx;
        let (x, y) = (square.pos.x as f64, square.pos.y as f64);
        let (w, h) = (square.size.x as f64, square.size.y as f64);

        let fill = if square.contact {
            CONTACT_COLOR
        } else {
            square.color
        };
        ctx.set_fill_style_str(&fill.to_css());
        ctx.fill_rect(x, y, w, h);

        // Score centered inside the square, scaled with it
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_font(&format!("{}px Verdana", square.size.y / 2.0));
        let text = square.score.to_string();
        let text_width = ctx.measure_text(&text).map(|m| m.width()).unwrap_or(0.0);
        let _ = ctx.fill_text(&text, x + (w - text_width) / 2.0, y + h * 0.65);

        // Rounded coordinates just above the top-left corner
        ctx.set_fill_style_str(LABEL_COLOR);
        ctx.set_font("12px Verdana");
        let label = format!("{}, {}", square.pos.x.round(), square.pos.y.round());
        let _ = ctx.fill_text(&label, x, y - 1.0);
    }
}
