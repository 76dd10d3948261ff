//! Canvas 2D backend
//!
//! Replays a draw list against a `CanvasRenderingContext2d`.

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::DrawCommand;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    pub fn render(&self, commands: &[DrawCommand]) {
        let ctx = &self.ctx;
        for command in commands {
            match command {
                DrawCommand::Clear { width, height } => {
                    ctx.clear_rect(0.0, 0.0, f64::from(*width), f64::from(*height));
                }
                DrawCommand::FillRect { pos, size, color } => {
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(
                        f64::from(pos.x),
                        f64::from(pos.y),
                        f64::from(size.x),
                        f64::from(size.y),
                    );
                }
                DrawCommand::FillCircle { center, radius, color } => {
                    ctx.set_fill_style_str(color);
                    ctx.begin_path();
                    if let Err(e) = ctx.arc(
                        f64::from(center.x),
                        f64::from(center.y),
                        f64::from(*radius),
                        0.0,
                        TAU,
                    ) {
                        log::warn!("arc failed: {:?}", e);
                        continue;
                    }
                    ctx.fill();
                }
                DrawCommand::Text { text, pos, font, color } => {
                    ctx.set_fill_style_str(color);
                    ctx.set_font(font);
                    let _ = ctx.fill_text(text, f64::from(pos.x), f64::from(pos.y));
                }
            }
        }
    }
}
