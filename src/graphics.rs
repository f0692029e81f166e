/*
Copyright 2020 Anish Jewalikar

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use chip8_core::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use sdl2::{pixels::Color, rect::Rect, render::Canvas, video::Window, Sdl};

/// Framebuffer pixel to window pixel scale.
const SCALE: i32 = 10;

/// Wraps an SDL2 canvas sized to the scaled-up Chip-8 framebuffer.
pub struct Renderer {
    canvas: Canvas<Window>,
}

impl Renderer {
    /// Create a new window and canvas, cleared to black.
    pub fn new(context: &Sdl) -> Self {
        let video_sys = context.video().unwrap();
        let window = video_sys
            .window(
                "chip8-host",
                (DISPLAY_WIDTH as u32) * SCALE as u32,
                (DISPLAY_HEIGHT as u32) * SCALE as u32,
            )
            .position_centered()
            .build()
            .unwrap();

        let mut canvas = window.into_canvas().build().unwrap();
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        canvas.present();

        Self { canvas }
    }

    /// Draw the framebuffer: one filled rect per pixel, scaled up.
    pub fn render(&mut self, buffer: &[u8]) {
        for row in 0..DISPLAY_HEIGHT {
            let offset = row * DISPLAY_WIDTH;

            for col in 0..DISPLAY_WIDTH {
                let color = if buffer[offset + col] == 0 {
                    Color::RGB(0, 0, 0)
                } else {
                    Color::RGB(255, 255, 255)
                };

                self.canvas.set_draw_color(color);

                let x = (col as i32) * SCALE;
                let y = (row as i32) * SCALE;
                let rect = Rect::new(x, y, SCALE as u32, SCALE as u32);
                self.canvas.fill_rect(rect).unwrap();
            }
        }

        self.canvas.present();
    }
}
