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

use std::{fs, process, thread::sleep, time::Duration};

use chip8_core::Cpu;
use clap::{App, Arg};
use sdl2::{event::Event, keyboard::Keycode, EventPump};

mod graphics;

/// Main entrypoint: parses arguments, loads the ROM, and runs the emulator
/// until the window is closed.
fn main() {
    env_logger::init();

    let matches = App::new("chip8-host")
        .version("0.1.0")
        .about("A minimal SDL2 frontend for chip8-core.")
        .arg(
            Arg::with_name("file")
                .help("The ROM file to execute")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("speed")
                .help("Instructions executed per frame (1-100)")
                .short("s")
                .long("speed")
                .takes_value(true)
                .default_value("10"),
        )
        .get_matches();

    let path = matches.value_of("file").unwrap();
    let speed: u8 = matches
        .value_of("speed")
        .unwrap()
        .parse()
        .unwrap_or_else(|_| {
            log::warn!("invalid --speed value, falling back to 10");
            10
        });

    let rom = fs::read(path).unwrap_or_else(|e| {
        log::error!("could not read ROM {}: {}", path, e);
        process::exit(1);
    });

    let context = sdl2::init().unwrap();
    let mut event_pump = context.event_pump().unwrap();
    let mut renderer = graphics::Renderer::new(&context);

    let mut cpu = Cpu::new();
    cpu.set_speed(speed);

    if let Err(e) = cpu.load_rom(&rom) {
        log::error!("{}", e);
        process::exit(1);
    }

    'main: loop {
        cpu.emulate_cycle();

        match handle_events(&mut event_pump, &mut cpu) {
            Ok(_) => {}
            Err(_) => break 'main,
        }

        if cpu.draw_flag() {
            renderer.render(cpu.display());
            cpu.clear_draw_flag();
        }

        sleep(Duration::from_secs_f64(1.0 / 60.0));
    }
}

/// Translate SDL2 key and window events into Chip-8 keypad events. Returns
/// `Err` when the window has been asked to close.
fn handle_events(event_pump: &mut EventPump, cpu: &mut Cpu) -> Result<(), ()> {
    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. } => return Err(()),
            Event::KeyDown {
                keycode: Some(keycode),
                ..
            } => {
                if let Some(key) = map_keycode(keycode) {
                    cpu.key_press(key);
                }
            }
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => {
                if let Some(key) = map_keycode(keycode) {
                    cpu.key_release(key);
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Map a physical keyboard key to the Chip-8 hex keypad layout:
///
/// ```text
/// 1 2 3 4        1 2 3 C
/// Q W E R   ->   4 5 6 D
/// A S D F        7 8 9 E
/// Z X C V        A 0 B F
/// ```
fn map_keycode(keycode: Keycode) -> Option<u8> {
    match keycode {
        Keycode::Num1 => Some(0x1),
        Keycode::Num2 => Some(0x2),
        Keycode::Num3 => Some(0x3),
        Keycode::Num4 => Some(0xC),
        Keycode::Q => Some(0x4),
        Keycode::W => Some(0x5),
        Keycode::E => Some(0x6),
        Keycode::R => Some(0xD),
        Keycode::A => Some(0x7),
        Keycode::S => Some(0x8),
        Keycode::D => Some(0x9),
        Keycode::F => Some(0xE),
        Keycode::Z => Some(0xA),
        Keycode::X => Some(0x0),
        Keycode::C => Some(0xB),
        Keycode::V => Some(0xF),
        _ => None,
    }
}
