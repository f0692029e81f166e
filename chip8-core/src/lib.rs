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

//! A Chip-8 interpreter backend: memory, registers, timers, a 64x32
//! framebuffer, the hex keypad, and the fetch/decode/execute loop.
//!
//! This crate has no rendering, audio, or input backend of its own — it
//! expects a host to pump [`Cpu::emulate_cycle`] on a timer, read
//! [`Cpu::display`] when [`Cpu::draw_flag`] is set, and forward key events
//! through [`Cpu::key_press`] / [`Cpu::key_release`].

mod cpu;
mod disasm;
mod error;
mod font;

pub use cpu::{
    Cpu, DEFAULT_SPEED, DISPLAY_HEIGHT, DISPLAY_WIDTH, MEMORY_SIZE, NUM_KEYS, NUM_REGISTERS,
    PROGRAM_START, STACK_SIZE,
};
pub use disasm::{describe, mnemonic};
pub use error::{LoadRomError, MAX_ROM_SIZE};
