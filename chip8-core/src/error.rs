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

//! Errors `chip8-core` can hand back to a caller.
//!
//! Faults that are recoverable at the VM level (unknown opcodes, stack
//! underflow/overflow, out-of-range memory access) never reach here — the
//! executor logs them and carries on. Only `load_rom` can fail outright,
//! since loading a ROM that won't fit is a caller mistake, not a runtime
//! VM fault.

use thiserror::Error;

/// The maximum ROM size: memory from 0x200 to 0xFFF.
pub const MAX_ROM_SIZE: usize = 0x1000 - 0x200;

/// Failure to load a ROM image into memory.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadRomError {
    /// The ROM is longer than the 3584 bytes available starting at 0x200.
    #[error("ROM is {len} bytes, which exceeds the {max} bytes available starting at 0x200")]
    TooLarge {
        /// Length of the rejected ROM, in bytes.
        len: usize,
        /// Maximum permitted length, in bytes.
        max: usize,
    },
}
