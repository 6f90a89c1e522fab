//! The fixed constants of the chip8 architecture.

pub mod memory {
    /// Bytes of addressable ram
    pub const SIZE: usize = 0x1000; // 4096

    /// The highest valid address
    pub const LAST: usize = SIZE - 1;

    pub mod opcodes {
        /// Every instruction is two bytes wide
        pub const SIZE: usize = 2;
    }
}

pub mod cpu {
    /// Programs are loaded to and started from this address
    pub const PROGRAM_COUNTER: usize = 0x0200;
    /// The largest program image that fits between the start of the
    /// program area and the end of memory.
    pub const PROGRAM_MAX_SIZE: usize = super::memory::SIZE - PROGRAM_COUNTER; // 3584
    /// Suggested instruction rate for hosts
    pub const HERTZ: u64 = 500;

    pub mod register {
        /// `V0` to `VF`
        pub const SIZE: usize = 16;
        /// `VF` doubles as the flag register
        pub const LAST: usize = SIZE - 1;
    }

    pub mod stack {
        /// Maximal subroutine nesting depth
        pub const SIZE: usize = 16;
    }
}

pub mod timer {
    /// Both timers count down at this rate
    pub const HERTZ: u64 = 60;
}

pub mod display {
    /// Pixels per row
    pub const WIDTH: usize = 64;
    /// Rows on the screen
    pub const HEIGHT: usize = 32;
    pub const RESOLUTION: usize = WIDTH * HEIGHT;

    /// The built in hexadecimal digit sprites.
    pub mod fontset {
        /// Address of the sprite for digit `0`, the others follow directly
        pub const LOCATION: usize = 0x000;
        /// Rows (bytes) per digit
        pub const CHAR_SIZE: usize = 5;
        /// Only the high nibble of every row is drawn
        pub const FONTSET: [u8; 16 * CHAR_SIZE] = [
            0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
            0x20, 0x60, 0x20, 0x20, 0x70, // 1
            0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
            0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
            0x90, 0x90, 0xF0, 0x10, 0x10, // 4
            0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
            0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
            0xF0, 0x10, 0x20, 0x40, 0x40, // 7
            0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
            0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
            0xF0, 0x90, 0xF0, 0x90, 0x90, // A
            0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
            0xF0, 0x80, 0x80, 0x80, 0xF0, // C
            0xE0, 0x90, 0x90, 0x90, 0xE0, // D
            0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
            0xF0, 0x80, 0xF0, 0x80, 0x80, // F
        ];
    }
}

pub mod keyboard {
    /// Keys on the hex keypad, `0x0` to `0xF`
    pub const SIZE: usize = 16;
    /// How the keys are arranged on the physical keypad
    pub const LAYOUT: [[usize; 4]; 4] = [
        [0x1, 0x2, 0x3, 0xC],
        [0x4, 0x5, 0x6, 0xD],
        [0x7, 0x8, 0x9, 0xE],
        [0xA, 0x0, 0xB, 0xF],
    ];
}
