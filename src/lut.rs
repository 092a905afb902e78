//! The fixed cross-process tone curve.
//!
//! Each of the red, green and blue channels is remapped through its own
//! 256-entry curve before the colour matrix is applied. The curves lift the
//! blacks of the blue channel and clip the highlights of the green one,
//! giving the output its characteristic look.


/// Three independent byte-to-byte curves, one per source channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneLookupTable {
    red: [u8; 256],
    green: [u8; 256],
    blue: [u8; 256],
}

impl ToneLookupTable {
    #[must_use]
    pub const fn new(red: [u8; 256], green: [u8; 256], blue: [u8; 256]) -> Self {
        Self { red, green, blue }
    }

    /// A table that leaves every channel unchanged.
    #[must_use]
    pub const fn identity() -> Self {
        let mut curve = [0u8; 256];
        let mut i = 0;
        while i < 256 {
            curve[i] = i as u8;
            i += 1;
        }
        Self::new(curve, curve, curve)
    }

    #[must_use]
    #[inline(always)]
    pub const fn red(&self, value: u8) -> u8 {
        self.red[value as usize]
    }

    #[must_use]
    #[inline(always)]
    pub const fn green(&self, value: u8) -> u8 {
        self.green[value as usize]
    }

    #[must_use]
    #[inline(always)]
    pub const fn blue(&self, value: u8) -> u8 {
        self.blue[value as usize]
    }

    /// Remaps an `[r, g, b]` triple.
    #[must_use]
    #[inline(always)]
    pub const fn apply(&self, rgb: [u8; 3]) -> [u8; 3] {
        [self.red(rgb[0]), self.green(rgb[1]), self.blue(rgb[2])]
    }

    #[must_use]
    pub const fn curves(&self) -> [&[u8; 256]; 3] {
        [&self.red, &self.green, &self.blue]
    }
}

/// The cross-process curve every frame is mapped through.
pub static CROSS_PROCESS: ToneLookupTable = ToneLookupTable {
    red: [
          0,   0,   1,   2,   3,   4,   5,   6,   7,   8,   9,  10,  11,  12,  13,  14,
         14,  15,  16,  17,  18,  19,  20,  21,  22,  23,  24,  25,  26,  27,  28,  29,
         30,  31,  32,  33,  34,  35,  36,  37,  38,  39,  40,  41,  42,  43,  44,  45,
         46,  47,  48,  49,  51,  52,  53,  54,  55,  56,  57,  58,  59,  61,  62,  63,
         64,  65,  67,  68,  69,  70,  71,  73,  74,  75,  76,  77,  79,  80,  81,  82,
         84,  85,  86,  87,  89,  90,  91,  92,  94,  95,  96,  98,  99, 100, 101, 103,
        104, 105, 107, 108, 109, 111, 112, 113, 115, 116, 117, 119, 120, 121, 122, 124,
        125, 126, 128, 129, 130, 132, 133, 134, 136, 137, 138, 140, 141, 142, 144, 145,
        146, 148, 149, 150, 151, 153, 154, 155, 157, 158, 159, 161, 162, 163, 164, 166,
        167, 168, 169, 171, 172, 173, 174, 176, 177, 178, 179, 181, 182, 183, 184, 185,
        187, 188, 189, 190, 191, 192, 194, 195, 196, 197, 198, 199, 200, 201, 202, 204,
        205, 206, 207, 208, 209, 210, 211, 212, 213, 213, 214, 215, 216, 217, 218, 219,
        220, 221, 222, 223, 223, 224, 225, 226, 227, 227, 228, 229, 230, 230, 231, 232,
        232, 233, 234, 234, 235, 236, 236, 237, 237, 238, 239, 239, 240, 240, 241, 241,
        242, 242, 243, 243, 244, 244, 245, 245, 246, 246, 247, 247, 248, 248, 248, 249,
        249, 250, 250, 251, 251, 251, 252, 252, 253, 253, 253, 254, 254, 255, 255, 255,
    ],
    green: [
          0,   0,   0,   1,   1,   2,   2,   3,   3,   3,   4,   4,   5,   5,   6,   6,
          7,   7,   8,   8,   9,   9,  10,  10,  11,  11,  12,  12,  13,  13,  14,  14,
         15,  15,  16,  16,  17,  18,  18,  19,  19,  20,  21,  21,  22,  23,  23,  24,
         25,  25,  26,  27,  27,  28,  29,  30,  31,  31,  32,  33,  34,  35,  35,  36,
         37,  38,  39,  40,  41,  42,  43,  44,  45,  46,  47,  48,  49,  50,  51,  52,
         53,  54,  55,  57,  58,  59,  60,  61,  63,  64,  65,  66,  68,  69,  70,  71,
         73,  74,  75,  77,  78,  79,  81,  82,  83,  85,  86,  88,  89,  90,  92,  93,
         95,  96,  98,  99, 100, 102, 103, 105, 106, 108, 109, 111, 112, 114, 115, 117,
        118, 120, 121, 123, 124, 126, 127, 129, 130, 132, 133, 135, 137, 138, 140, 141,
        143, 144, 146, 147, 149, 150, 152, 153, 155, 156, 158, 159, 161, 163, 164, 166,
        167, 169, 170, 172, 173, 175, 176, 178, 179, 181, 182, 183, 185, 186, 188, 189,
        191, 192, 193, 195, 196, 198, 199, 201, 202, 203, 205, 206, 208, 209, 211, 212,
        214, 215, 216, 218, 219, 221, 222, 224, 225, 227, 228, 229, 231, 232, 234, 235,
        237, 238, 240, 241, 243, 244, 246, 247, 248, 250, 251, 253, 254, 255, 255, 255,
        255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
        255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    ],
    blue: [
         26,  27,  27,  28,  29,  30,  30,  31,  32,  33,  33,  34,  35,  36,  36,  37,
         38,  39,  39,  40,  41,  42,  42,  43,  44,  45,  45,  46,  47,  48,  48,  49,
         50,  51,  51,  52,  53,  53,  54,  55,  56,  56,  57,  58,  59,  59,  60,  61,
         62,  62,  63,  64,  65,  65,  66,  67,  68,  68,  69,  70,  71,  71,  72,  73,
         74,  74,  75,  76,  77,  77,  78,  79,  80,  80,  81,  82,  83,  83,  84,  85,
         86,  86,  87,  88,  88,  89,  90,  91,  91,  92,  93,  94,  94,  95,  96,  97,
         97,  98,  99, 100, 100, 101, 102, 103, 103, 104, 105, 106, 106, 107, 108, 109,
        109, 110, 111, 112, 112, 113, 114, 115, 115, 116, 117, 118, 118, 119, 120, 121,
        121, 122, 123, 124, 124, 125, 126, 126, 127, 128, 129, 129, 130, 131, 132, 132,
        133, 134, 135, 135, 136, 137, 138, 138, 139, 140, 141, 141, 142, 143, 144, 144,
        145, 146, 147, 147, 148, 149, 150, 150, 151, 152, 153, 153, 154, 155, 156, 156,
        157, 158, 159, 159, 160, 161, 161, 162, 163, 164, 164, 165, 166, 167, 167, 168,
        169, 170, 170, 171, 172, 173, 173, 174, 175, 176, 176, 177, 178, 179, 179, 180,
        181, 182, 182, 183, 184, 185, 185, 186, 187, 188, 188, 189, 190, 191, 191, 192,
        193, 194, 194, 195, 196, 196, 197, 198, 199, 199, 200, 201, 202, 202, 203, 204,
        205, 205, 206, 207, 208, 208, 209, 210, 211, 211, 212, 213, 214, 214, 215, 216,
    ],
};
