//! Constants for the MT19937 engine and its uniform conversions

// Period parameters
pub const MT_N: usize = 624;
pub const MT_M: usize = 397;
pub const MATRIX_A: u32 = 0x9908_b0df;
pub const UPPER_MASK: u32 = 0x8000_0000;
pub const LOWER_MASK: u32 = 0x7fff_ffff;

// Seeding
pub const DEFAULT_SEED: u32 = 5489;
pub const ARRAY_SEED: u32 = 19_650_218;
pub const INIT_MULTIPLIER: u32 = 1_812_433_253;
pub const ARRAY_MULTIPLIER_1: u32 = 1_664_525;
pub const ARRAY_MULTIPLIER_2: u32 = 1_566_083_941;

// Tempering
pub const TEMPER_B: u32 = 0x9d2c_5680;
pub const TEMPER_C: u32 = 0xefc6_0000;

// Uniform conversions
pub const INV_2POW32_MINUS_1: f64 = 1.0 / 4294967295.0;
pub const INV_2POW32: f64 = 1.0 / 4294967296.0;
pub const TWO_POW26: f64 = 67108864.0;
pub const INV_2POW53: f64 = 1.0 / 9007199254740992.0;
