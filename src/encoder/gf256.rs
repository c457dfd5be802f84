/// GF(256) arithmetic for QR Reed-Solomon coding
/// Primitive polynomial x^8 + x^4 + x^3 + x^2 + 1, generator element 2
pub struct Gf256;

struct Tables {
    exp: [u8; 256],
    log: [u8; 256],
}

// EXP[i] = EXP[i-4] ^ EXP[i-5] ^ EXP[i-6] ^ EXP[i-8] for i >= 8, seeded with 1 << i
const fn build_tables() -> Tables {
    let mut exp = [0u8; 256];
    let mut log = [0u8; 256];
    let mut i = 0;
    while i < 8 {
        exp[i] = 1 << i;
        i += 1;
    }
    while i < 256 {
        exp[i] = exp[i - 4] ^ exp[i - 5] ^ exp[i - 6] ^ exp[i - 8];
        i += 1;
    }
    i = 0;
    while i < 255 {
        log[exp[i] as usize] = i as u8;
        i += 1;
    }
    Tables { exp, log }
}

static TABLES: Tables = build_tables();

impl Gf256 {
    /// Discrete logarithm of `n`; panics for zero, which has none
    pub fn glog(n: u8) -> u8 {
        if n == 0 {
            panic!("glog(0) is undefined");
        }
        TABLES.log[n as usize]
    }

    /// Antilog of any integer exponent, wrapped into the group order 255
    pub fn gexp(n: i32) -> u8 {
        TABLES.exp[n.rem_euclid(255) as usize]
    }

    /// Field product; zero if either operand is zero
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        Self::gexp(Self::glog(a) as i32 + Self::glog(b) as i32)
    }
}
