use super::gf256::Gf256;
use super::polynomial::Polynomial;

/// Computes error correction codewords for a fixed block EC length
#[derive(Debug, Clone)]
pub struct ReedSolomonEncoder {
    ec_len: usize,
    generator: Polynomial,
}

impl ReedSolomonEncoder {
    /// Build the generator polynomial of degree `ec_len`: the product of (x + alpha^i)
    pub fn new(ec_len: usize) -> Self {
        Self {
            ec_len,
            generator: generator_polynomial(ec_len),
        }
    }

    /// EC codewords per block
    pub fn ec_len(&self) -> usize {
        self.ec_len
    }

    /// Generator polynomial of degree `ec_len`
    pub fn generator(&self) -> &Polynomial {
        &self.generator
    }

    /// EC codewords for one block: remainder of data * x^ec_len, right-aligned to ec_len
    pub fn compute_ec(&self, data: &[u8]) -> Vec<u8> {
        let dividend = Polynomial::new(data, self.ec_len);
        let remainder = dividend.rem(&self.generator);
        let coefficients = remainder.coefficients();
        let mut ec = vec![0u8; self.ec_len];
        let offset = self.ec_len - coefficients.len();
        ec[offset..].copy_from_slice(coefficients);
        ec
    }
}

fn generator_polynomial(ec_len: usize) -> Polynomial {
    (0..ec_len).fold(Polynomial::new(&[1], 0), |acc, i| {
        acc.multiply(&Polynomial::new(&[1, Gf256::gexp(i as i32)], 0))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_WORLD_1M: [u8; 16] = [
        32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17,
    ];
    const HELLO_WORLD_1Q: [u8; 13] = [32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236];

    #[test]
    fn test_generator_degree() {
        for ec_len in [7, 10, 13, 30] {
            let encoder = ReedSolomonEncoder::new(ec_len);
            assert_eq!(encoder.generator().coefficients().len(), ec_len + 1);
            assert_eq!(encoder.generator().coefficients()[0], 1);
        }
    }

    #[test]
    fn test_generator_small() {
        // (x + 1)(x + 2) = x^2 + 3x + 2
        let encoder = ReedSolomonEncoder::new(2);
        assert_eq!(encoder.generator().coefficients(), &[1, 3, 2]);
    }

    #[test]
    fn test_hello_world_version1_m() {
        let ec = ReedSolomonEncoder::new(10).compute_ec(&HELLO_WORLD_1M);
        assert_eq!(ec, vec![196, 35, 39, 119, 235, 215, 231, 226, 93, 23]);
    }

    #[test]
    fn test_hello_world_version1_q() {
        let ec = ReedSolomonEncoder::new(13).compute_ec(&HELLO_WORLD_1Q);
        assert_eq!(
            ec,
            vec![168, 72, 22, 82, 217, 54, 156, 0, 46, 15, 180, 122, 16]
        );
    }

    #[test]
    fn test_zero_data_gives_zero_ec() {
        let ec = ReedSolomonEncoder::new(7).compute_ec(&[0; 19]);
        assert_eq!(ec, vec![0; 7]);
    }

    #[test]
    fn test_codeword_is_divisible_by_generator() {
        let encoder = ReedSolomonEncoder::new(10);
        let ec = encoder.compute_ec(&HELLO_WORLD_1M);
        let mut codeword = HELLO_WORLD_1M.to_vec();
        codeword.extend_from_slice(&ec);
        assert!(
            Polynomial::new(&codeword, 0)
                .rem(encoder.generator())
                .is_zero()
        );
    }
}
