use super::gf256::Gf256;

/// Polynomial over GF(256), highest-degree coefficient first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<u8>,
}

impl Polynomial {
    /// Build from coefficients, stripping leading zeros, then multiply by x^shift
    pub fn new(coefficients: &[u8], shift: usize) -> Self {
        let offset = coefficients
            .iter()
            .position(|&c| c != 0)
            .unwrap_or(coefficients.len());
        let mut stripped = Vec::with_capacity(coefficients.len() - offset + shift);
        stripped.extend_from_slice(&coefficients[offset..]);
        // The zero polynomial stays empty regardless of shift
        if !stripped.is_empty() {
            stripped.resize(stripped.len() + shift, 0);
        }
        Self {
            coefficients: stripped,
        }
    }

    /// Coefficients, highest degree first; empty for the zero polynomial
    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    /// Whether this is the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Product of two polynomials
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        if self.is_zero() || other.is_zero() {
            return Polynomial::new(&[], 0);
        }
        let mut product = vec![0u8; self.coefficients.len() + other.coefficients.len() - 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            for (j, &b) in other.coefficients.iter().enumerate() {
                product[i + j] ^= Gf256::mul(a, b);
            }
        }
        Polynomial::new(&product, 0)
    }

    /// Remainder of division by `divisor`
    pub fn rem(&self, divisor: &Polynomial) -> Polynomial {
        assert!(!divisor.is_zero(), "Division by the zero polynomial");
        let mut remainder = self.clone();
        let divisor_lead = Gf256::glog(divisor.coefficients[0]) as i32;
        while !remainder.is_zero() && remainder.coefficients.len() >= divisor.coefficients.len() {
            let ratio = Gf256::glog(remainder.coefficients[0]) as i32 - divisor_lead;
            let mut next = remainder.coefficients;
            for (slot, &d) in next.iter_mut().zip(divisor.coefficients.iter()) {
                if d != 0 {
                    *slot ^= Gf256::gexp(Gf256::glog(d) as i32 + ratio);
                }
            }
            remainder = Polynomial::new(&next, 0);
        }
        remainder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_leading_zeros() {
        let p = Polynomial::new(&[0, 0, 3, 0, 1], 0);
        assert_eq!(p.coefficients(), &[3, 0, 1]);

        let shifted = Polynomial::new(&[0, 5], 2);
        assert_eq!(shifted.coefficients(), &[5, 0, 0]);

        assert!(Polynomial::new(&[0, 0], 4).is_zero());
    }

    #[test]
    fn test_multiply() {
        // (x + 1)(x + 2) = x^2 + 3x + 2
        let a = Polynomial::new(&[1, 1], 0);
        let b = Polynomial::new(&[1, 2], 0);
        assert_eq!(a.multiply(&b).coefficients(), &[1, 3, 2]);

        let zero = Polynomial::new(&[], 0);
        assert!(a.multiply(&zero).is_zero());
    }

    #[test]
    fn test_multiply_skips_zero_coefficients() {
        // (x^2 + 1)(x) = x^3 + x
        let a = Polynomial::new(&[1, 0, 1], 0);
        let b = Polynomial::new(&[1, 0], 0);
        assert_eq!(a.multiply(&b).coefficients(), &[1, 0, 1, 0]);
    }

    #[test]
    fn test_rem_lower_degree_is_unchanged() {
        let a = Polynomial::new(&[7, 9], 0);
        let b = Polynomial::new(&[1, 2, 3], 0);
        assert_eq!(a.rem(&b), a);
    }

    #[test]
    fn test_rem_self_is_zero() {
        let a = Polynomial::new(&[12, 200, 3, 77], 0);
        assert!(a.rem(&a).is_zero());
    }

    #[test]
    fn test_rem_of_product_is_zero() {
        let a = Polynomial::new(&[1, 2], 0);
        let b = Polynomial::new(&[1, 4, 9], 0);
        assert!(a.multiply(&b).rem(&b).is_zero());
    }
}
