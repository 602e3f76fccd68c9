//! Infinite prime stream: 2 followed by odd candidates trial-divided by the
//! primes found so far, up to the candidate's square root.

pub struct Primes {
    found: Vec<u64>,
    candidate: u64,
}

/// An endless iterator over the primes in order.
pub fn primes() -> Primes {
    Primes { found: Vec::new(), candidate: 0 }
}

impl Primes {
    fn is_prime(&self, candidate: u64) -> bool {
        let sqrt = candidate.isqrt();
        for &prime in &self.found {
            if prime > sqrt {
                break;
            }
            if candidate % prime == 0 {
                return false;
            }
        }
        true
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.candidate == 0 {
            // 2 is special-cased so the division loop only ever sees odds
            self.candidate = 3;
            return Some(2);
        }
        loop {
            let candidate = self.candidate;
            self.candidate += 2;
            if self.is_prime(candidate) {
                self.found.push(candidate);
                return Some(candidate);
            }
        }
    }
}
