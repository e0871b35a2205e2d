//! The "AI Advisor": a random pick from a fixed set of replies

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

/// Spinner caption while the advisor "thinks"
pub const ADVISOR_CAPTION: &str = "Evaluating financial patterns...";

/// Every reply the advisor can give
pub const ADVISOR_RESPONSES: [&str; 4] = [
    "Your spending trend is stable with moderate variance.",
    "Reducing discretionary food expenses could improve savings.",
    "Mid-week transactions show higher volatility.",
    "Transport costs may increase next month.",
];

/// Picks a canned reply uniformly at random
#[derive(Debug, Clone, Copy)]
pub struct Advisor {
    responses: &'static [&'static str],
}

impl Advisor {
    pub fn new() -> Self {
        Self {
            responses: &ADVISOR_RESPONSES,
        }
    }

    /// Answer a question
    ///
    /// The question is logged but does not influence the reply.
    pub fn consult<R: Rng + ?Sized>(&self, query: &str, rng: &mut R) -> &'static str {
        info!(query_len = query.len(), "advisor consulted");
        self.responses
            .choose(rng)
            .copied()
            .unwrap_or(ADVISOR_RESPONSES[0])
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_reply_is_from_fixed_set() {
        let mut rng = StdRng::seed_from_u64(7);
        let advisor = Advisor::new();
        for _ in 0..20 {
            let reply = advisor.consult("How am I doing?", &mut rng);
            assert!(ADVISOR_RESPONSES.contains(&reply));
        }
    }

    #[test]
    fn test_every_reply_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let advisor = Advisor::new();
        let seen: HashSet<_> = (0..200).map(|_| advisor.consult("", &mut rng)).collect();
        assert_eq!(seen.len(), ADVISOR_RESPONSES.len());
    }
}
